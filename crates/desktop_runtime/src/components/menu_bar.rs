use std::time::Duration;

use super::*;

#[component]
pub(super) fn MenuBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let clock_now = create_rw_signal(ClockSnapshot::now());
    let height = apps::shell_config().menu_bar_height;

    if let Ok(interval) =
        set_interval_with_handle(move || clock_now.set(ClockSnapshot::now()), Duration::from_secs(1))
    {
        on_cleanup(move || interval.clear());
    }

    let active_title = move || {
        state
            .get()
            .store
            .active_window()
            .map(|window| window.title.clone())
    };

    view! {
        <header class="menu-bar" style=format!("height:{height}px;")>
            <div class="menu-bar-left">
                <button
                    class="menu-bar-launcher"
                    aria-label="Search apps"
                    on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleLauncher)
                />
                <span class="menu-bar-active-title">{move || active_title().unwrap_or_default()}</span>
            </div>
            <div class="menu-bar-right">
                <time class="menu-bar-clock">{move || format_menu_bar_clock(clock_now.get())}</time>
            </div>
        </header>
    }
}
