use super::*;

#[component]
pub(super) fn Dock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let hovered = create_rw_signal(None::<usize>);
    let pointer_inside = create_rw_signal(false);
    let dock_height = apps::shell_config().dock_height;
    let preferences = Signal::derive(move || state.get().preferences);

    // The nav stays in place as the hover zone while the items slide out of view.
    let items_class = move || {
        if preferences.get().dock_auto_hide && !pointer_inside.get() {
            "dock-items dock-hidden"
        } else {
            "dock-items"
        }
    };

    view! {
        <nav
            class="dock"
            aria-label="Dock"
            style=format!("height:{dock_height}px;")
            on:mouseenter=move |_| pointer_inside.set(true)
            on:mouseleave=move |_| pointer_inside.set(false)
        >
            <div class=items_class on:mouseleave=move |_| hovered.set(None)>
                {apps::app_registry()
                    .iter()
                    .enumerate()
                    .map(|(index, app)| {
                        let app_id = app.id.clone();
                        let running_id = app.id.clone();
                        let is_running = move || state.get().store.is_running(&running_id);
                        let item_style = move || {
                            let prefs = preferences.get();
                            let scale =
                                dock_item_scale(index, hovered.get(), prefs.dock_magnification);
                            format!(
                                "width:{size}px;height:{size}px;transform:scale({scale});",
                                size = prefs.dock_icon_size
                            )
                        };
                        view! {
                            <div
                                class="dock-item"
                                style=item_style
                                on:mouseenter=move |_| hovered.set(Some(index))
                            >
                                <button
                                    class="dock-item-button"
                                    title=app.name.clone()
                                    aria-label=app.name.clone()
                                    on:click=move |_| {
                                        runtime.dispatch_action(DesktopAction::OpenApp {
                                            app_id: app_id.clone(),
                                        });
                                    }
                                >
                                    <span class="dock-item-icon" aria-hidden="true">
                                        {app.icon.clone()}
                                    </span>
                                </button>
                                <Show when=is_running fallback=|| ()>
                                    <span class="dock-running-indicator" aria-hidden="true" />
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
