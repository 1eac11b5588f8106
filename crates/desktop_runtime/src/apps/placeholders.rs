//! Built-in placeholder app implementations mounted into managed windows.
//!
//! The apps are opaque leaf widgets to the window manager; each is only reachable through the
//! mount table in [`app_module`].

use desktop_app_contract::{AppModule, AppMountContext, ApplicationId};
use leptos::*;

use crate::{
    components::use_desktop_runtime,
    preferences::{AccentColor, ThemeMode, DOCK_ICON_SIZE_RANGE, DOCK_MAGNIFICATION_RANGE},
    reducer::DesktopAction,
};

/// Resolves the mount function for a catalog app id.
pub(super) fn app_module(app_id: &ApplicationId) -> Option<AppModule> {
    let mount_fn: fn(AppMountContext) -> View = match app_id.as_str() {
        "finder" => mount_finder,
        "browser" => mount_browser,
        "notes" => mount_notes,
        "terminal" => mount_terminal,
        "photos" => mount_photos,
        "music" => mount_music,
        "calendar" => mount_calendar,
        "settings" => mount_settings,
        _ => return None,
    };
    Some(AppModule::new(mount_fn))
}

fn mount_finder(context: AppMountContext) -> View {
    let entries = ["Applications", "Desktop", "Documents", "Downloads", "Pictures"];
    view! {
        <div class="app-shell app-finder" data-window-id=context.window_id>
            <ul class="app-list">
                {entries
                    .into_iter()
                    .map(|name| view! { <li class="app-list-item">{name}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
    .into_view()
}

fn mount_browser(context: AppMountContext) -> View {
    let url = create_rw_signal("https://example.com".to_string());
    view! {
        <div class="app-shell app-browser" data-window-id=context.window_id>
            <input
                class="app-address-bar"
                type="text"
                prop:value=move || url.get()
                on:change=move |ev| url.set(event_target_value(&ev))
            />
            <p class="app-statusbar">{move || format!("Viewing {}", url.get())}</p>
        </div>
    }
    .into_view()
}

fn mount_notes(context: AppMountContext) -> View {
    let text = create_rw_signal(String::new());
    view! {
        <div class="app-shell app-notes" data-window-id=context.window_id>
            <textarea
                class="app-editor"
                placeholder="Start typing..."
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
            />
            <div class="app-statusbar">
                {move || format!("{} characters", text.get().chars().count())}
            </div>
        </div>
    }
    .into_view()
}

fn mount_terminal(context: AppMountContext) -> View {
    let history = create_rw_signal(vec![format!("Last login: window {}", context.window_id)]);
    let input = create_rw_signal(String::new());
    let submit = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        let line = input.get_untracked();
        history.update(|lines| lines.push(format!("$ {line}")));
        input.set(String::new());
    };
    view! {
        <div class="app-shell app-terminal" data-window-id=context.window_id>
            <pre class="app-terminal-output">{move || history.get().join("\n")}</pre>
            <input
                class="app-terminal-input"
                type="text"
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keydown=submit
            />
        </div>
    }
    .into_view()
}

fn mount_photos(context: AppMountContext) -> View {
    simple_app(context, "app-photos", "No photos yet.")
}

fn mount_music(context: AppMountContext) -> View {
    simple_app(context, "app-music", "Nothing playing.")
}

fn mount_calendar(context: AppMountContext) -> View {
    simple_app(context, "app-calendar", "No upcoming events.")
}

/// Appearance and dock controls bound to the live desktop preferences.
fn mount_settings(context: AppMountContext) -> View {
    let runtime = use_desktop_runtime();
    let preferences = Signal::derive(move || runtime.state.get().preferences);

    let theme_buttons = ThemeMode::ALL
        .into_iter()
        .map(|theme| {
            view! {
                <button
                    class="settings-choice"
                    class:selected=move || preferences.get().theme == theme
                    aria-pressed=move || (preferences.get().theme == theme).to_string()
                    on:click=move |_| runtime.dispatch_action(DesktopAction::SetTheme { theme })
                >
                    {theme.label()}
                </button>
            }
        })
        .collect_view();

    let accent_swatches = AccentColor::ALL
        .into_iter()
        .map(|accent| {
            view! {
                <button
                    class="settings-swatch"
                    class:selected=move || preferences.get().accent == accent
                    title=accent.label()
                    aria-label=accent.label()
                    style=format!("background:{};", accent.hex())
                    on:click=move |_| {
                        runtime.dispatch_action(DesktopAction::SetAccentColor { accent })
                    }
                />
            }
        })
        .collect_view();

    let on_size_input = move |ev: ev::Event| {
        if let Ok(size) = event_target_value(&ev).parse::<i32>() {
            runtime.dispatch_action(DesktopAction::SetDockIconSize { size });
        }
    };
    let on_magnification_input = move |ev: ev::Event| {
        if let Ok(magnification) = event_target_value(&ev).parse::<f64>() {
            runtime.dispatch_action(DesktopAction::SetDockMagnification { magnification });
        }
    };
    let on_auto_hide_change = move |ev: ev::Event| {
        runtime.dispatch_action(DesktopAction::SetDockAutoHide {
            auto_hide: event_target_checked(&ev),
        });
    };

    view! {
        <div class="app-shell app-settings" data-window-id=context.window_id>
            <section class="settings-section">
                <h3>"Appearance"</h3>
                <div class="settings-row" role="group" aria-label="Theme">
                    {theme_buttons}
                </div>
                <div class="settings-row" role="group" aria-label="Accent color">
                    {accent_swatches}
                </div>
            </section>
            <section class="settings-section">
                <h3>"Dock"</h3>
                <label class="settings-row">
                    "Size"
                    <input
                        type="range"
                        min=*DOCK_ICON_SIZE_RANGE.start()
                        max=*DOCK_ICON_SIZE_RANGE.end()
                        step="1"
                        prop:value=move || preferences.get().dock_icon_size.to_string()
                        on:input=on_size_input
                    />
                </label>
                <label class="settings-row">
                    "Magnification"
                    <input
                        type="range"
                        min=*DOCK_MAGNIFICATION_RANGE.start()
                        max=*DOCK_MAGNIFICATION_RANGE.end()
                        step="0.1"
                        prop:value=move || preferences.get().dock_magnification.to_string()
                        on:input=on_magnification_input
                    />
                </label>
                <label class="settings-row">
                    <input
                        type="checkbox"
                        prop:checked=move || preferences.get().dock_auto_hide
                        on:change=on_auto_hide_change
                    />
                    "Automatically hide the dock"
                </label>
            </section>
        </div>
    }
    .into_view()
}

fn simple_app(context: AppMountContext, class_name: &'static str, message: &'static str) -> View {
    view! {
        <div class=format!("app-shell {class_name}") data-window-id=context.window_id>
            <p><strong>{context.title}</strong></p>
            <p>{message}</p>
        </div>
    }
    .into_view()
}
