use super::*;
use crate::launcher::LauncherKey;

const LAUNCHER_INPUT_ID: &str = "launcher-query";

#[component]
pub(super) fn LauncherOverlay() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let is_open = move || state.get().launcher.open;

    create_effect(move |was_open: Option<bool>| {
        let open = state.get().launcher.open;
        if open && !was_open.unwrap_or(false) {
            host::focus_element_by_id(LAUNCHER_INPUT_ID);
        }
        open
    });

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let Some(key) = LauncherKey::from_key(&ev.key()) else {
            return;
        };
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::LauncherKey { key });
    };

    view! {
        <Show when=is_open fallback=|| ()>
            <div
                class="launcher-backdrop"
                on:mousedown=move |_| runtime.dispatch_action(DesktopAction::CloseLauncher)
            >
                <div
                    class="launcher-panel"
                    role="dialog"
                    aria-label="Search apps"
                    on:mousedown=move |ev| ev.stop_propagation()
                >
                    <input
                        id=LAUNCHER_INPUT_ID
                        class="launcher-input"
                        type="text"
                        placeholder="Search apps"
                        autocomplete="off"
                        prop:value=move || state.get().launcher.query
                        on:input=move |ev| {
                            runtime.dispatch_action(DesktopAction::SetLauncherQuery {
                                query: event_target_value(&ev),
                            });
                        }
                        on:keydown=on_keydown
                    />
                    <LauncherResults />
                </div>
            </div>
        </Show>
    }
}

#[component]
fn LauncherResults() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let results = move || {
        let desktop = state.get();
        let selected = desktop.launcher.selected;
        desktop
            .launcher
            .matches(apps::app_registry())
            .into_iter()
            .enumerate()
            .map(|(index, app)| (app, index == selected))
            .collect::<Vec<_>>()
    };

    view! {
        <ul class="launcher-results" role="listbox">
            {move || {
                let rows = results();
                if rows.is_empty() {
                    return view! { <li class="launcher-empty">"No results"</li> }.into_view();
                }
                rows.into_iter()
                    .map(|(app, selected)| {
                        let app_id = app.id.clone();
                        view! {
                            <li
                                class=if selected { "launcher-result selected" } else { "launcher-result" }
                                role="option"
                                aria-selected=selected.to_string()
                                on:click=move |_| {
                                    runtime.dispatch_action(DesktopAction::LaunchFromLauncher {
                                        app_id: app_id.clone(),
                                    });
                                }
                            >
                                <span class="launcher-result-icon" aria-hidden="true">
                                    {app.icon.clone()}
                                </span>
                                <span>{app.name.clone()}</span>
                            </li>
                        }
                    })
                    .collect_view()
            }}
        </ul>
    }
}
