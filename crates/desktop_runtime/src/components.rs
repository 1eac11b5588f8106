//! Desktop shell UI composition and interaction surfaces.

mod dock;
mod launcher;
mod menu_bar;
mod window;

use leptos::*;

use self::{dock::Dock, launcher::LauncherOverlay, menu_bar::MenuBar, window::DesktopWindow};

use crate::{
    apps,
    compositor::{compose, Surface},
    host,
    launcher::is_launcher_shortcut,
    model::{PointerPosition, ResizeEdge},
    preferences::DesktopPreferences,
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Renders the full desktop shell: menu bar, window layer, dock, and launcher overlay.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let surfaces: Signal<Vec<Surface>> =
        Signal::derive(move || compose(&state.get().store, apps::app_registry()));
    let preferences = Signal::derive(move || state.get().preferences);

    let shortcut_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.repeat() {
            return;
        }
        if is_launcher_shortcut(ev.meta_key(), ev.ctrl_key(), &ev.code()) {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::ToggleLauncher);
        }
    });
    on_cleanup(move || shortcut_listener.remove());

    let resize_listener = window_event_listener(ev::resize, move |_| {
        runtime.dispatch_action(DesktopAction::SetViewport {
            viewport: host::desktop_viewport(),
        });
    });
    on_cleanup(move || resize_listener.remove());

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if !runtime.interaction.get_untracked().has_active_gesture() {
            return;
        }
        runtime.dispatch_action(DesktopAction::PointerMove {
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let on_pointer_end = move |_| end_active_pointer_interaction(runtime);

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            tabindex="-1"
            data-theme=move || preferences.get().theme.token()
            style=move || shell_root_style(&preferences.get())
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <MenuBar />
            <div class="desktop-window-layer">
                <For
                    each=move || surfaces.get()
                    key=|surface| surface.window_id.0
                    let:surface
                >
                    <DesktopWindow window_id=surface.window_id surfaces=surfaces />
                </For>
            </div>
            <Dock />
            <LauncherOverlay />
        </div>
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn end_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    if runtime.interaction.get_untracked().has_active_gesture() {
        runtime.dispatch_action(DesktopAction::PointerUp);
    }
}

fn resize_edge_class(edge: ResizeEdge) -> String {
    format!("edge-{}", edge.token())
}

fn window_style(surface: &Surface) -> String {
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
        surface.rect.x, surface.rect.y, surface.rect.w, surface.rect.h, surface.z_index
    )
}

/// CSS custom properties the stylesheet reads for the accent colour and dock sizing.
fn shell_root_style(preferences: &DesktopPreferences) -> String {
    format!(
        "--accent-color:{};--dock-icon-size:{}px;",
        preferences.accent.hex(),
        preferences.dock_icon_size
    )
}

/// Scale of the dock item at `index` while the item at `hovered` is under the pointer.
fn dock_item_scale(index: usize, hovered: Option<usize>, magnification: f64) -> f64 {
    let Some(hovered) = hovered else {
        return 1.0;
    };
    match index.abs_diff(hovered) {
        0 => magnification,
        1 => 1.0 + (magnification - 1.0) * 0.5,
        _ => 1.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockSnapshot {
    hour: u32,
    minute: u32,
}

impl ClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self { hour: 0, minute: 0 }
        }
    }
}

/// 12-hour `h:mm AM` menu bar clock text.
fn format_menu_bar_clock(snapshot: ClockSnapshot) -> String {
    let mut hour = snapshot.hour % 12;
    if hour == 0 {
        hour = 12;
    }
    let suffix = if snapshot.hour >= 12 { "PM" } else { "AM" };
    format!("{}:{:02} {}", hour, snapshot.minute, suffix)
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::{AppModule, AppMountContext, ApplicationId};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{WindowId, WindowRect};

    #[test]
    fn dock_scale_magnifies_hovered_item_and_neighbours() {
        let scales: Vec<f64> = (0..5)
            .map(|index| dock_item_scale(index, Some(2), 1.5))
            .collect();
        assert_eq!(scales, vec![1.0, 1.25, 1.5, 1.25, 1.0]);
    }

    #[test]
    fn dock_scale_is_flat_without_hover() {
        assert!((0..8).all(|index| dock_item_scale(index, None, 1.5) == 1.0));
        assert_eq!(dock_item_scale(0, Some(0), 2.0), 2.0);
        assert_eq!(dock_item_scale(1, Some(0), 2.0), 1.5);
    }

    #[test]
    fn clock_uses_twelve_hour_format() {
        assert_eq!(
            format_menu_bar_clock(ClockSnapshot { hour: 0, minute: 5 }),
            "12:05 AM"
        );
        assert_eq!(
            format_menu_bar_clock(ClockSnapshot {
                hour: 13,
                minute: 45
            }),
            "1:45 PM"
        );
        assert_eq!(
            format_menu_bar_clock(ClockSnapshot {
                hour: 12,
                minute: 0
            }),
            "12:00 PM"
        );
    }

    #[test]
    fn shell_root_style_exposes_accent_and_dock_size() {
        let preferences = DesktopPreferences {
            accent: crate::preferences::AccentColor::Purple,
            dock_icon_size: 72,
            ..DesktopPreferences::default()
        };
        assert_eq!(
            shell_root_style(&preferences),
            "--accent-color:#7C3AED;--dock-icon-size:72px;"
        );
    }

    #[test]
    fn window_style_positions_surface() {
        fn blank(_: AppMountContext) -> View {
            ().into_view()
        }
        let surface = Surface {
            window_id: WindowId(3),
            app_id: ApplicationId::trusted("notes"),
            title: "Notes".to_string(),
            rect: WindowRect {
                x: 240,
                y: 100,
                w: 800,
                h: 600,
            },
            z_index: 104,
            active: true,
            maximized: false,
            module: AppModule::new(blank),
        };

        assert_eq!(
            window_style(&surface),
            "left:240px;top:100px;width:800px;height:600px;z-index:104;"
        );
        assert_eq!(resize_edge_class(ResizeEdge::NorthWest), "edge-nw");
    }
}
