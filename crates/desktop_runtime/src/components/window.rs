use desktop_app_contract::AppMountContext;

use super::*;
use crate::model::WindowId;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn is_primary_button(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

/// Frame of one composed surface. The frame element stays mounted while the window is
/// visible; only its attributes track the surface so the app body keeps its local state.
#[component]
pub(super) fn DesktopWindow(window_id: WindowId, surfaces: Signal<Vec<Surface>>) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let surface = Signal::derive(move || {
        surfaces
            .get()
            .into_iter()
            .find(|surface| surface.window_id == window_id)
    });
    let is_active = move || surface.get().map(|s| s.active).unwrap_or(false);
    let is_maximized = move || surface.get().map(|s| s.maximized).unwrap_or(false);

    let raise = move |_| {
        let active = surface.get_untracked().map(|s| s.active).unwrap_or(false);
        if !active {
            runtime.dispatch_action(DesktopAction::BringToFront { window_id });
        }
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if !is_primary_button(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let titlebar_double_click = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::ToggleMaximize { window_id });
    };

    let contents = surface.get_untracked().map(|current| {
        current.module.mount(AppMountContext {
            app_id: current.app_id.clone(),
            window_id: window_id.0,
            title: current.title.clone(),
        })
    });

    view! {
        <section
            class=move || {
                let active_class = if is_active() { " active" } else { "" };
                let maximized_class = if is_maximized() { " maximized" } else { "" };
                format!("desktop-window{active_class}{maximized_class}")
            }
            style=move || surface.get().map(|s| window_style(&s)).unwrap_or_default()
            data-window-id=window_id.0
            on:pointerdown=raise
            role="dialog"
            aria-label=move || surface.get().map(|s| s.title).unwrap_or_default()
        >
            <header
                class="titlebar"
                on:pointerdown=begin_move
                on:dblclick=titlebar_double_click
            >
                <WindowControls window_id=window_id maximized=Signal::derive(is_maximized) />
                <div class="titlebar-title">
                    {move || surface.get().map(|s| s.title).unwrap_or_default()}
                </div>
            </header>
            <div class="window-body">{contents}</div>
            <Show when=move || !is_maximized() fallback=|| ()>
                {ResizeEdge::ALL
                    .into_iter()
                    .map(|edge| view! { <WindowResizeHandle window_id=window_id edge=edge /> })
                    .collect_view()}
            </Show>
        </section>
    }
}

#[component]
fn WindowControls(window_id: WindowId, maximized: Signal<bool>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let swallow_pointer = move |ev: web_sys::PointerEvent| {
        ev.prevent_default();
        ev.stop_propagation();
    };

    view! {
        <div class="titlebar-controls">
            <button
                class="window-control close"
                aria-label="Close window"
                on:pointerdown=swallow_pointer
                on:mousedown=move |ev| stop_mouse_event(&ev)
                on:click=move |ev| {
                    stop_mouse_event(&ev);
                    runtime.dispatch_action(DesktopAction::CloseWindow { window_id });
                }
            />
            <button
                class="window-control minimize"
                aria-label="Minimize window"
                on:pointerdown=swallow_pointer
                on:mousedown=move |ev| stop_mouse_event(&ev)
                on:click=move |ev| {
                    stop_mouse_event(&ev);
                    runtime.dispatch_action(DesktopAction::MinimizeWindow { window_id });
                }
            />
            <button
                class="window-control maximize"
                aria-label=move || if maximized.get() { "Restore window" } else { "Maximize window" }
                on:pointerdown=swallow_pointer
                on:mousedown=move |ev| stop_mouse_event(&ev)
                on:click=move |ev| {
                    stop_mouse_event(&ev);
                    runtime.dispatch_action(DesktopAction::ToggleMaximize { window_id });
                }
            />
        </div>
    }
}

#[component]
fn WindowResizeHandle(window_id: WindowId, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let class_name = format!("window-resize-handle {}", resize_edge_class(edge));

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_button(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            window_id,
            edge,
            pointer: pointer_from_pointer_event(&ev),
        });
    };

    view! {
        <div
            class=class_name
            data-edge=edge.token()
            aria-hidden="true"
            on:pointerdown=on_pointerdown
        />
    }
}
