//! Browser environment queries used by the shell.
//!
//! Non-wasm builds (unit tests, tooling) fall back to the default viewport.

use crate::model::ViewportSize;

/// Current browser viewport size in CSS pixels.
pub fn desktop_viewport() -> ViewportSize {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let fallback = ViewportSize::default();
            let w = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(fallback.w);
            let h = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(fallback.h);
            return ViewportSize { w, h };
        }
    }

    ViewportSize::default()
}

/// Moves keyboard focus to the element with `dom_id` on the next tick.
pub fn focus_element_by_id(dom_id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::{closure::Closure, JsCast};

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(element) = window
            .document()
            .and_then(|document| document.get_element_by_id(dom_id))
            .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };
        let callback = Closure::once_into_js(move || {
            let _ = element.focus();
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = dom_id;
}
