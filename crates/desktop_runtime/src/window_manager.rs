//! Authoritative window store: window records, active pointer, and the global stacking counter.
//!
//! Every mutation goes through a [`WindowStore`] method. A mutation naming a window that is no
//! longer open is a no-op: the method returns `false` and emits a debug-level log line, since the
//! pointer-driven callers (typically a gesture still in flight after a close) cannot recover.

use desktop_app_contract::ApplicationId;
use leptos::logging;

use crate::{
    config::ShellConfig,
    model::{OpenWindowRequest, ViewportSize, WindowId, WindowRecord, WindowRect},
};

#[derive(Debug, Clone, PartialEq)]
pub struct WindowStore {
    windows: Vec<WindowRecord>,
    active: Option<WindowId>,
    stack_counter: u64,
    next_window_id: u64,
    running_apps: Vec<ApplicationId>,
    viewport: ViewportSize,
    config: ShellConfig,
}

impl Default for WindowStore {
    fn default() -> Self {
        Self::new(ShellConfig::default(), ViewportSize::default())
    }
}

impl WindowStore {
    pub fn new(config: ShellConfig, viewport: ViewportSize) -> Self {
        Self {
            windows: Vec::new(),
            active: None,
            stack_counter: config.initial_stack_index,
            next_window_id: 1,
            running_apps: Vec::new(),
            viewport,
            config,
        }
    }

    /// Open windows in creation order. Paint order is by `z_index`, not by position here.
    pub fn windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    pub fn window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    pub fn window_for_app(&self, app_id: &ApplicationId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.app_id == *app_id)
    }

    pub fn active_window_id(&self) -> Option<WindowId> {
        self.active
    }

    pub fn active_window(&self) -> Option<&WindowRecord> {
        self.active.and_then(|id| self.window(id))
    }

    /// Applications with at least one open window, in first-open order.
    pub fn running_apps(&self) -> &[ApplicationId] {
        &self.running_apps
    }

    pub fn is_running(&self, app_id: &ApplicationId) -> bool {
        self.running_apps.contains(app_id)
    }

    pub fn stack_counter(&self) -> u64 {
        self.stack_counter
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Geometry a maximized window occupies: below the menu bar, above the dock.
    pub fn maximized_rect(&self) -> WindowRect {
        let top = self.config.menu_bar_height;
        WindowRect {
            x: 0,
            y: top,
            w: self.viewport.w,
            h: self.viewport.h - top - self.config.dock_height,
        }
        .clamped_min(self.config.min_window_width, self.config.min_window_height)
    }

    /// Visible geometry of `window`, deriving the full-screen rect while maximized.
    pub fn effective_rect(&self, window: &WindowRecord) -> WindowRect {
        if window.maximized {
            self.maximized_rect()
        } else {
            window.rect
        }
    }

    /// Updates the viewport used for centering new windows and for maximized geometry.
    ///
    /// Returns `true` when the size changed.
    pub fn set_viewport(&mut self, viewport: ViewportSize) -> bool {
        if self.viewport == viewport {
            return false;
        }
        self.viewport = viewport;
        true
    }

    /// Opens a window for `request.app_id`, or refocuses the existing one.
    ///
    /// At most one window exists per application; a second open unminimizes and raises it.
    pub fn open(&mut self, request: &OpenWindowRequest) -> WindowId {
        if let Some(existing) = self.window_for_app(&request.app_id).map(|w| w.id) {
            self.bring_to_front(existing);
            return existing;
        }

        let id = WindowId(self.next_window_id);
        self.next_window_id = self.next_window_id.saturating_add(1);

        let w = self
            .config
            .clamp_width(request.default_width.unwrap_or(self.config.default_window_width));
        let h = self
            .config
            .clamp_height(request.default_height.unwrap_or(self.config.default_window_height));
        let rect = WindowRect {
            x: (self.viewport.w - w) / 2,
            y: self.config.clamp_top((self.viewport.h - h) / 2),
            w,
            h,
        };

        self.stack_counter += 1;
        self.windows.push(WindowRecord {
            id,
            app_id: request.app_id.clone(),
            title: request.title.clone(),
            rect,
            z_index: self.stack_counter,
            minimized: false,
            maximized: false,
        });
        self.active = Some(id);
        self.recompute_running_apps();
        id
    }

    /// Removes a window. Focus is not handed to another window when the active one closes.
    pub fn close(&mut self, window_id: WindowId) -> bool {
        let Some(index) = self.windows.iter().position(|w| w.id == window_id) else {
            stale_window("close", window_id);
            return false;
        };

        self.windows.remove(index);
        if self.active == Some(window_id) {
            self.active = None;
        }
        self.recompute_running_apps();
        true
    }

    pub fn minimize(&mut self, window_id: WindowId) -> bool {
        let Some(window) = self.window_mut("minimize", window_id) else {
            return false;
        };
        window.minimized = true;
        if self.active == Some(window_id) {
            self.active = None;
        }
        true
    }

    /// Toggles the maximized flag. Stored geometry is left untouched so a second toggle
    /// restores it exactly.
    pub fn toggle_maximize(&mut self, window_id: WindowId) -> bool {
        let Some(window) = self.window_mut("maximize", window_id) else {
            return false;
        };
        window.maximized = !window.maximized;
        true
    }

    /// Sets the active pointer without touching stacking order.
    ///
    /// Minimized windows cannot become active; focusing one is a no-op.
    pub fn focus(&mut self, window_id: WindowId) -> bool {
        let Some(window) = self.window_mut("focus", window_id) else {
            return false;
        };
        if window.minimized {
            return false;
        }
        self.active = Some(window_id);
        true
    }

    /// Raises `window_id` above every other window and makes it active.
    ///
    /// The counter advances even when the window is already in front; only relative order matters.
    pub fn bring_to_front(&mut self, window_id: WindowId) -> bool {
        let next = self.stack_counter + 1;
        let Some(window) = self.window_mut("bring_to_front", window_id) else {
            return false;
        };
        window.z_index = next;
        window.minimized = false;
        self.stack_counter = next;
        self.active = Some(window_id);
        true
    }

    pub fn move_window(&mut self, window_id: WindowId, x: i32, y: i32) -> bool {
        let y = self.config.clamp_top(y);
        let Some(window) = self.window_mut("move", window_id) else {
            return false;
        };
        window.rect.x = x;
        window.rect.y = y;
        true
    }

    pub fn resize_window(&mut self, window_id: WindowId, width: i32, height: i32) -> bool {
        let w = self.config.clamp_width(width);
        let h = self.config.clamp_height(height);
        let Some(window) = self.window_mut("resize", window_id) else {
            return false;
        };
        window.rect.w = w;
        window.rect.h = h;
        true
    }

    fn window_mut(&mut self, op: &'static str, window_id: WindowId) -> Option<&mut WindowRecord> {
        let window = self.windows.iter_mut().find(|w| w.id == window_id);
        if window.is_none() {
            stale_window(op, window_id);
        }
        window
    }

    fn recompute_running_apps(&mut self) {
        let mut running: Vec<ApplicationId> = Vec::with_capacity(self.windows.len());
        for window in &self.windows {
            if !running.contains(&window.app_id) {
                running.push(window.app_id.clone());
            }
        }
        self.running_apps = running;
    }
}

fn stale_window(op: &'static str, window_id: WindowId) {
    logging::debug_warn!("window store: {op} ignored for missing window {}", window_id.0);
}
