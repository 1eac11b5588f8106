//! Shell chrome metrics and window geometry policy loaded from `desktop.toml`.

use serde::{Deserialize, Serialize};

/// Height of the fixed menu bar (top chrome) window geometry may never be placed above.
pub const MENU_BAR_HEIGHT: i32 = 30;
/// Height reserved for the dock when deriving maximized geometry.
pub const DOCK_HEIGHT: i32 = 80;
/// Minimum managed window width.
pub const MIN_WINDOW_WIDTH: i32 = 400;
/// Minimum managed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 300;
/// Window width used when an app does not declare one.
pub const DEFAULT_WINDOW_WIDTH: i32 = 800;
/// Window height used when an app does not declare one.
pub const DEFAULT_WINDOW_HEIGHT: i32 = 600;
/// Starting value of the global stacking counter.
pub const INITIAL_STACK_INDEX: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Geometry and dock policy shared by the window store and the shell chrome.
pub struct ShellConfig {
    pub menu_bar_height: i32,
    pub dock_height: i32,
    pub min_window_width: i32,
    pub min_window_height: i32,
    pub default_window_width: i32,
    pub default_window_height: i32,
    pub initial_stack_index: u64,
    pub dock_icon_size: i32,
    pub dock_magnification: f64,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            menu_bar_height: MENU_BAR_HEIGHT,
            dock_height: DOCK_HEIGHT,
            min_window_width: MIN_WINDOW_WIDTH,
            min_window_height: MIN_WINDOW_HEIGHT,
            default_window_width: DEFAULT_WINDOW_WIDTH,
            default_window_height: DEFAULT_WINDOW_HEIGHT,
            initial_stack_index: INITIAL_STACK_INDEX,
            dock_icon_size: 64,
            dock_magnification: 1.5,
        }
    }
}

impl ShellConfig {
    /// Clamps a width to the configured floor.
    pub fn clamp_width(&self, width: i32) -> i32 {
        width.max(self.min_window_width)
    }

    /// Clamps a height to the configured floor.
    pub fn clamp_height(&self, height: i32) -> i32 {
        height.max(self.min_window_height)
    }

    /// Clamps a window top edge so it never rises above the menu bar.
    pub fn clamp_top(&self, y: i32) -> i32 {
        y.max(self.menu_bar_height)
    }
}
