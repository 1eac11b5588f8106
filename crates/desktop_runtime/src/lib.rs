pub mod apps;
pub mod compositor;
pub mod components;
pub mod config;
pub mod host;
pub mod interaction;
pub mod launcher;
pub mod model;
pub mod preferences;
pub mod reducer;
mod runtime_context;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use compositor::{compose, Surface};
pub use config::ShellConfig;
pub use interaction::InteractionState;
pub use model::*;
pub use preferences::{AccentColor, DesktopPreferences, ThemeMode};
pub use reducer::{reduce_desktop, DesktopAction};
pub use window_manager::WindowStore;
