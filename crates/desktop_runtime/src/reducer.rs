//! Reducer actions and transition logic for the desktop runtime.
//!
//! Every UI event is translated into a [`DesktopAction`] and applied by [`reduce_desktop`]. Window
//! mutations are delegated to [`WindowStore`](crate::window_manager::WindowStore) and pointer
//! gestures to [`InteractionState`]; the reducer only routes and sequences them.

use desktop_app_contract::ApplicationId;
use leptos::logging;

use crate::{
    apps,
    interaction::InteractionState,
    launcher::{LauncherKey, LauncherOutcome},
    model::{DesktopState, OpenWindowRequest, PointerPosition, ResizeEdge, ViewportSize, WindowId},
    preferences::{AccentColor, ThemeMode},
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open (or refocus) the window of a registry app.
    OpenApp {
        /// Registry app to open.
        app_id: ApplicationId,
    },
    /// Open (or refocus) a window from an explicit request.
    OpenWindow(OpenWindowRequest),
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Flip the maximized flag of a window.
    ToggleMaximize {
        /// Window to maximize or restore.
        window_id: WindowId,
    },
    /// Make a window active without restacking it.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Raise a window above all others and make it active.
    BringToFront {
        /// Window to raise.
        window_id: WindowId,
    },
    /// Begin dragging a window by its title bar.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Begin resizing a window from one of its handles.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
        /// Handle grabbed by the pointer.
        edge: ResizeEdge,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Pointer moved anywhere in the document.
    PointerMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Pointer released or cancelled; ends every gesture.
    PointerUp,
    /// Browser viewport changed size.
    SetViewport {
        /// New viewport size.
        viewport: ViewportSize,
    },
    /// Toggle the launcher overlay.
    ToggleLauncher,
    /// Close the launcher overlay if open.
    CloseLauncher,
    /// Replace the launcher query.
    SetLauncherQuery {
        /// New query text.
        query: String,
    },
    /// Keyboard navigation inside the launcher.
    LauncherKey {
        /// Key pressed.
        key: LauncherKey,
    },
    /// Open an app chosen in the launcher, closing the overlay.
    LaunchFromLauncher {
        /// App picked by the user.
        app_id: ApplicationId,
    },
    /// Switch the shell colour theme.
    SetTheme {
        /// Theme to apply.
        theme: ThemeMode,
    },
    /// Switch the accent colour.
    SetAccentColor {
        /// Accent to apply.
        accent: AccentColor,
    },
    /// Resize dock icons (clamped to the slider range).
    SetDockIconSize {
        /// Icon edge length in pixels.
        size: i32,
    },
    /// Change the dock hover magnification (clamped to the slider range).
    SetDockMagnification {
        /// Scale factor of the hovered dock item.
        magnification: f64,
    },
    /// Toggle dock auto-hide.
    SetDockAutoHide {
        /// Whether the dock hides until hovered.
        auto_hide: bool,
    },
}

/// Applies a [`DesktopAction`] to the desktop state and interaction state.
///
/// Actions naming a window that no longer exists are ignored by the store.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) {
    match action {
        DesktopAction::OpenApp { app_id } => {
            open_app(state, &app_id);
        }
        DesktopAction::OpenWindow(request) => {
            state.store.open(&request);
            state.launcher.close();
        }
        DesktopAction::CloseWindow { window_id } => {
            interaction.release(window_id);
            state.store.close(window_id);
        }
        DesktopAction::MinimizeWindow { window_id } => {
            interaction.release(window_id);
            state.store.minimize(window_id);
        }
        DesktopAction::ToggleMaximize { window_id } => {
            state.store.toggle_maximize(window_id);
        }
        DesktopAction::FocusWindow { window_id } => {
            state.store.focus(window_id);
        }
        DesktopAction::BringToFront { window_id } => {
            state.store.bring_to_front(window_id);
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            interaction.begin_move(&mut state.store, window_id, pointer);
        }
        DesktopAction::BeginResize {
            window_id,
            edge,
            pointer,
        } => {
            interaction.begin_resize(&mut state.store, window_id, edge, pointer);
        }
        DesktopAction::PointerMove { pointer } => {
            interaction.pointer_move(&mut state.store, pointer);
        }
        DesktopAction::PointerUp => interaction.pointer_up(),
        DesktopAction::SetViewport { viewport } => {
            state.store.set_viewport(viewport);
        }
        DesktopAction::ToggleLauncher => state.launcher.toggle(),
        DesktopAction::CloseLauncher => state.launcher.close(),
        DesktopAction::SetLauncherQuery { query } => state.launcher.set_query(query),
        DesktopAction::LauncherKey { key } => {
            if !state.launcher.open {
                return;
            }
            match state.launcher.handle_key(key, apps::app_registry()) {
                LauncherOutcome::None => {}
                LauncherOutcome::Dismiss => state.launcher.close(),
                LauncherOutcome::Launch(app_id) => open_app(state, &app_id),
            }
        }
        DesktopAction::LaunchFromLauncher { app_id } => open_app(state, &app_id),
        DesktopAction::SetTheme { theme } => state.preferences.theme = theme,
        DesktopAction::SetAccentColor { accent } => state.preferences.accent = accent,
        DesktopAction::SetDockIconSize { size } => {
            state.preferences.set_dock_icon_size(size);
        }
        DesktopAction::SetDockMagnification { magnification } => {
            if !magnification.is_finite() {
                logging::warn!("desktop reducer: ignoring dock magnification {magnification}");
            }
            state.preferences.set_dock_magnification(magnification);
        }
        DesktopAction::SetDockAutoHide { auto_hide } => {
            state.preferences.dock_auto_hide = auto_hide;
        }
    }
}

fn open_app(state: &mut DesktopState, app_id: &ApplicationId) {
    let Some(descriptor) = apps::app_descriptor(app_id) else {
        logging::warn!("desktop reducer: no registered app `{app_id}`");
        return;
    };
    state.store.open(&descriptor.open_request());
    state.launcher.close();
}
