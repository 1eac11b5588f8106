//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container. UI composition stays in
//! [`crate::components`].
#![allow(clippy::clone_on_copy)]

use leptos::*;

use crate::{
    apps, host,
    interaction::InteractionState,
    launcher::LauncherState,
    model::DesktopState,
    preferences::DesktopPreferences,
    reducer::{reduce_desktop, DesktopAction},
    window_manager::WindowStore,
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer drag/resize gesture state.
    pub interaction: RwSignal<InteractionState>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

fn initial_state() -> DesktopState {
    let config = apps::shell_config();
    let viewport = host::desktop_viewport();
    logging::log!(
        "desktop runtime boot: {} apps, viewport {}x{}",
        apps::app_registry().len(),
        viewport.w,
        viewport.h
    );
    DesktopState {
        store: WindowStore::new(config, viewport),
        launcher: LauncherState::default(),
        preferences: DesktopPreferences::from_shell(&config),
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(children: Children) -> impl IntoView {
    let state = create_rw_signal(initial_state());
    let interaction = create_rw_signal(InteractionState::default());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        reduce_desktop(&mut desktop, &mut ui, action);

        if desktop != previous_desktop {
            state.set(desktop);
        }
        if ui != previous_ui {
            interaction.set(ui);
        }
    });

    let runtime = DesktopRuntimeContext {
        state,
        interaction,
        dispatch,
    };

    provide_context(runtime.clone());

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
