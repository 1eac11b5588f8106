//! Paint-order projection of the window store.
//!
//! The compositor is a pure read of [`WindowStore`]: it decides which windows are visible, in what
//! order, and at what geometry. Rendering the resulting [`Surface`] list is left to
//! [`crate::components`].

use desktop_app_contract::{AppModule, ApplicationId};

use crate::{
    apps::{find_descriptor, AppDescriptor},
    model::{WindowId, WindowRecord, WindowRect},
    window_manager::WindowStore,
};

/// One visible window frame ready to render.
#[derive(Debug, Clone)]
pub struct Surface {
    pub window_id: WindowId,
    pub app_id: ApplicationId,
    pub title: String,
    /// Effective geometry: the derived maximized rect or the stored rect.
    pub rect: WindowRect,
    pub z_index: u64,
    pub active: bool,
    pub maximized: bool,
    pub module: AppModule,
}

/// Visible surfaces in ascending `z_index` order (bottom first).
///
/// Minimized windows are skipped, as are windows whose app has no registered handler.
pub fn compose(store: &WindowStore, registry: &[AppDescriptor]) -> Vec<Surface> {
    let mut surfaces: Vec<Surface> = store
        .windows()
        .iter()
        .filter(|window| !window.minimized)
        .filter_map(|window| surface_from_record(store, registry, window))
        .collect();
    surfaces.sort_by_key(|surface| surface.z_index);
    surfaces
}

fn surface_from_record(
    store: &WindowStore,
    registry: &[AppDescriptor],
    window: &WindowRecord,
) -> Option<Surface> {
    let module = find_descriptor(registry, &window.app_id)?.module?;
    Some(Surface {
        window_id: window.id,
        app_id: window.app_id.clone(),
        title: window.title.clone(),
        rect: store.effective_rect(window),
        z_index: window.z_index,
        active: store.active_window_id() == Some(window.id),
        maximized: window.maximized,
        module,
    })
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::AppMountContext;
    use leptos::{IntoView, View};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::ShellConfig;
    use crate::model::{OpenWindowRequest, ViewportSize};

    fn blank(_: AppMountContext) -> View {
        ().into_view()
    }

    fn registry() -> Vec<AppDescriptor> {
        ["finder", "notes", "music"]
            .into_iter()
            .map(|id| AppDescriptor {
                module: Some(AppModule::new(blank)),
                ..AppDescriptor::detached(id, id)
            })
            .collect()
    }

    fn open(store: &mut WindowStore, id: &str) -> WindowId {
        store.open(&OpenWindowRequest::new(ApplicationId::trusted(id), id))
    }

    fn order(surfaces: &[Surface]) -> Vec<WindowId> {
        surfaces.iter().map(|surface| surface.window_id).collect()
    }

    #[test]
    fn surfaces_paint_bottom_to_top() {
        let apps = registry();
        let mut store = WindowStore::new(ShellConfig::default(), ViewportSize { w: 1440, h: 900 });
        let finder = open(&mut store, "finder");
        let notes = open(&mut store, "notes");
        let music = open(&mut store, "music");
        store.bring_to_front(finder);

        let surfaces = compose(&store, &apps);

        assert_eq!(order(&surfaces), vec![notes, music, finder]);
        assert!(surfaces[2].active);
        assert!(!surfaces[0].active);
    }

    #[test]
    fn minimized_windows_are_not_composed() {
        let apps = registry();
        let mut store = WindowStore::default();
        let finder = open(&mut store, "finder");
        let notes = open(&mut store, "notes");
        store.minimize(finder);

        assert_eq!(order(&compose(&store, &apps)), vec![notes]);
        assert!(compose(&store, &apps).iter().all(|s| s.window_id != finder));
    }

    #[test]
    fn maximized_surface_uses_derived_geometry() {
        let apps = registry();
        let mut store = WindowStore::new(ShellConfig::default(), ViewportSize { w: 1440, h: 900 });
        let notes = open(&mut store, "notes");
        store.toggle_maximize(notes);

        let surface = compose(&store, &apps).pop().expect("surface");

        assert!(surface.maximized);
        assert_eq!(
            surface.rect,
            WindowRect {
                x: 0,
                y: 30,
                w: 1440,
                h: 790,
            }
        );
        assert_eq!(store.window(notes).map(|w| w.rect.w), Some(800));
    }

    #[test]
    fn windows_without_handler_are_skipped() {
        let apps = registry();
        let mut store = WindowStore::default();
        open(&mut store, "terminal");
        let finder = open(&mut store, "finder");

        assert_eq!(order(&compose(&store, &apps)), vec![finder]);
    }
}
