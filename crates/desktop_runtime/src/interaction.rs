//! Pointer gesture state machine translating drag/resize motion into window store calls.
//!
//! Each window is `Idle`, `Dragging`, or `Resizing(edge)`. Idle is represented by the absence of
//! an entry in [`InteractionState`]. Gestures capture the pointer origin and the window geometry
//! at pointer-down so every pointer-move recomputes from the same origin.

use std::collections::BTreeMap;

use crate::{
    config::ShellConfig,
    model::{PointerPosition, ResizeEdge, WindowId, WindowRect},
    window_manager::WindowStore,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSession {
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Dragging(DragSession),
    Resizing(ResizeSession),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    gestures: BTreeMap<WindowId, Gesture>,
}

impl InteractionState {
    pub fn gesture(&self, window_id: WindowId) -> Option<&Gesture> {
        self.gestures.get(&window_id)
    }

    pub fn is_idle(&self, window_id: WindowId) -> bool {
        !self.gestures.contains_key(&window_id)
    }

    pub fn has_active_gesture(&self) -> bool {
        !self.gestures.is_empty()
    }

    /// Pointer-down on a title bar (outside the window controls).
    ///
    /// Returns `false` when a gesture is already running for the window or the window is gone.
    /// Maximized windows keep their restore geometry, so drags on them are ignored.
    pub fn begin_move(
        &mut self,
        store: &mut WindowStore,
        window_id: WindowId,
        pointer: PointerPosition,
    ) -> bool {
        if !self.is_idle(window_id) {
            return false;
        }
        if store.window(window_id).map(|w| w.maximized).unwrap_or(false) {
            return false;
        }
        if !store.bring_to_front(window_id) {
            return false;
        }
        let Some(rect_start) = store.window(window_id).map(|w| w.rect) else {
            return false;
        };
        self.gestures.insert(
            window_id,
            Gesture::Dragging(DragSession {
                pointer_start: pointer,
                rect_start,
            }),
        );
        true
    }

    /// Pointer-down on one of the eight resize handles.
    ///
    /// Maximized windows expose no handles, so the request is ignored for them.
    pub fn begin_resize(
        &mut self,
        store: &mut WindowStore,
        window_id: WindowId,
        edge: ResizeEdge,
        pointer: PointerPosition,
    ) -> bool {
        if !self.is_idle(window_id) {
            return false;
        }
        if store.window(window_id).map(|w| w.maximized).unwrap_or(false) {
            return false;
        }
        if !store.bring_to_front(window_id) {
            return false;
        }
        let Some(rect_start) = store.window(window_id).map(|w| w.rect) else {
            return false;
        };
        self.gestures.insert(
            window_id,
            Gesture::Resizing(ResizeSession {
                edge,
                pointer_start: pointer,
                rect_start,
            }),
        );
        true
    }

    /// Applies a pointer-move to every window with a running gesture.
    pub fn pointer_move(&self, store: &mut WindowStore, pointer: PointerPosition) {
        for (&window_id, gesture) in &self.gestures {
            apply_gesture(store, window_id, *gesture, pointer);
        }
    }

    /// Pointer-up: every running gesture returns to idle without further store calls.
    pub fn pointer_up(&mut self) {
        self.gestures.clear();
    }

    /// Ends the gesture of a single window.
    pub fn release(&mut self, window_id: WindowId) -> bool {
        self.gestures.remove(&window_id).is_some()
    }
}

fn apply_gesture(
    store: &mut WindowStore,
    window_id: WindowId,
    gesture: Gesture,
    pointer: PointerPosition,
) {
    match gesture {
        Gesture::Dragging(session) => {
            let (x, y) = drag_position(session, pointer);
            store.move_window(window_id, x, y);
        }
        Gesture::Resizing(session) => {
            let next = resize_rect(session, pointer, store.config());
            store.resize_window(window_id, next.w, next.h);
            let moved = store
                .window(window_id)
                .map(|w| (w.rect.x, w.rect.y) != (next.x, next.y))
                .unwrap_or(false);
            if moved {
                store.move_window(window_id, next.x, next.y);
            }
        }
    }
}

/// Window position for a drag: captured origin plus pointer delta. The store clamps `y`.
pub fn drag_position(session: DragSession, pointer: PointerPosition) -> (i32, i32) {
    let dx = pointer.x - session.pointer_start.x;
    let dy = pointer.y - session.pointer_start.y;
    let moved = session.rect_start.offset(dx, dy);
    (moved.x, moved.y)
}

/// Applies resize deltas for a given edge/corner drag. Each axis of the edge is handled on its
/// own so corners combine the horizontal and vertical rules.
///
/// West and north shift the origin by the raw delta even once the size hits its floor.
pub fn resize_rect(
    session: ResizeSession,
    pointer: PointerPosition,
    config: &ShellConfig,
) -> WindowRect {
    let dx = pointer.x - session.pointer_start.x;
    let dy = pointer.y - session.pointer_start.y;
    let start = session.rect_start;
    let edge = session.edge;
    let mut next = start;

    if edge.has_east() {
        next.w = config.clamp_width(start.w + dx);
    }
    if edge.has_west() {
        next.w = config.clamp_width(start.w - dx);
        next.x = start.x + dx;
    }
    if edge.has_south() {
        next.h = config.clamp_height(start.h + dy);
    }
    if edge.has_north() {
        next.h = config.clamp_height(start.h - dy);
        next.y = config.clamp_top(start.y + dy);
    }

    next
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::ApplicationId;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{OpenWindowRequest, ViewportSize};

    fn store_with_window(rect: WindowRect) -> (WindowStore, WindowId) {
        let mut store = WindowStore::new(ShellConfig::default(), ViewportSize { w: 1600, h: 1000 });
        let id = store.open(&OpenWindowRequest::new(ApplicationId::trusted("finder"), "Finder"));
        store.move_window(id, rect.x, rect.y);
        store.resize_window(id, rect.w, rect.h);
        (store, id)
    }

    fn pointer(x: i32, y: i32) -> PointerPosition {
        PointerPosition { x, y }
    }

    fn rect(x: i32, y: i32, w: i32, h: i32) -> WindowRect {
        WindowRect { x, y, w, h }
    }

    #[test]
    fn drag_moves_window_by_pointer_delta() {
        let (mut store, id) = store_with_window(rect(100, 100, 600, 400));
        let mut interaction = InteractionState::default();

        assert!(interaction.begin_move(&mut store, id, pointer(500, 500)));
        interaction.pointer_move(&mut store, pointer(550, 480));

        let moved = store.window(id).expect("window").rect;
        assert_eq!((moved.x, moved.y), (150, 80));
    }

    #[test]
    fn drag_clamps_to_menu_bar_but_keeps_horizontal_delta() {
        let (mut store, id) = store_with_window(rect(100, 40, 600, 400));
        let mut interaction = InteractionState::default();

        interaction.begin_move(&mut store, id, pointer(0, 0));
        interaction.pointer_move(&mut store, pointer(50, -20));

        let moved = store.window(id).expect("window").rect;
        assert_eq!((moved.x, moved.y), (150, 30));
    }

    #[test]
    fn drag_recomputes_from_origin_on_every_move() {
        let (mut store, id) = store_with_window(rect(100, 100, 600, 400));
        let mut interaction = InteractionState::default();

        interaction.begin_move(&mut store, id, pointer(10, 10));
        interaction.pointer_move(&mut store, pointer(40, 40));
        interaction.pointer_move(&mut store, pointer(40, 40));
        interaction.pointer_move(&mut store, pointer(20, 30));

        let moved = store.window(id).expect("window").rect;
        assert_eq!((moved.x, moved.y), (110, 120));
    }

    #[test]
    fn begin_move_raises_window() {
        let (mut store, id) = store_with_window(rect(100, 100, 600, 400));
        let other = store.open(&OpenWindowRequest::new(ApplicationId::trusted("notes"), "Notes"));
        let mut interaction = InteractionState::default();

        interaction.begin_move(&mut store, id, pointer(0, 0));

        assert_eq!(store.active_window_id(), Some(id));
        assert!(
            store.window(id).expect("window").z_index > store.window(other).expect("other").z_index
        );
    }

    #[test]
    fn drag_on_maximized_window_keeps_restore_rect() {
        let (mut store, id) = store_with_window(rect(100, 100, 600, 400));
        let mut interaction = InteractionState::default();
        assert!(store.toggle_maximize(id));

        assert!(!interaction.begin_move(&mut store, id, pointer(400, 15)));
        interaction.pointer_move(&mut store, pointer(700, 305));
        interaction.pointer_up();
        assert!(store.toggle_maximize(id));

        assert_eq!(store.window(id).expect("window").rect, rect(100, 100, 600, 400));
        assert!(interaction.is_idle(id));
    }

    #[test]
    fn resize_north_west_grows_and_shifts_origin() {
        let (mut store, id) = store_with_window(rect(200, 200, 600, 400));
        let mut interaction = InteractionState::default();

        assert!(interaction.begin_resize(&mut store, id, ResizeEdge::NorthWest, pointer(200, 200)));
        interaction.pointer_move(&mut store, pointer(170, 190));

        assert_eq!(store.window(id).expect("window").rect, rect(170, 190, 630, 410));
    }

    #[test]
    fn resize_south_east_leaves_origin_alone() {
        let (mut store, id) = store_with_window(rect(200, 200, 600, 400));
        let mut interaction = InteractionState::default();

        interaction.begin_resize(&mut store, id, ResizeEdge::SouthEast, pointer(800, 600));
        interaction.pointer_move(&mut store, pointer(850, 640));

        assert_eq!(store.window(id).expect("window").rect, rect(200, 200, 650, 440));
    }

    #[test]
    fn resize_respects_floors_and_menu_bar() {
        let session = ResizeSession {
            edge: ResizeEdge::NorthEast,
            pointer_start: pointer(0, 0),
            rect_start: rect(200, 60, 500, 350),
        };

        let next = resize_rect(session, pointer(-300, -100), &ShellConfig::default());

        assert_eq!(next, rect(200, 30, 400, 450));
    }

    #[test]
    fn west_resize_shifts_origin_even_when_width_is_floored() {
        let session = ResizeSession {
            edge: ResizeEdge::West,
            pointer_start: pointer(0, 0),
            rect_start: rect(100, 100, 420, 300),
        };

        let next = resize_rect(session, pointer(50, 0), &ShellConfig::default());

        assert_eq!(next, rect(150, 100, 400, 300));
    }

    #[test]
    fn maximized_window_rejects_resize_gesture() {
        let (mut store, id) = store_with_window(rect(100, 100, 600, 400));
        store.toggle_maximize(id);
        let counter = store.stack_counter();
        let mut interaction = InteractionState::default();

        assert!(!interaction.begin_resize(&mut store, id, ResizeEdge::East, pointer(0, 0)));

        assert!(interaction.is_idle(id));
        assert_eq!(store.stack_counter(), counter);
    }

    #[test]
    fn second_gesture_on_same_window_is_ignored() {
        let (mut store, id) = store_with_window(rect(100, 100, 600, 400));
        let mut interaction = InteractionState::default();

        assert!(interaction.begin_move(&mut store, id, pointer(0, 0)));
        assert!(!interaction.begin_resize(&mut store, id, ResizeEdge::South, pointer(0, 0)));

        assert!(matches!(interaction.gesture(id), Some(Gesture::Dragging(_))));
    }

    #[test]
    fn pointer_up_returns_to_idle_and_stops_updates() {
        let (mut store, id) = store_with_window(rect(100, 100, 600, 400));
        let mut interaction = InteractionState::default();

        interaction.begin_move(&mut store, id, pointer(0, 0));
        interaction.pointer_up();
        interaction.pointer_move(&mut store, pointer(300, 300));

        assert!(interaction.is_idle(id));
        assert_eq!(store.window(id).expect("window").rect, rect(100, 100, 600, 400));
    }

    #[test]
    fn gesture_on_closed_window_degrades_to_noop() {
        let (mut store, id) = store_with_window(rect(100, 100, 600, 400));
        let mut interaction = InteractionState::default();

        interaction.begin_resize(&mut store, id, ResizeEdge::SouthWest, pointer(0, 0));
        store.close(id);
        interaction.pointer_move(&mut store, pointer(-40, 40));
        interaction.pointer_up();

        assert!(store.windows().is_empty());
        assert!(!interaction.has_active_gesture());
    }

    #[test]
    fn begin_move_on_missing_window_stays_idle() {
        let mut store = WindowStore::default();
        let mut interaction = InteractionState::default();

        assert!(!interaction.begin_move(&mut store, WindowId(7), pointer(0, 0)));
        assert!(!interaction.has_active_gesture());
    }
}
