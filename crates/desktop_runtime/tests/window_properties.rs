//! Property-based tests for window store invariants
//!
//! These tests drive the store through arbitrary operation sequences, including operations on
//! ids that were never opened or are already closed.

use desktop_app_contract::ApplicationId;
use desktop_runtime::{
    InteractionState, OpenWindowRequest, PointerPosition, ResizeEdge, ShellConfig, ViewportSize,
    WindowId, WindowStore,
};
use proptest::prelude::*;

const APPS: [&str; 4] = ["finder", "notes", "terminal", "music"];

#[derive(Debug, Clone)]
enum Op {
    Open(usize),
    Close(u64),
    Minimize(u64),
    ToggleMaximize(u64),
    Focus(u64),
    BringToFront(u64),
    Move(u64, i32, i32),
    Resize(u64, i32, i32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let id = 1u64..8;
    prop_oneof![
        (0..APPS.len()).prop_map(Op::Open),
        id.clone().prop_map(Op::Close),
        id.clone().prop_map(Op::Minimize),
        id.clone().prop_map(Op::ToggleMaximize),
        id.clone().prop_map(Op::Focus),
        id.clone().prop_map(Op::BringToFront),
        (id.clone(), -500i32..2000, -500i32..2000).prop_map(|(id, x, y)| Op::Move(id, x, y)),
        (id, -200i32..2000, -200i32..2000).prop_map(|(id, w, h)| Op::Resize(id, w, h)),
    ]
}

fn edge_strategy() -> impl Strategy<Value = ResizeEdge> {
    prop::sample::select(ResizeEdge::ALL.to_vec())
}

fn request(index: usize) -> OpenWindowRequest {
    let id = APPS[index];
    OpenWindowRequest::new(ApplicationId::trusted(id), id)
}

fn apply(store: &mut WindowStore, op: &Op) {
    match *op {
        Op::Open(index) => {
            store.open(&request(index));
        }
        Op::Close(id) => {
            store.close(WindowId(id));
        }
        Op::Minimize(id) => {
            store.minimize(WindowId(id));
        }
        Op::ToggleMaximize(id) => {
            store.toggle_maximize(WindowId(id));
        }
        Op::Focus(id) => {
            store.focus(WindowId(id));
        }
        Op::BringToFront(id) => {
            store.bring_to_front(WindowId(id));
        }
        Op::Move(id, x, y) => {
            store.move_window(WindowId(id), x, y);
        }
        Op::Resize(id, w, h) => {
            store.resize_window(WindowId(id), w, h);
        }
    }
}

fn new_store() -> WindowStore {
    WindowStore::new(ShellConfig::default(), ViewportSize { w: 1440, h: 900 })
}

proptest! {
    /// No two open windows ever share a stacking index
    #[test]
    fn stacking_indices_stay_unique(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut store = new_store();
        for op in &ops {
            apply(&mut store, op);
            let mut z: Vec<u64> = store.windows().iter().map(|w| w.z_index).collect();
            let before = z.len();
            z.sort_unstable();
            z.dedup();
            prop_assert_eq!(z.len(), before, "duplicate z-index after {:?}", op);
        }
    }

    /// A raised window sits strictly above every other window and is active
    #[test]
    fn bring_to_front_is_topmost(
        ops in prop::collection::vec(op_strategy(), 0..40),
        target in 1u64..8,
    ) {
        let mut store = new_store();
        for op in &ops {
            apply(&mut store, op);
        }
        let counter_before = store.stack_counter();
        let window_id = WindowId(target);

        if store.bring_to_front(window_id) {
            let front = store.window(window_id).map(|w| w.z_index).unwrap_or_default();
            prop_assert!(front > counter_before);
            prop_assert!(store
                .windows()
                .iter()
                .filter(|w| w.id != window_id)
                .all(|w| w.z_index < front));
            prop_assert_eq!(store.active_window_id(), Some(window_id));
        } else {
            prop_assert_eq!(store.stack_counter(), counter_before);
        }
    }

    /// At most one window exists per application
    #[test]
    fn one_window_per_app(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut store = new_store();
        for op in &ops {
            apply(&mut store, op);
        }
        for app in APPS {
            let count = store
                .windows()
                .iter()
                .filter(|w| w.app_id.as_str() == app)
                .count();
            prop_assert!(count <= 1, "{} has {} windows", app, count);
        }
        prop_assert_eq!(store.running_apps().len(), store.windows().len());
    }

    /// Stored and effective geometry respect the size floors and the menu bar
    #[test]
    fn geometry_floors_hold(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut store = new_store();
        let config = *store.config();
        for op in &ops {
            apply(&mut store, op);
        }
        for window in store.windows() {
            for rect in [window.rect, store.effective_rect(window)] {
                prop_assert!(rect.w >= config.min_window_width);
                prop_assert!(rect.h >= config.min_window_height);
                prop_assert!(rect.y >= config.menu_bar_height);
            }
        }
    }

    /// Maximize followed by restore leaves stored geometry untouched
    #[test]
    fn maximize_round_trip_restores_geometry(
        ops in prop::collection::vec(op_strategy(), 0..40),
        app in 0..APPS.len(),
    ) {
        let mut store = new_store();
        for op in &ops {
            apply(&mut store, op);
        }
        let window_id = store.open(&request(app));
        let before = store.window(window_id).cloned();

        prop_assert!(store.toggle_maximize(window_id));
        prop_assert!(store.toggle_maximize(window_id));

        let after = store.window(window_id).cloned();
        prop_assert_eq!(after.as_ref().map(|w| w.rect), before.as_ref().map(|w| w.rect));
        prop_assert_eq!(after.map(|w| w.maximized), before.map(|w| w.maximized));
    }

    /// Every mutation on an unknown id reports a no-op and leaves the store unchanged
    #[test]
    fn missing_ids_are_noops(
        ops in prop::collection::vec(op_strategy(), 0..40),
        x in -100i32..100,
        y in -100i32..100,
    ) {
        let mut store = new_store();
        for op in &ops {
            apply(&mut store, op);
        }
        let missing = WindowId(10_000);
        let snapshot = store.clone();

        prop_assert!(!store.close(missing));
        prop_assert!(!store.minimize(missing));
        prop_assert!(!store.toggle_maximize(missing));
        prop_assert!(!store.focus(missing));
        prop_assert!(!store.bring_to_front(missing));
        prop_assert!(!store.move_window(missing, x, y));
        prop_assert!(!store.resize_window(missing, x, y));
        prop_assert_eq!(store, snapshot);
    }

    /// Resize gestures never push a window below its floors, whatever the pointer does
    #[test]
    fn resize_gestures_respect_floors(
        edge in edge_strategy(),
        moves in prop::collection::vec((-1500i32..1500, -1500i32..1500), 1..20),
    ) {
        let mut store = new_store();
        let mut interaction = InteractionState::default();
        let window_id = store.open(&request(0));
        let origin = PointerPosition { x: 700, y: 400 };

        prop_assert!(interaction.begin_resize(&mut store, window_id, edge, origin));
        for (dx, dy) in moves {
            interaction.pointer_move(
                &mut store,
                PointerPosition { x: origin.x + dx, y: origin.y + dy },
            );
            let rect = store.window(window_id).map(|w| w.rect);
            prop_assert!(rect.is_some_and(|r| r.w >= 400 && r.h >= 300 && r.y >= 30));
        }
        interaction.pointer_up();
        prop_assert!(interaction.is_idle(window_id));
    }
}
