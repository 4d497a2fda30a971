use armpath_core::{
    AuthoringConfig, DragState, InputEvent, Outcome, Session, Waypoint, WaypointPatch, WaypointStore,
};
use glam::Vec2;

// ── Helpers ──────────────────────────────────────────────────────

/// 800x600 surface: drag radius 60, select radius 30.
fn session() -> Session {
    Session::create(800.0, 600.0, AuthoringConfig::default())
}

fn place(session: &mut Session, x: f32, z: f32) -> Outcome {
    session.handle(InputEvent::Place { at: Vec2::new(x, z) })
}

fn position(session: &Session, index: usize) -> Vec2 {
    session.store().get(index).map(|p| p.planar()).unwrap()
}

// ── 1. Waypoint store ────────────────────────────────────────────

#[test]
fn remove_last_on_empty_store_is_a_no_op() {
    let mut store = WaypointStore::new();
    assert_eq!(store.remove_last(), None);
    assert_eq!(store.remove_last(), None);
    assert!(store.is_empty());
}

#[test]
fn update_at_invalid_index_reports_false() {
    let mut store = WaypointStore::new();
    store.append(Waypoint::new(1.0, 1.0, 1.0));
    assert!(!store.update_at(5, WaypointPatch::depth(2.0)));
    assert_eq!(store.get(0), Some(&Waypoint::new(1.0, 1.0, 1.0)));
}

#[test]
fn update_at_patches_only_given_fields() {
    let mut store = WaypointStore::new();
    store.append(Waypoint::new(1.0, 1.0, 1.0));
    assert!(store.update_at(0, WaypointPatch::planar(Vec2::new(7.0, 9.0))));
    assert_eq!(store.get(0), Some(&Waypoint::new(7.0, 1.0, 9.0)));
}

#[test]
fn hit_test_prefers_store_order_for_identical_points() {
    let mut store = WaypointStore::new();
    store.append(Waypoint::new(0.0, 1.0, 0.0));
    store.append(Waypoint::new(0.0, 1.0, 0.0));
    assert_eq!(store.nearest(Vec2::ZERO, 5.0), Some(0));
}

#[test]
fn hit_test_prefers_store_order_over_distance() {
    let mut store = WaypointStore::new();
    store.append(Waypoint::new(0.0, 1.0, 0.0));
    store.append(Waypoint::new(5.0, 1.0, 0.0));
    assert_eq!(store.nearest(Vec2::new(5.0, 0.0), 10.0), Some(0));
}

#[test]
fn hit_test_radius_is_exclusive() {
    let mut store = WaypointStore::new();
    store.append(Waypoint::new(0.0, 1.0, 0.0));
    assert_eq!(store.nearest(Vec2::new(10.0, 0.0), 10.0), None);
    assert_eq!(store.nearest(Vec2::new(9.9, 0.0), 10.0), Some(0));
}

// ── 2. Placing ───────────────────────────────────────────────────

#[test]
fn place_uses_current_slider_value() {
    let mut s = session();
    assert_eq!(s.handle(InputEvent::DepthInput { value: 2.25 }), Outcome::SliderMoved);
    assert_eq!(place(&mut s, 100.0, 200.0), Outcome::Placed(0));
    assert_eq!(s.store().get(0), Some(&Waypoint::new(100.0, 2.25, 200.0)));
}

#[test]
fn place_is_suppressed_while_dragging() {
    let mut s = session();
    place(&mut s, 100.0, 100.0);
    assert_eq!(s.handle(InputEvent::Press { at: Vec2::new(105.0, 100.0) }), Outcome::DragStarted(0));
    assert_eq!(place(&mut s, 400.0, 400.0), Outcome::Unchanged);
    assert_eq!(s.store().len(), 1);

    s.handle(InputEvent::Release);
    assert_eq!(place(&mut s, 400.0, 400.0), Outcome::Placed(1));
}

// ── 3. Dragging ──────────────────────────────────────────────────

#[test]
fn press_near_waypoint_starts_drag_and_syncs_slider() {
    let mut s = session();
    s.handle(InputEvent::DepthInput { value: 2.0 });
    place(&mut s, 300.0, 300.0);
    s.handle(InputEvent::DepthInput { value: 0.75 });

    assert_eq!(s.handle(InputEvent::Press { at: Vec2::new(320.0, 310.0) }), Outcome::DragStarted(0));
    assert_eq!(s.controller().dragging(), Some(0));
    assert_eq!(s.controller().editing(), Some(0));
    assert_eq!(s.slider_value(), 2.0);
}

#[test]
fn press_on_empty_space_does_nothing() {
    let mut s = session();
    place(&mut s, 300.0, 300.0);
    assert_eq!(s.handle(InputEvent::Press { at: Vec2::new(700.0, 50.0) }), Outcome::Unchanged);
    assert_eq!(s.controller().drag_state(), DragState::Idle);
}

#[test]
fn drag_moves_within_slip_limit_only() {
    let mut s = session();
    place(&mut s, 400.0, 300.0);
    s.handle(InputEvent::Press { at: Vec2::new(400.0, 300.0) });

    assert_eq!(s.handle(InputEvent::Move { to: Vec2::new(450.0, 300.0) }), Outcome::Moved(0));
    assert_eq!(position(&s, 0), Vec2::new(450.0, 300.0));

    // 70px from where the drag began, beyond the 60px radius.
    assert_eq!(s.handle(InputEvent::Move { to: Vec2::new(470.0, 300.0) }), Outcome::Unchanged);
    assert_eq!(position(&s, 0), Vec2::new(450.0, 300.0));

    // Back inside the radius of the start position.
    assert_eq!(s.handle(InputEvent::Move { to: Vec2::new(380.0, 300.0) }), Outcome::Moved(0));
    assert_eq!(position(&s, 0), Vec2::new(380.0, 300.0));
}

#[test]
fn move_without_press_is_ignored() {
    let mut s = session();
    place(&mut s, 400.0, 300.0);
    assert_eq!(s.handle(InputEvent::Move { to: Vec2::new(410.0, 300.0) }), Outcome::Unchanged);
    assert_eq!(position(&s, 0), Vec2::new(400.0, 300.0));
}

#[test]
fn release_keeps_editing_target() {
    let mut s = session();
    place(&mut s, 400.0, 300.0);
    s.handle(InputEvent::Press { at: Vec2::new(400.0, 300.0) });
    assert_eq!(s.handle(InputEvent::Release), Outcome::Released);
    assert_eq!(s.controller().dragging(), None);
    assert_eq!(s.controller().editing(), Some(0));
}

// ── 4. Selecting and depth edits ─────────────────────────────────

#[test]
fn select_uses_the_smaller_radius() {
    let mut s = session();
    place(&mut s, 400.0, 300.0);

    assert_eq!(s.handle(InputEvent::Select { at: Vec2::new(440.0, 300.0) }), Outcome::Unchanged);
    assert_eq!(s.handle(InputEvent::Select { at: Vec2::new(420.0, 300.0) }), Outcome::Selected(0));
    assert_eq!(s.controller().editing(), Some(0));
}

#[test]
fn depth_input_edits_the_selected_waypoint() {
    let mut s = session();
    place(&mut s, 100.0, 100.0);
    place(&mut s, 400.0, 300.0);
    s.handle(InputEvent::Select { at: Vec2::new(100.0, 100.0) });

    assert_eq!(s.handle(InputEvent::DepthInput { value: 2.5 }), Outcome::DepthChanged(0));
    assert_eq!(s.store().get(0).map(|p| p.depth), Some(2.5));
    assert_eq!(s.store().get(1).map(|p| p.depth), Some(1.0));
}

#[test]
fn depth_input_clamps_to_range() {
    let mut s = session();
    place(&mut s, 100.0, 100.0);
    s.handle(InputEvent::Select { at: Vec2::new(100.0, 100.0) });

    s.handle(InputEvent::DepthInput { value: 10.0 });
    assert_eq!(s.store().get(0).map(|p| p.depth), Some(3.0));

    s.handle(InputEvent::DepthInput { value: f32::NAN });
    assert_eq!(s.store().get(0).map(|p| p.depth), Some(0.5));
}

// ── 5. Removal ───────────────────────────────────────────────────

#[test]
fn remove_last_clears_selection_of_removed_waypoint() {
    let mut s = session();
    place(&mut s, 100.0, 100.0);
    place(&mut s, 400.0, 300.0);
    s.handle(InputEvent::Select { at: Vec2::new(400.0, 300.0) });
    assert_eq!(s.controller().editing(), Some(1));

    let outcome = s.handle(InputEvent::RemoveLast);
    assert_eq!(outcome, Outcome::Removed(Some(Waypoint::new(400.0, 1.0, 300.0))));
    assert_eq!(s.controller().editing(), None);

    // The slider no longer targets anything.
    assert_eq!(s.handle(InputEvent::DepthInput { value: 2.0 }), Outcome::SliderMoved);
    assert_eq!(s.store().get(0).map(|p| p.depth), Some(1.0));
}

#[test]
fn remove_last_keeps_selection_of_surviving_waypoint() {
    let mut s = session();
    place(&mut s, 100.0, 100.0);
    place(&mut s, 400.0, 300.0);
    s.handle(InputEvent::Select { at: Vec2::new(100.0, 100.0) });

    s.handle(InputEvent::RemoveLast);
    assert_eq!(s.controller().editing(), Some(0));
}

#[test]
fn remove_last_during_drag_ends_the_drag() {
    let mut s = session();
    place(&mut s, 400.0, 300.0);
    s.handle(InputEvent::Press { at: Vec2::new(400.0, 300.0) });

    s.handle(InputEvent::RemoveLast);
    assert_eq!(s.controller().drag_state(), DragState::Idle);
    assert_eq!(s.handle(InputEvent::Move { to: Vec2::new(410.0, 300.0) }), Outcome::Unchanged);
}

#[test]
fn remove_last_twice_on_empty_session() {
    let mut s = session();
    assert_eq!(s.handle(InputEvent::RemoveLast), Outcome::Removed(None));
    assert_eq!(s.handle(InputEvent::RemoveLast), Outcome::Removed(None));
    assert!(s.store().is_empty());
}

// ── 6. Resize ────────────────────────────────────────────────────

#[test]
fn resize_leaves_selection_alone() {
    let mut s = session();
    place(&mut s, 400.0, 300.0);
    s.handle(InputEvent::Press { at: Vec2::new(400.0, 300.0) });

    assert_eq!(s.handle(InputEvent::Resize { width: 1024.0, height: 768.0 }), Outcome::Resized);
    assert_eq!(s.controller().dragging(), Some(0));
    assert_eq!(s.controller().editing(), Some(0));
}
