use scenekit_core::{BoundingBox, Point, Point3, SceneEvent};
use scenekit_scene::NodeStore;
use std::cell::RefCell;
use std::rc::Rc;

fn p(x: f64, y: f64, z: f64) -> Point3 {
    Point3::new(x, y, z)
}

#[test]
fn test_add_deduplicates_by_position() {
    let mut store = NodeStore::new();
    let a = store.add(p(1.0, 2.0, 0.0)).unwrap();
    let b = store.add(p(1.0, 2.0, 0.0)).unwrap();
    let c = store.add(p(1.0 + 1e-14, 2.0, 0.0)).unwrap();

    assert_eq!(a, b);
    assert_eq!(a, c);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_positions_just_outside_epsilon_are_distinct() {
    let mut store = NodeStore::new();
    let a = store.add(p(0.0, 0.0, 0.0)).unwrap();
    let b = store.add(p(1e-9, 0.0, 0.0)).unwrap();

    assert_ne!(a, b);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_handles_are_never_reused() {
    let mut store = NodeStore::new();
    let first = store.add(p(0.0, 0.0, 0.0)).unwrap();
    assert!(store.remove(first).is_some());

    let second = store.add(p(0.0, 0.0, 0.0)).unwrap();
    assert_ne!(first, second);
    assert!(store.get(first).is_none());
}

#[test]
fn test_remove_returns_index_and_keeps_order() {
    let mut store = NodeStore::new();
    let a = store.add(p(0.0, 0.0, 0.0)).unwrap();
    let b = store.add(p(1.0, 0.0, 0.0)).unwrap();
    let c = store.add(p(2.0, 0.0, 0.0)).unwrap();

    assert_eq!(store.remove(b), Some(1));
    assert_eq!(store.handles(), vec![a, c]);
    assert_eq!(store.remove(b), None);
}

#[test]
fn test_insert_at_clamps_index() {
    let mut store = NodeStore::new();
    store.add(p(0.0, 0.0, 0.0));
    let front = store.insert_at(0, p(5.0, 0.0, 0.0)).unwrap();
    let back = store.insert_at(99, p(6.0, 0.0, 0.0)).unwrap();

    assert_eq!(store.index_of(front), Some(0));
    assert_eq!(store.index_of(back), Some(2));
}

#[test]
fn test_set_position_refuses_occupied_target() {
    let mut store = NodeStore::new();
    let a = store.add(p(0.0, 0.0, 0.0)).unwrap();
    let b = store.add(p(1.0, 0.0, 0.0)).unwrap();

    assert!(!store.set_position(a, p(1.0, 0.0, 0.0)));
    assert_eq!(store.position_of(a), Some(p(0.0, 0.0, 0.0)));

    assert!(store.set_position(b, p(1.0, 0.0, 0.0)));
    assert!(store.set_position(b, p(3.0, 0.0, 0.0)));
    assert_eq!(store.find_by_position(p(3.0, 0.0, 0.0)), Some(b));
}

#[test]
fn test_empty_bounding_box_is_unit_cube() {
    let store = NodeStore::new();
    let bbox = store.bounding_box();

    assert_eq!(bbox, BoundingBox::default());
    assert_eq!(bbox.min, p(-0.5, -0.5, -0.5));
    assert_eq!(bbox.max, p(0.5, 0.5, 0.5));
}

#[test]
fn test_bounding_box_covers_all_nodes() {
    let mut store = NodeStore::new();
    store.add(p(-1.0, 2.0, 0.0));
    store.add(p(3.0, -4.0, 1.0));

    let bbox = store.bounding_box();
    assert_eq!(bbox.min, p(-1.0, -4.0, 0.0));
    assert_eq!(bbox.max, p(3.0, 2.0, 1.0));
}

#[test]
fn test_find_closest_uses_xy_distance() {
    let mut store = NodeStore::new();
    assert!(store.find_closest(Point::new(0.0, 0.0)).is_none());

    let near = store.add(p(1.0, 1.0, 100.0)).unwrap();
    store.add(p(5.0, 5.0, 0.0));

    assert_eq!(store.find_closest(Point::new(0.0, 0.0)), Some(near));
}

#[test]
fn test_selection_and_highlight_are_independent() {
    let mut store = NodeStore::new();
    let a = store.add(p(0.0, 0.0, 0.0)).unwrap();
    let b = store.add(p(1.0, 0.0, 0.0)).unwrap();

    store.set_selected(Some(a), true);
    store.set_highlighted(None, true);

    assert_eq!(store.selected(), vec![a]);
    assert_eq!(store.highlighted(), vec![a, b]);

    store.set_selected(None, false);
    assert_eq!(store.selected_count(), 0);
    assert_eq!(store.highlighted_count(), 2);
}

#[test]
fn test_notifications_only_on_change() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();

    let mut store = NodeStore::new();
    store.subscribe(move |e| sink.borrow_mut().push(e.clone()));

    let a = store.add(p(0.0, 0.0, 0.0)).unwrap();
    store.add(p(0.0, 0.0, 0.0));
    store.set_selected(Some(a), true);
    store.remove(a);
    store.remove(a);

    assert_eq!(
        *events.borrow(),
        vec![SceneEvent::Invalidated, SceneEvent::Invalidated]
    );
}

#[test]
fn test_clear_emits_cleared_then_invalidated() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();

    let mut store = NodeStore::new();
    store.add(p(0.0, 0.0, 0.0));
    store.subscribe(move |e| sink.borrow_mut().push(e.clone()));
    store.clear();

    assert!(store.is_empty());
    assert_eq!(
        *events.borrow(),
        vec![SceneEvent::Cleared, SceneEvent::Invalidated]
    );
}

#[test]
fn test_blocked_signals_suppress_events() {
    let count = Rc::new(RefCell::new(0));
    let sink = count.clone();

    let mut store = NodeStore::new();
    let id = store.subscribe(move |_| *sink.borrow_mut() += 1);

    let previous = store.block_signals(true);
    assert!(!previous);
    store.add(p(0.0, 0.0, 0.0));
    store.block_signals(previous);
    assert_eq!(*count.borrow(), 0);

    store.add(p(1.0, 0.0, 0.0));
    assert_eq!(*count.borrow(), 1);

    assert!(store.unsubscribe(id));
    store.add(p(2.0, 0.0, 0.0));
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn test_add_rejects_non_finite_positions() {
    let count = Rc::new(RefCell::new(0));
    let sink = count.clone();

    let mut store = NodeStore::new();
    store.subscribe(move |_| *sink.borrow_mut() += 1);

    // Infinity minus infinity is NaN, so two infinite nodes would never dedupe.
    assert!(store.add(p(f64::INFINITY, 0.0, 0.0)).is_none());
    assert!(store.add(p(f64::INFINITY, 0.0, 0.0)).is_none());
    assert!(store.add(p(0.0, f64::NAN, 0.0)).is_none());
    assert!(store.insert_at(0, p(0.0, 0.0, f64::NEG_INFINITY)).is_none());

    assert!(store.is_empty());
    assert_eq!(*count.borrow(), 0);
}

#[test]
fn test_set_position_refuses_non_finite_target() {
    let mut store = NodeStore::new();
    let a = store.add(p(1.0, 1.0, 0.0)).unwrap();

    assert!(!store.set_position(a, p(f64::NAN, 1.0, 0.0)));
    assert_eq!(store.position_of(a), Some(p(1.0, 1.0, 0.0)));
}
