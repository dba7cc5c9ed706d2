use scenekit_core::{Point, Point3};
use scenekit_scene::SceneDocument;

fn p(x: f64, y: f64, z: f64) -> Point3 {
    Point3::new(x, y, z)
}

fn positions(doc: &SceneDocument) -> Vec<Point3> {
    doc.nodes().iter().map(|n| n.point()).collect()
}

fn sorted(mut points: Vec<Point3>) -> Vec<Point3> {
    points.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    points
}

fn doc_with_row(count: usize) -> SceneDocument {
    let mut doc = SceneDocument::new();
    for x in 0..count {
        doc.new_node(p(x as f64, 0.0, 0.0));
    }
    doc
}

#[test]
fn test_translate_moves_selection_as_one_step() {
    let mut doc = doc_with_row(2);
    let entries = doc.history().count();
    doc.select_all();

    doc.transform_translate(p(0.0, 10.0, 0.0), false);
    assert_eq!(
        positions(&doc),
        vec![p(0.0, 10.0, 0.0), p(1.0, 10.0, 0.0)]
    );
    assert_eq!(doc.history().count(), entries + 1);
    assert_eq!(doc.history().undo_text(), Some("Translation"));

    doc.undo();
    assert_eq!(positions(&doc), vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)]);
}

#[test]
fn test_translate_along_row_shifts_onto_moving_nodes() {
    // Each node's target is held by its right neighbour, which also moves.
    let mut doc = doc_with_row(3);
    doc.select_all();

    doc.transform_translate(p(1.0, 0.0, 0.0), false);
    assert_eq!(
        sorted(positions(&doc)),
        vec![p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0), p(3.0, 0.0, 0.0)]
    );

    doc.undo();
    assert_eq!(
        positions(&doc),
        vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0)]
    );
}

#[test]
fn test_translate_onto_unselected_node_merges() {
    let mut doc = doc_with_row(2);
    let left = doc.nodes().handles()[0];
    doc.nodes_mut().set_selected(Some(left), true);

    doc.transform_translate(p(1.0, 0.0, 0.0), false);
    assert_eq!(positions(&doc), vec![p(1.0, 0.0, 0.0)]);

    doc.undo();
    assert_eq!(positions(&doc), vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)]);
}

#[test]
fn test_translate_copy_keeps_originals() {
    let mut doc = doc_with_row(2);
    doc.select_all();

    doc.transform_translate(p(0.0, 1.0, 0.0), true);
    assert_eq!(doc.nodes().len(), 4);
    assert!(doc.nodes().find_by_position(p(0.0, 0.0, 0.0)).is_some());
    assert!(doc.nodes().find_by_position(p(1.0, 1.0, 0.0)).is_some());

    doc.undo();
    assert_eq!(doc.nodes().len(), 2);
}

#[test]
fn test_rotate_quarter_turn_about_origin() {
    let mut doc = SceneDocument::new();
    doc.new_node(p(1.0, 0.0, 2.0));
    doc.select_all();

    doc.transform_rotate_xy(Point::new(0.0, 0.0), 90.0, false);
    let point = positions(&doc)[0];
    assert!(point.x.abs() < 1e-9);
    assert!((point.y - 1.0).abs() < 1e-9);
    assert_eq!(point.z, 2.0);
    assert_eq!(doc.history().undo_text(), Some("Rotation"));
}

#[test]
fn test_rotate_half_turn_swaps_pair() {
    // A pure permutation of the selection leaves the node set unchanged.
    let mut doc = SceneDocument::new();
    doc.new_node(p(-1.0, 0.0, 0.0));
    doc.new_node(p(1.0, 0.0, 0.0));
    doc.select_all();

    doc.transform_rotate_xy(Point::new(0.0, 0.0), 180.0, false);
    assert_eq!(
        sorted(positions(&doc)),
        vec![p(-1.0, 0.0, 0.0), p(1.0, 0.0, 0.0)]
    );
}

#[test]
fn test_scale_about_center() {
    let mut doc = SceneDocument::new();
    doc.new_node(p(1.0, 1.0, 1.0));
    doc.new_node(p(3.0, 3.0, 3.0));
    doc.select_all();

    doc.transform_scale(p(1.0, 1.0, 1.0), 2.0, false);
    assert_eq!(
        sorted(positions(&doc)),
        vec![p(1.0, 1.0, 1.0), p(5.0, 5.0, 5.0)]
    );
    assert_eq!(doc.history().undo_text(), Some("Scale"));
}

#[test]
fn test_scale_to_zero_collapses_nodes() {
    let mut doc = doc_with_row(3);
    doc.select_all();

    doc.transform_scale(p(0.0, 0.0, 0.0), 0.0, false);
    assert_eq!(positions(&doc), vec![p(0.0, 0.0, 0.0)]);

    doc.undo();
    assert_eq!(doc.nodes().len(), 3);
}

#[test]
fn test_transform_without_selection_records_nothing() {
    let mut doc = doc_with_row(2);
    let entries = doc.history().count();

    doc.transform_translate(p(1.0, 0.0, 0.0), false);
    doc.transform_scale(p(0.0, 0.0, 0.0), 1.0, false);
    assert_eq!(doc.history().count(), entries);
}
