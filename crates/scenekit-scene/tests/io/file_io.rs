use scenekit_core::{Error, ErrorResult, ErrorSeverity, Point3, SceneEvent};
use scenekit_scene::serialization::FILE_FORMAT_VERSION;
use scenekit_scene::{DocumentFile, SceneDocument};
use std::cell::RefCell;
use std::rc::Rc;
use tempfile::TempDir;

fn p(x: f64, y: f64, z: f64) -> Point3 {
    Point3::new(x, y, z)
}

fn sample_document() -> SceneDocument {
    let mut doc = SceneDocument::new();
    doc.new_node(p(0.0, 0.0, 0.0));
    doc.new_node(p(1.5, -2.0, 0.25));
    doc.problem.name = "Electrostatic".to_string();
    doc.problem.description = "Two electrodes".to_string();
    doc.problem.startup_script = "r = 0.1\nU = 10".to_string();
    doc
}

#[test]
fn test_save_and_open_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("problem.json");

    let mut doc = sample_document();
    doc.save(&path).unwrap();
    assert!(!doc.is_modified());
    assert_eq!(doc.problem.file_name.as_deref(), Some(path.as_path()));
    assert_eq!(doc.display_name(), "problem.json");

    let mut loaded = SceneDocument::new();
    loaded.open(&path).unwrap();

    let points: Vec<Point3> = loaded.nodes().iter().map(|n| n.point()).collect();
    assert_eq!(points, vec![p(0.0, 0.0, 0.0), p(1.5, -2.0, 0.25)]);
    assert_eq!(loaded.problem.name, "Electrostatic");
    assert_eq!(loaded.problem.description, "Two electrodes");
    assert_eq!(loaded.problem.startup_script, "r = 0.1\nU = 10");
    assert!(!loaded.is_modified());
    assert!(!loaded.can_undo());
    assert!(!loaded.nodes().signals_blocked());
}

#[test]
fn test_saved_file_carries_version_and_timestamp() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stamped.json");

    let mut doc = sample_document();
    doc.save(&path).unwrap();

    let file = DocumentFile::load_from_file(&path).unwrap();
    assert_eq!(file.version, FILE_FORMAT_VERSION);
    assert!(file.saved.is_some());
    assert_eq!(file.geometry.nodes.len(), 2);
}

#[test]
fn test_open_emits_one_batch_of_events() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("events.json");
    sample_document().save(&path).unwrap();

    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    let mut doc = SceneDocument::new();
    doc.subscribe(move |e| sink.borrow_mut().push(e.clone()));

    doc.open(&path).unwrap();
    assert_eq!(
        *events.borrow(),
        vec![
            SceneEvent::Cleared,
            SceneEvent::FileNameChanged(path.display().to_string()),
            SceneEvent::Invalidated,
        ]
    );
}

#[test]
fn test_open_missing_file_leaves_document_intact() {
    let dir = TempDir::new().unwrap();
    let mut doc = sample_document();

    let err = doc.open(dir.path().join("missing.json")).unwrap_err();
    assert!(err.is_io_error());
    assert_eq!(err.severity(), ErrorSeverity::Critical);
    assert_eq!(doc.nodes().len(), 2);
    assert!(doc.can_undo());
}

#[test]
fn test_open_legacy_version_is_warning() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("legacy.json");
    std::fs::write(
        &path,
        r#"{ "version": "2.0", "geometry": { "nodes": [ { "x": 1.0, "y": 1.0 } ] } }"#,
    )
    .unwrap();

    let mut doc = SceneDocument::new();
    let err = doc.open(&path).unwrap_err();
    assert!(matches!(err, Error::UnsupportedVersion { .. }));

    let result = ErrorResult::from(&err);
    assert_eq!(result.severity, ErrorSeverity::Warning);
    assert!(result.is_error());
    assert!(doc.nodes().is_empty());
}

#[test]
fn test_open_malformed_file_is_critical() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ \"version\": ").unwrap();

    let mut doc = SceneDocument::new();
    let err = doc.open(&path).unwrap_err();
    assert!(matches!(err, Error::Json { .. }));
    assert_eq!(err.severity(), ErrorSeverity::Critical);
}

#[test]
fn test_open_deduplicates_and_normalizes_script() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dupes.json");
    std::fs::write(
        &path,
        r#"{
            "version": "2.1",
            "geometry": { "nodes": [
                { "id": 0, "x": 0.0, "y": 0.0 },
                { "id": 1, "x": 0.0, "y": 0.0 },
                { "id": 2, "x": 1.0, "y": 0.0 }
            ] },
            "problem": { "name": "dupes", "startup_script": "a = 1\r\nb = 2\r" }
        }"#,
    )
    .unwrap();

    let mut doc = SceneDocument::new();
    doc.open(&path).unwrap();
    assert_eq!(doc.nodes().len(), 2);
    assert_eq!(doc.problem.startup_script, "a = 1\nb = 2\n");
}

#[test]
fn test_edit_after_open_marks_modified() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("edit.json");
    sample_document().save(&path).unwrap();

    let mut doc = SceneDocument::new();
    doc.open(&path).unwrap();
    doc.new_node(p(9.0, 9.0, 0.0));
    assert!(doc.is_modified());
    assert_eq!(doc.display_name(), "edit.json*");

    doc.undo();
    assert!(!doc.is_modified());
}

#[test]
fn test_save_to_unwritable_path_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no_such_dir").join("file.json");

    let mut doc = sample_document();
    let err = doc.save(&path).unwrap_err();
    assert!(err.is_io_error());
    assert!(doc.is_modified());
    assert!(doc.problem.file_name.is_none());
}
