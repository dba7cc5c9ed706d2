//! # SceneKit Scene
//!
//! The document model of a pre-processor scene: a store of uniquely
//! positioned nodes and a linear undo/redo history over it.
//!
//! ## Architecture
//!
//! ```text
//! SceneDocument (one per open file)
//!   ├── NodeStore    (ordered nodes, selection, notifications)
//!   ├── EditHistory  (entries + cursor, macros)
//!   └── ProblemInfo  (name, description, startup script)
//! ```
//!
//! Commands are position-addressed: they carry point values and look their
//! target node up by position when applied, so they stay valid even after the
//! node they once touched has been destroyed and recreated.
//!
//! ## Usage
//!
//! ```rust
//! use scenekit_core::Point3;
//! use scenekit_scene::SceneDocument;
//!
//! let mut doc = SceneDocument::new();
//! doc.new_node(Point3::new(0.0, 0.0, 0.0));
//! doc.new_node(Point3::new(1.0, 0.0, 0.0));
//! assert_eq!(doc.nodes().len(), 2);
//!
//! doc.undo();
//! assert_eq!(doc.nodes().len(), 1);
//! ```

pub mod commands;
pub mod document;
pub mod history;
pub mod node;
pub mod node_store;
pub mod serialization;

pub use commands::{AddNode, CompositeCommand, EditNodePosition, RemoveNode, SceneCommand};
pub use document::{ProblemInfo, SceneDocument};
pub use history::EditHistory;
pub use node::{NodeHandle, SceneNode};
pub use node_store::NodeStore;
pub use serialization::DocumentFile;
