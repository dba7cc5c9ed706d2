//! Serialization and deserialization for scene documents.
//!
//! Documents are JSON with the layout of the legacy XML problem files: a
//! `geometry.nodes` list of `x, y, z` records and a `problem` block of free-text
//! metadata.

use chrono::{DateTime, Utc};
use scenekit_core::{Error, Point3, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Document file format version
pub const FILE_FORMAT_VERSION: &str = "2.1";

/// Complete document file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentFile {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub geometry: GeometryData,
    #[serde(default)]
    pub problem: ProblemData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeometryData {
    #[serde(default)]
    pub nodes: Vec<NodeData>,
}

/// Serialized node. `id` is the node's position in the list at save time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeData {
    #[serde(default)]
    pub id: usize,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl NodeData {
    pub fn point(&self) -> Point3 {
        Point3::new(self.x, self.y, self.z)
    }
}

/// Problem metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProblemData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub startup_script: String,
}

impl DocumentFile {
    /// Creates an empty document of the current format version.
    pub fn new(name: &str) -> Self {
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            geometry: GeometryData::default(),
            problem: ProblemData {
                name: name.to_string(),
                ..ProblemData::default()
            },
            saved: None,
        }
    }

    /// Appends a node, numbering it by its list position.
    pub fn push_node(&mut self, point: Point3) {
        let id = self.geometry.nodes.len();
        self.geometry.nodes.push(NodeData {
            id,
            x: point.x,
            y: point.y,
            z: point.z,
        });
    }

    /// Files without a version, or from the 2.0 format, need conversion.
    pub fn is_legacy_version(version: &str) -> bool {
        version.trim().is_empty() || version.trim() == "2.0"
    }

    /// Parses a document from a JSON string. `origin` names the source in
    /// error messages.
    pub fn from_json(json: &str, origin: &str) -> Result<Self> {
        let file: Self = serde_json::from_str(json).map_err(|source| Error::Json {
            path: origin.to_string(),
            source,
        })?;

        if Self::is_legacy_version(&file.version) {
            tracing::warn!("{} has legacy document version '{}'", origin, file.version);
            return Err(Error::UnsupportedVersion {
                path: origin.to_string(),
                version: file.version,
            });
        }

        Ok(file)
    }

    /// Serializes the document as pretty JSON. `origin` names the target in
    /// error messages.
    pub fn to_json(&self, origin: &str) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|source| Error::Json {
            path: origin.to_string(),
            source,
        })
    }

    /// Load document from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: origin.clone(),
            source,
        })?;
        Self::from_json(&json, &origin)
    }

    /// Save document to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut file = self.clone();
        file.saved = Some(Utc::now());

        let json = file.to_json(&path.display().to_string())?;
        std::fs::write(path, json).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })
    }
}
