//! # SceneKit Core
//!
//! Core types shared by the SceneKit crates:
//! - Geometry primitives with epsilon equality ([`Point`], [`Point3`], [`BoundingBox`])
//! - The error taxonomy used by file-level operations
//! - Synchronous change notification for scene observers

pub mod constants;
pub mod error;
pub mod event;
pub mod geometry;

pub use constants::{EPS_POINT, EPS_ZERO};
pub use error::{Error, ErrorResult, ErrorSeverity, Result};
pub use event::{SceneEvent, SceneListener, SceneNotifier, SubscriptionId};
pub use geometry::{BoundingBox, Point, Point3};
