//! Numeric tolerances.

/// Per-axis tolerance for point equality.
///
/// Two coordinates are equal when their absolute difference is strictly less
/// than this value. Node deduplication and lookup depend on it.
pub const EPS_POINT: f64 = 1e-12;

/// Magnitudes below this are treated as zero (angles of a null vector, etc).
pub const EPS_ZERO: f64 = 1e-10;

/// Half-extent of the bounding box reported for an empty scene.
pub const EMPTY_SCENE_HALF_EXTENT: f64 = 0.5;
