//! Core data types for the location engine

use serde::{Deserialize, Serialize};

/// Identifier of a fixed listener (anchor) node
pub type AnchorId = u32;

/// Identifier of a mobile beacon tag
pub type BeaconId = u32;

/// Most recent distance measurement from one anchor to one beacon
///
/// Produced by the external ranging feed; older measurements for the
/// same (anchor, beacon) pair are superseded, not accumulated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorSample {
    pub anchor_id: AnchorId,
    /// Measured range in meters
    pub distance_m: f64,
    /// Measurement time, milliseconds since the Unix epoch
    pub observed_at_ms: u64,
}

/// Geodetic position of a fixed anchor node
///
/// Immutable reference data owned by the listener registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorPosition {
    pub anchor_id: AnchorId,
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
}

/// Anchor coordinates paired with its measured range to the beacon
#[derive(Debug, Clone, PartialEq)]
pub struct RangedAnchor {
    pub position: AnchorPosition,
    /// Measured range in meters
    pub distance_m: f64,
}

/// The three most recent usable ranged anchors, ordered oldest-first
///
/// Invariants (guaranteed by the selector): the three anchor ids are
/// distinct, and every distance is a non-negative finite number.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverInput {
    pub anchors: [RangedAnchor; 3],
}

/// A solved beacon position in geodetic coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionEstimate {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
}
