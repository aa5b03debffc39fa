//! Collaborator store capabilities
//!
//! The location engine owns no persistence. Anchors, range samples, and
//! solved positions live in external stores reached through the traits
//! in this module; the engine takes the capabilities it needs
//! explicitly, so tests and embedders can substitute the in-memory
//! implementations from [`memory`].

pub mod memory;

use std::fmt;

use crate::core::{AnchorId, AnchorPosition, AnchorSample, BeaconId, PositionEstimate};

/// Result type for collaborator store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failure of a collaborator store call
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The store could not serve the request
    Unavailable { store: &'static str, details: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable { store, details } => {
                write!(f, "{} store unavailable: {}", store, details)
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// Registry of fixed listener nodes and their geodetic positions
///
/// Reference data from the engine's point of view: it only ever reads.
/// Iteration order of [`anchor_ids`](ListenerRegistry::anchor_ids) must
/// be deterministic; it is the tie-break for samples with equal
/// timestamps during selection.
pub trait ListenerRegistry {
    /// All registered anchor ids
    fn anchor_ids(&self) -> StoreResult<Vec<AnchorId>>;

    /// Position of one anchor, or `None` if the id is unknown
    fn position(&self, anchor_id: AnchorId) -> StoreResult<Option<AnchorPosition>>;
}

/// Per-(anchor, beacon) retention of the most recent range measurement
pub trait RangeSampleStore {
    /// Latest sample for the pair, or `None` if this anchor has never
    /// heard this beacon
    fn latest_sample(
        &self,
        anchor_id: AnchorId,
        beacon_id: BeaconId,
    ) -> StoreResult<Option<AnchorSample>>;
}

/// Sink for solved beacon positions
pub trait BeaconLocationStore {
    /// Record the beacon's newly solved position, superseding any
    /// previous one
    fn record_position(
        &self,
        beacon_id: BeaconId,
        position: &PositionEstimate,
    ) -> StoreResult<()>;
}
