//! Error types for the location engine
//!
//! Only hard failures live here. Insufficient data and unsolvable
//! geometry are ordinary outcomes carried in [`Selection`],
//! [`SolveOutcome`], and [`EstimateOutcome`] variants, never as errors:
//! callers must branch on them explicitly instead of catching them.
//!
//! [`Selection`]: crate::selection::Selection
//! [`SolveOutcome`]: crate::algorithms::SolveOutcome
//! [`EstimateOutcome`]: crate::locator::EstimateOutcome

use std::fmt;

use crate::core::{AnchorId, BeaconId};
use crate::store::StoreError;

/// Result type for location engine operations
pub type LocationResult<T> = Result<T, LocationError>;

/// Hard failures of an estimation call
#[derive(Debug, Clone, PartialEq)]
pub enum LocationError {
    /// A range sample references an anchor the registry does not know.
    /// The sample store only ever records samples against registered
    /// anchors, so this is a data-consistency violation between the two
    /// stores; retrying will not fix it.
    UnresolvedAnchor {
        anchor_id: AnchorId,
        beacon_id: BeaconId,
    },
    /// A collaborator store call failed
    Store { source: StoreError },
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationError::UnresolvedAnchor {
                anchor_id,
                beacon_id,
            } => write!(
                f,
                "sample for beacon {} references anchor {} missing from the registry",
                beacon_id, anchor_id
            ),
            LocationError::Store { source } => write!(f, "store failure: {}", source),
        }
    }
}

impl std::error::Error for LocationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LocationError::Store { source } => Some(source),
            _ => None,
        }
    }
}

impl From<StoreError> for LocationError {
    fn from(source: StoreError) -> Self {
        LocationError::Store { source }
    }
}
