//! Top-level beacon location facade
//!
//! Composes the sample selector and trilateration solver over the
//! collaborator stores: one call gathers the freshest ranges for a
//! beacon, solves for its position, and persists the result. The
//! locator holds no state of its own between calls, so one instance
//! over `Sync` collaborators may serve concurrent estimations for
//! different beacons.

use log::{debug, warn};

use crate::algorithms::{solve, Degeneracy, SolveOutcome};
use crate::core::{BeaconId, PositionEstimate};
use crate::error::LocationResult;
use crate::selection::{SampleSelector, Selection};
use crate::store::{BeaconLocationStore, ListenerRegistry, RangeSampleStore};

/// Outcome of one estimation call
///
/// `InsufficientData` and `Unsolvable` are recoverable: the beacon's
/// last known location simply stays unchanged and the caller may retry
/// once more samples arrive.
#[derive(Debug, Clone, PartialEq)]
pub enum EstimateOutcome {
    /// A concrete position was solved
    Located(PositionEstimate),
    /// Fewer than three anchors have a current sample for the beacon
    InsufficientData { usable: usize },
    /// The selected geometry and ranges admit no real position
    Unsolvable(Degeneracy),
}

/// Estimates and persists beacon positions
pub struct BeaconLocator<R, S, L> {
    registry: R,
    samples: S,
    locations: L,
}

impl<R, S, L> BeaconLocator<R, S, L>
where
    R: ListenerRegistry,
    S: RangeSampleStore,
    L: BeaconLocationStore,
{
    pub fn new(registry: R, samples: S, locations: L) -> Self {
        Self {
            registry,
            samples,
            locations,
        }
    }

    /// Estimate a beacon's position without persisting it
    pub fn estimate(&self, beacon_id: BeaconId) -> LocationResult<EstimateOutcome> {
        let selector = SampleSelector::new(&self.registry, &self.samples);
        let input = match selector.select(beacon_id)? {
            Selection::Ranged(input) => input,
            Selection::InsufficientData { usable } => {
                return Ok(EstimateOutcome::InsufficientData { usable });
            }
        };

        match solve(&input) {
            SolveOutcome::Position(estimate) => {
                debug!(
                    "beacon {} located at ({:.6}, {:.6})",
                    beacon_id, estimate.lat, estimate.lon
                );
                Ok(EstimateOutcome::Located(estimate))
            }
            SolveOutcome::Unsolvable(kind) => {
                warn!("beacon {}: unsolvable geometry ({:?})", beacon_id, kind);
                Ok(EstimateOutcome::Unsolvable(kind))
            }
        }
    }

    /// Estimate a beacon's position and record it in the location store
    ///
    /// Recoverable outcomes write nothing; the beacon's previously
    /// recorded location stands until a later call solves.
    pub fn update_location(&self, beacon_id: BeaconId) -> LocationResult<EstimateOutcome> {
        let outcome = self.estimate(beacon_id)?;
        if let EstimateOutcome::Located(estimate) = &outcome {
            self.locations.record_position(beacon_id, estimate)?;
        }
        Ok(outcome)
    }
}
