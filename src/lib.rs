//! Beacon Location Engine
//!
//! Estimates the geographic position of mobile beacon tags from noisy
//! distance measurements reported by fixed listener nodes at known
//! geodetic coordinates, using closed-form trilateration over a
//! spherical Earth model.
//!
//! The engine owns no persistence: anchors, range samples, and solved
//! positions live behind the collaborator traits in [`store`], and
//! in-memory implementations are provided for tests and embedding.

pub mod algorithms;
pub mod core;
pub mod error;
pub mod locator;
pub mod selection;
pub mod store;

// Re-export commonly used types
pub use algorithms::{solve, Degeneracy, SolveOutcome};
pub use self::core::{
    AnchorId, AnchorPosition, AnchorSample, BeaconId, PositionEstimate, RangedAnchor,
    SolverInput, EARTH_RADIUS_KM, SOLVER_ANCHOR_COUNT,
};
pub use error::{LocationError, LocationResult};
pub use locator::{BeaconLocator, EstimateOutcome};
pub use selection::{SampleSelector, Selection};
pub use store::{
    BeaconLocationStore, ListenerRegistry, RangeSampleStore, StoreError, StoreResult,
};
