//! Physical constants and system parameters

/// Radius of the authalic sphere used as the Earth model (km)
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Number of ranged anchors consumed by the closed-form solver
pub const SOLVER_ANCHOR_COUNT: usize = 3;

/// Threshold below which a length or divisor (km) is treated as zero
/// when checking the solve for degeneracy
pub const NEAR_ZERO_KM: f64 = 1e-9;
