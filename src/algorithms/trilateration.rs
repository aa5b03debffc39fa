//! Closed-form three-sphere trilateration
//!
//! Solves for the single point whose distances to three anchors match
//! the measured ranges, after projecting the anchors onto a spherical
//! Earth model. The classical three-sphere intersection has two mirror
//! solutions; this solver always reports the positive-root solution
//! (the point above the anchor plane) and never the mirror point. That
//! policy, and the restriction to exactly three anchors with no
//! iterative refinement or least-squares fit, are deliberate: the solve
//! is exact, deterministic, and allocation-free, trading robustness
//! against noise for simplicity.

use nalgebra::Vector3;

use crate::algorithms::geodetic::{ecef_to_geodetic, geodetic_to_ecef};
use crate::core::{PositionEstimate, SolverInput, NEAR_ZERO_KM};

/// Why a solver input admitted no real, finite position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degeneracy {
    /// Two anchors occupy (numerically) the same point
    CoincidentAnchors,
    /// The three anchors lie on a single line
    CollinearAnchors,
    /// The three range spheres do not intersect in a real point
    NoIntersection,
    /// A measured range was negative or non-finite
    InvalidDistance,
}

/// Outcome of a trilateration solve
///
/// `Unsolvable` is an ordinary result, not a fault: it is the expected
/// outcome for degenerate anchor geometry or mutually inconsistent
/// ranges, and callers branch on it explicitly.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveOutcome {
    Position(PositionEstimate),
    Unsolvable(Degeneracy),
}

impl SolveOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveOutcome::Position(_))
    }
}

/// Solve the three-sphere intersection for the beacon position
///
/// Projects the anchors to ECEF, builds a local orthonormal frame
/// anchored at the first anchor, evaluates the closed-form intersection
/// in that frame, and converts the result back to geodetic degrees.
/// Every intermediate division is guarded against near-zero divisors,
/// and a non-finite result is reported as [`Degeneracy::NoIntersection`]
/// rather than propagated.
pub fn solve(input: &SolverInput) -> SolveOutcome {
    for anchor in &input.anchors {
        if !anchor.distance_m.is_finite() || anchor.distance_m < 0.0 {
            return SolveOutcome::Unsolvable(Degeneracy::InvalidDistance);
        }
    }

    let [a, b, c] = &input.anchors;
    let p1 = geodetic_to_ecef(a.position.lat, a.position.lon);
    let p2 = geodetic_to_ecef(b.position.lat, b.position.lon);
    let p3 = geodetic_to_ecef(c.position.lat, c.position.lon);

    // Ranges in km to match the sphere radius
    let d1 = a.distance_m / 1000.0;
    let d2 = b.distance_m / 1000.0;
    let d3 = c.distance_m / 1000.0;

    // Local frame at P1: ex toward P2, ey in the anchor plane, ez normal
    let p21 = p2 - p1;
    let d = p21.norm();
    if d < NEAR_ZERO_KM {
        return SolveOutcome::Unsolvable(Degeneracy::CoincidentAnchors);
    }
    let ex = p21 / d;

    let p31 = p3 - p1;
    if p31.norm() < NEAR_ZERO_KM {
        return SolveOutcome::Unsolvable(Degeneracy::CoincidentAnchors);
    }
    let i = ex.dot(&p31);
    let ey_raw = p31 - ex * i;
    let ey_len = ey_raw.norm();
    if ey_len < NEAR_ZERO_KM {
        return SolveOutcome::Unsolvable(Degeneracy::CollinearAnchors);
    }
    let ey = ey_raw / ey_len;
    let ez = ex.cross(&ey);
    let j = ey.dot(&p31);
    if j.abs() < NEAR_ZERO_KM {
        return SolveOutcome::Unsolvable(Degeneracy::CollinearAnchors);
    }

    // Closed-form intersection in the local frame
    let x = (d1 * d1 - d2 * d2 + d * d) / (2.0 * d);
    let y = (d1 * d1 - d3 * d3 + i * i + j * j) / (2.0 * j) - (i / j) * x;
    let z_sq = d1 * d1 - x * x - y * y;
    if z_sq < 0.0 {
        return SolveOutcome::Unsolvable(Degeneracy::NoIntersection);
    }
    // Positive root only; the mirror solution below the anchor plane is
    // never produced
    let z = z_sq.sqrt();

    let tri_pt = p1 + ex * x + ey * y + ez * z;
    let (lat, lon) = ecef_to_geodetic(&tri_pt);
    if !lat.is_finite() || !lon.is_finite() {
        return SolveOutcome::Unsolvable(Degeneracy::NoIntersection);
    }

    SolveOutcome::Position(PositionEstimate { lat, lon })
}
