//! Positioning algorithms

pub mod geodetic;
pub mod trilateration;

pub use trilateration::{solve, Degeneracy, SolveOutcome};
