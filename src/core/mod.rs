//! Core types and constants for the location engine

pub mod constants;
pub mod types;

pub use constants::*;
pub use types::*;
