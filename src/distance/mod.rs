//! Great-circle distance computation.
//!
//! Provides the Haversine distance primitive and the unit conversions
//! applied to it.

mod haversine;
mod unit;

pub use haversine::{distance, haversine_distance};
pub use unit::DistanceUnit;
