//! Domain model types for delivery dispatch.
//!
//! Provides the core abstractions: validated geographic coordinates, orders
//! with pickup/dropoff locations, vehicles with a current position, the
//! index-based assignment the solvers mutate, and the route output type.

mod assignment;
mod coordinate;
mod order;
mod route;
mod vehicle;

pub use assignment::Assignment;
pub use coordinate::Coordinate;
pub use order::Order;
pub use route::Route;
pub use vehicle::Vehicle;
