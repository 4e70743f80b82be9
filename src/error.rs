//! Error types for dispatch solving.

use thiserror::Error;

/// Errors raised by model construction, distance computation, and solvers.
///
/// All variants are unrecoverable precondition failures: they are raised
/// before any optimization work starts and propagate straight to the caller.
/// The solvers never fail mid-loop and never return partial results.
///
/// # Examples
///
/// ```
/// use u_dispatch::error::DispatchError;
/// use u_dispatch::models::Coordinate;
///
/// let err = Coordinate::new(91.0, 0.0).unwrap_err();
/// assert!(matches!(err, DispatchError::InvalidCoordinate { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    /// Latitude outside [-90, 90] or longitude outside [-180, 180].
    #[error("invalid coordinate ({lat}, {lon}): latitude must be between -90 and 90, longitude between -180 and 180")]
    InvalidCoordinate { lat: f64, lon: f64 },

    /// Distance unit string not in the supported set.
    #[error("unsupported distance unit '{0}': expected km, miles, meters or feet")]
    InvalidUnit(String),

    /// A solver was called with no vehicles.
    #[error("vehicles list cannot be empty")]
    EmptyVehicleSet,

    /// A solver was called with no orders.
    #[error("orders list cannot be empty")]
    EmptyOrderSet,
}
