//! Error types produced while solving a zipline.

use thiserror::Error;

/// Error returned when the zipline engine rejects its inputs.
///
/// Every variant is a deterministic precondition violation: the same inputs always
/// produce the same error, and no partial result is ever returned alongside it.
///
/// # Examples
///
/// ```
/// use ziplinex::{calculate_optimal_tension, ZiplineError};
///
/// let error = calculate_optimal_tension(100.0, 0.86, 0.0).expect_err("zero sag rejected");
/// assert_eq!(error, ZiplineError::InvalidTarget { target_sag_ratio: 0.0 });
/// ```
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum ZiplineError {
    /// Returned when the horizontal span is zero, negative or not finite.
    #[error("span must be positive (received {span} m)")]
    InvalidGeometry {
        /// Rejected span in metres.
        span: f64,
    },
    /// Returned when the requested sag-to-span ratio is zero or negative.
    #[error("target sag ratio must be positive (received {target_sag_ratio})")]
    InvalidTarget {
        /// Rejected sag-to-span ratio.
        target_sag_ratio: f64,
    },
    /// Returned when the thermally corrected tension is no longer positive.
    #[error("adjusted tension {tension_newtons:.1} N is not positive; the line is slack")]
    DegenerateTension {
        /// Tension after thermal correction in newtons.
        tension_newtons: f64,
    },
    /// Returned when the point load is placed outside the span.
    #[error("load position {position} m lies outside the span [0, {span}] m")]
    InvalidLoadPosition {
        /// Rejected load position in metres from the start anchor.
        position: f64,
        /// Span of the line in metres.
        span: f64,
    },
    /// Returned when a profile is requested with zero sample intervals.
    #[error("a profile needs at least one sample interval")]
    InvalidResolution,
    /// Returned when a load or cable quantity is not physically meaningful.
    #[error("{0}")]
    InvalidLoad(LoadError),
}

/// Reason a load, cable or aerodynamic quantity was rejected.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum LoadError {
    /// Returned when the rider weight is negative.
    #[error("rider weight must not be negative (received {0} kg)")]
    NegativeRiderWeight(f64),
    /// Returned when the equipment weight is negative.
    #[error("equipment weight must not be negative (received {0} kg)")]
    NegativeEquipmentWeight(f64),
    /// Returned when the drag area is zero or negative.
    #[error("drag area must be positive (received {0} m²)")]
    NonPositiveDragArea(f64),
    /// Returned when the cable mass per metre is zero or negative.
    #[error("cable mass per metre must be positive (received {0} kg/m)")]
    NonPositiveCableMass(f64),
}

impl From<LoadError> for ZiplineError {
    fn from(value: LoadError) -> Self {
        ZiplineError::InvalidLoad(value)
    }
}
