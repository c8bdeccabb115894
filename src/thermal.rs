//! Temperature correction of the nominal cable tension.

use crate::constants::{
    GRAVITY, REFERENCE_TEMPERATURE_C, STEEL_EXPANSION_COEFFICIENT, THERMAL_SPAN_SENSITIVITY,
};
use crate::errors::ZiplineError;

/// Convert a nominal tension in kg-force at `temperature_c` into newtons.
///
/// A warmer cable lengthens and loses tension, a colder one gains it. The result
/// is not checked; pass it through [`ensure_taut`] before dividing by it.
///
/// # Examples
/// ```
/// use ziplinex::thermal::adjust_tension;
///
/// assert_eq!(adjust_tension(800.0, 20.0), 800.0 * 9.81);
/// assert!(adjust_tension(800.0, 35.0) < adjust_tension(800.0, 20.0));
/// ```
#[must_use]
pub fn adjust_tension(tension_kg: f64, temperature_c: f64) -> f64 {
    let delta_t = temperature_c - REFERENCE_TEMPERATURE_C;
    tension_kg * GRAVITY * (1.0 - STEEL_EXPANSION_COEFFICIENT * delta_t * THERMAL_SPAN_SENSITIVITY)
}

/// Pass through a tension that can safely be used as a divisor.
///
/// # Errors
///
/// Returns [`ZiplineError::DegenerateTension`] when `tension_newtons` is zero,
/// negative or not finite.
pub fn ensure_taut(tension_newtons: f64) -> Result<f64, ZiplineError> {
    if tension_newtons > 0.0 && tension_newtons.is_finite() {
        Ok(tension_newtons)
    } else {
        Err(ZiplineError::DegenerateTension { tension_newtons })
    }
}
