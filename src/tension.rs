//! Recommended pre-tension for a target sag.

use crate::constants::{GRAVITY, REFERENCE_LOAD_KG, TENSION_ROUNDING_KG};
use crate::errors::ZiplineError;

/// Tension in kg-force that sags the line by `span · target_sag_ratio` under a
/// 120 kg point load at midspan plus the cable's own weight.
///
/// Inverts `sag = P·L/(4T) + q·L²/(8T)`.
///
/// # Errors
///
/// Returns [`ZiplineError::InvalidGeometry`] when `span` is not strictly positive and
/// [`ZiplineError::InvalidTarget`] when `target_sag_ratio` is not strictly positive.
///
/// # Examples
/// ```
/// use ziplinex::tension::optimal_tension;
///
/// let tension = optimal_tension(100.0, 0.86, 0.02).expect("valid inputs");
/// assert!((tension - 2_037.5).abs() < 0.1);
/// ```
pub fn optimal_tension(
    span: f64,
    rope_mass_per_meter: f64,
    target_sag_ratio: f64,
) -> Result<f64, ZiplineError> {
    if span <= 0.0 || !span.is_finite() {
        return Err(ZiplineError::InvalidGeometry { span });
    }
    if target_sag_ratio <= 0.0 || target_sag_ratio.is_nan() {
        return Err(ZiplineError::InvalidTarget { target_sag_ratio });
    }
    let q = rope_mass_per_meter * GRAVITY;
    let p = REFERENCE_LOAD_KG * GRAVITY;
    let target_sag = span * target_sag_ratio;
    let tension_newtons = (p * span / 4.0 + q * span.powi(2) / 8.0) / target_sag;
    Ok(tension_newtons / GRAVITY)
}

/// Round a tension to the nearest rigging increment of 10 kg.
#[must_use]
pub fn round_to_rigging_increment(tension_kg: f64) -> f64 {
    (tension_kg / TENSION_ROUNDING_KG).round() * TENSION_ROUNDING_KG
}
