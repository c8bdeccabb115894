//! Rider speed along the line.
//!
//! The span is walked in fixed horizontal steps. At each step the cable height is
//! taken with the rider sitting exactly at that step, the local slope is derived
//! from the previous sample, and the speed is advanced with the work-energy
//! relation `v² = v₀² + 2·a·ds` under gravity, quadratic air drag and rolling
//! friction. The cable is treated as quasi-static while the rider moves.

use uom::si::f64::Velocity;
use uom::si::velocity::{kilometer_per_hour, meter_per_second};

use crate::constants::{AIR_DENSITY, GRAVITY, ROLLING_FRICTION_COEFFICIENT};
use crate::errors::{LoadError, ZiplineError};
use crate::geometry::Point;
use crate::profile::{CableProfile, LoadPlacement};

/// Integrate the rider speed over `num_steps` intervals of the span.
///
/// Returns the travel profile: one point per step, load co-located with the
/// sample, with the speed in km/h. The first sample always has zero speed. A
/// rider that decelerates to a stop stays stopped for that step rather than
/// rolling backwards. An unloaded line yields an all-zero speed profile.
///
/// # Errors
///
/// Returns [`ZiplineError::InvalidResolution`] when `num_steps` is zero and
/// [`ZiplineError::InvalidLoad`] when `drag_area` is not strictly positive.
pub fn integrate_travel(
    cable: &CableProfile,
    num_steps: usize,
    drag_area: f64,
) -> Result<Vec<Point>, ZiplineError> {
    if drag_area <= 0.0 || drag_area.is_nan() {
        return Err(LoadError::NonPositiveDragArea(drag_area).into());
    }
    let heights = cable.sample(num_steps, LoadPlacement::FollowSample)?;
    let mass = cable.total_load_kg();
    if mass == 0.0 {
        return Ok(heights.into_iter().map(|p| p.with_speed(0.0)).collect());
    }

    let dx = cable.geometry().span / num_steps as f64;
    let mut speed = 0.0_f64;
    let mut profile = Vec::with_capacity(heights.len());
    let mut previous: Option<Point> = None;
    for sample in heights {
        if let Some(prev) = previous {
            let dy = sample.y - prev.y;
            let ds = dx.hypot(dy);
            let sin_theta = -dy / ds;
            let cos_theta = dx / ds;

            let gravity = mass * GRAVITY * sin_theta;
            let drag = 0.5 * AIR_DENSITY * speed * speed * drag_area;
            let friction = ROLLING_FRICTION_COEFFICIENT * mass * GRAVITY * cos_theta;
            let acceleration = (gravity - drag - friction) / mass;

            speed = (speed * speed + 2.0 * acceleration * ds).max(0.0).sqrt();
        }
        profile.push(sample.with_speed(to_kmh(speed)));
        previous = Some(sample);
    }
    Ok(profile)
}

/// Convert a speed in m/s to km/h.
fn to_kmh(speed: f64) -> f64 {
    Velocity::new::<meter_per_second>(speed).get::<kilometer_per_hour>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Geometry;
    use approx::assert_relative_eq;

    fn cable(start_height: f64, end_height: f64, total_load_kg: f64) -> CableProfile {
        let geometry = Geometry::new(100.0, start_height, end_height).expect("valid span");
        CableProfile::new(geometry, 7_848.0, 0.86, total_load_kg).expect("valid cable")
    }

    #[test]
    fn converts_metres_per_second_to_kilometres_per_hour() {
        assert_relative_eq!(to_kmh(10.0), 36.0, epsilon = 1.0e-9);
    }

    #[test]
    fn rider_starts_at_rest_and_accelerates_downhill() {
        let profile = integrate_travel(&cable(30.0, 10.0, 100.0), 100, 0.5).expect("integrates");
        assert_eq!(profile.len(), 101);
        assert_eq!(profile[0].speed, Some(0.0));
        assert!(profile[1].speed.expect("speed present") > 0.0);
    }

    #[test]
    fn unloaded_line_reports_zero_speed() {
        let profile = integrate_travel(&cable(30.0, 10.0, 0.0), 50, 0.5).expect("integrates");
        assert_eq!(profile.len(), 51);
        assert!(profile.iter().all(|p| p.speed == Some(0.0)));
    }

    #[test]
    fn uphill_line_never_goes_negative() {
        let profile = integrate_travel(&cable(10.0, 40.0, 90.0), 100, 0.5).expect("integrates");
        for p in &profile {
            let speed = p.speed.expect("speed present");
            assert!(speed >= 0.0);
            assert_eq!(speed, 0.0);
        }
    }

    #[test]
    fn more_drag_means_a_slower_finish() {
        let line = cable(40.0, 10.0, 80.0);
        let tucked = integrate_travel(&line, 100, 0.15).expect("integrates");
        let spread = integrate_travel(&line, 100, 0.90).expect("integrates");
        let finish = |profile: &[Point]| profile.last().and_then(|p| p.speed).unwrap_or(0.0);
        assert!(finish(&tucked) > finish(&spread));
    }

    #[test]
    fn integration_is_deterministic() {
        let line = cable(15.0, 11.0, 124.0);
        let first = integrate_travel(&line, 100, 0.5).expect("integrates");
        let second = integrate_travel(&line, 100, 0.5).expect("integrates");
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_non_positive_drag_area() {
        let error = integrate_travel(&cable(15.0, 11.0, 124.0), 100, 0.0)
            .expect_err("zero drag area rejected");
        assert_eq!(error, ZiplineError::InvalidLoad(LoadError::NonPositiveDragArea(0.0)));
    }
}
