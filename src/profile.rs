//! Static shape of a cable carrying its own weight and a single point load.
//!
//! The height at any position is the superposition of three terms: the straight
//! chord between the anchors, the parabolic sag of the distributed cable weight
//! and the triangular sag of the point load. The parabola is the usual small-sag
//! approximation of the catenary (see <https://en.wikipedia.org/wiki/Catenary>).

use crate::constants::GRAVITY;
use crate::errors::{LoadError, ZiplineError};
use crate::geometry::{Geometry, Point};
use crate::thermal::ensure_taut;

/// Where the point load sits while a profile is sampled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LoadPlacement {
    /// The load stays at a fixed distance from the start anchor in metres.
    Fixed(f64),
    /// The load moves with the sample, giving the cable position under a rider
    /// located exactly at each sampled `x`.
    FollowSample,
}

/// A tensioned cable with a known distributed weight and point load.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CableProfile {
    /// Anchor layout.
    geometry: Geometry,
    /// Horizontal tension in newtons after thermal correction.
    tension_newtons: f64,
    /// Distributed cable weight in newtons per metre.
    rope_weight: f64,
    /// Total point load in kilograms.
    total_load_kg: f64,
}

impl CableProfile {
    /// Create a profile solver.
    ///
    /// # Errors
    ///
    /// Returns [`ZiplineError::InvalidGeometry`] for a non-positive span,
    /// [`ZiplineError::DegenerateTension`] when the tension is not positive and
    /// [`ZiplineError::InvalidLoad`] for a non-positive cable mass or a negative load.
    pub fn new(
        geometry: Geometry,
        tension_newtons: f64,
        rope_mass_per_meter: f64,
        total_load_kg: f64,
    ) -> Result<Self, ZiplineError> {
        geometry.validate()?;
        let tension_newtons = ensure_taut(tension_newtons)?;
        if rope_mass_per_meter <= 0.0 || rope_mass_per_meter.is_nan() {
            return Err(LoadError::NonPositiveCableMass(rope_mass_per_meter).into());
        }
        if total_load_kg < 0.0 || total_load_kg.is_nan() {
            return Err(LoadError::NegativeRiderWeight(total_load_kg).into());
        }
        Ok(Self {
            geometry,
            tension_newtons,
            rope_weight: rope_mass_per_meter * GRAVITY,
            total_load_kg,
        })
    }

    /// Anchor layout of the cable.
    #[must_use]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Horizontal tension in newtons.
    #[must_use]
    pub fn tension_newtons(&self) -> f64 {
        self.tension_newtons
    }

    /// Distributed cable weight `q` in newtons per metre.
    #[must_use]
    pub fn rope_weight(&self) -> f64 {
        self.rope_weight
    }

    /// Point load in kilograms.
    #[must_use]
    pub fn total_load_kg(&self) -> f64 {
        self.total_load_kg
    }

    /// Point load `P` in newtons.
    #[must_use]
    pub fn point_load(&self) -> f64 {
        self.total_load_kg * GRAVITY
    }

    /// Sag caused by the distributed cable weight at `x`.
    #[must_use]
    pub fn rope_sag(&self, x: f64) -> f64 {
        let span = self.geometry.span;
        self.rope_weight * x * (span - x) / (2.0 * self.tension_newtons)
    }

    /// Sag caused by the point load sitting at `load_x`, evaluated at `x`.
    ///
    /// The deflection is triangular with its peak under the load, like a
    /// simply supported string carrying a concentrated force.
    #[must_use]
    pub fn load_sag(&self, x: f64, load_x: f64) -> f64 {
        let p = self.point_load();
        if p <= 0.0 {
            return 0.0;
        }
        let span = self.geometry.span;
        let a = load_x;
        let b = span - load_x;
        if x <= a {
            p * b * x / (self.tension_newtons * span)
        } else {
            p * a * (span - x) / (self.tension_newtons * span)
        }
    }

    /// Cable height at `x` with the point load at `load_x`.
    ///
    /// # Examples
    /// ```
    /// use ziplinex::{CableProfile, Geometry};
    ///
    /// let geometry = Geometry::new(100.0, 15.0, 11.0).expect("valid span");
    /// let cable = CableProfile::new(geometry, 7_848.0, 0.86, 124.0).expect("valid cable");
    /// assert_eq!(cable.height_at(0.0, 50.0), 15.0);
    /// assert!(cable.height_at(50.0, 50.0) < geometry.chord_height(50.0));
    /// ```
    #[must_use]
    pub fn height_at(&self, x: f64, load_x: f64) -> f64 {
        self.geometry.chord_height(x) - self.rope_sag(x) - self.load_sag(x, load_x)
    }

    /// Sample `num_points + 1` evenly spaced heights from `x = 0` to `x = span`.
    ///
    /// # Errors
    ///
    /// Returns [`ZiplineError::InvalidResolution`] when `num_points` is zero and
    /// [`ZiplineError::InvalidLoadPosition`] when a fixed load lies outside the span.
    pub fn sample(
        &self,
        num_points: usize,
        placement: LoadPlacement,
    ) -> Result<Vec<Point>, ZiplineError> {
        if num_points == 0 {
            return Err(ZiplineError::InvalidResolution);
        }
        let span = self.geometry.span;
        if let LoadPlacement::Fixed(position) = placement {
            if !(0.0..=span).contains(&position) {
                return Err(ZiplineError::InvalidLoadPosition { position, span });
            }
        }
        let points = (0..=num_points)
            .map(|i| {
                let x = sample_position(i, num_points, span);
                let load_x = match placement {
                    LoadPlacement::Fixed(position) => position,
                    LoadPlacement::FollowSample => x,
                };
                Point::new(x, self.height_at(x, load_x))
            })
            .collect();
        Ok(points)
    }
}

/// Position of sample `i` out of `num_points` intervals across `span`.
fn sample_position(i: usize, num_points: usize, span: f64) -> f64 {
    (i as f64 / num_points as f64) * span
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn level_cable(total_load_kg: f64) -> CableProfile {
        let geometry = Geometry::new(100.0, 15.0, 15.0).expect("valid span");
        CableProfile::new(geometry, 10_000.0, 0.86, total_load_kg).expect("valid cable")
    }

    #[test]
    fn anchors_sit_on_the_chord() {
        let cable = level_cable(120.0);
        for load_x in [0.0, 25.0, 100.0] {
            assert_relative_eq!(cable.height_at(0.0, load_x), 15.0);
            assert_relative_eq!(cable.height_at(100.0, load_x), 15.0, epsilon = 1.0e-12);
        }
    }

    #[test]
    fn point_load_sag_peaks_under_the_load() {
        let cable = level_cable(120.0);
        let peak = cable.load_sag(30.0, 30.0);
        // P·a·b / (T·L) for a = 30, b = 70.
        assert_relative_eq!(peak, 120.0 * GRAVITY * 30.0 * 70.0 / (10_000.0 * 100.0));
        assert!(cable.load_sag(29.0, 30.0) < peak);
        assert!(cable.load_sag(31.0, 30.0) < peak);
        // The two branches meet at the load.
        assert_relative_eq!(
            cable.load_sag(30.0 + 1.0e-9, 30.0),
            peak,
            epsilon = 1.0e-9
        );
    }

    #[test]
    fn zero_load_only_sags_under_self_weight() {
        let cable = level_cable(0.0);
        let points = cable
            .sample(10, LoadPlacement::Fixed(50.0))
            .expect("sampling succeeds");
        for p in points {
            assert_eq!(cable.load_sag(p.x, 50.0), 0.0);
            assert_relative_eq!(p.y, 15.0 - cable.rope_sag(p.x));
        }
    }

    #[test]
    fn sampling_covers_the_span_in_order() {
        let cable = level_cable(80.0);
        let points = cable
            .sample(4, LoadPlacement::FollowSample)
            .expect("sampling succeeds");
        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
        assert!(points.iter().all(|p| p.speed.is_none()));
    }

    #[test]
    fn follow_sample_places_the_load_at_each_point() {
        let cable = level_cable(80.0);
        let points = cable
            .sample(4, LoadPlacement::FollowSample)
            .expect("sampling succeeds");
        for p in points {
            assert_relative_eq!(p.y, cable.height_at(p.x, p.x));
        }
    }

    #[test]
    fn invalid_sampling_requests_are_rejected() {
        let cable = level_cable(80.0);
        assert_eq!(
            cable.sample(0, LoadPlacement::FollowSample),
            Err(ZiplineError::InvalidResolution)
        );
        assert_eq!(
            cable.sample(10, LoadPlacement::Fixed(120.0)),
            Err(ZiplineError::InvalidLoadPosition {
                position: 120.0,
                span: 100.0
            })
        );
    }

    #[test]
    fn slack_cable_is_rejected() {
        let geometry = Geometry::new(100.0, 15.0, 15.0).expect("valid span");
        let error = CableProfile::new(geometry, -1.0, 0.86, 0.0).expect_err("slack rejected");
        assert_eq!(
            error,
            ZiplineError::DegenerateTension {
                tension_newtons: -1.0
            }
        );
    }
}
