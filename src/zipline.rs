//! Entry points of the zipline engine.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::DEFAULT_NUM_POINTS;
use crate::dynamics::integrate_travel;
use crate::errors::ZiplineError;
use crate::geometry::{arc_length, Geometry, Point};
use crate::load::LoadState;
use crate::profile::{CableProfile, LoadPlacement};
use crate::reactions::{solve_reactions, Reactions};
use crate::tension::optimal_tension;
use crate::thermal::adjust_tension;

/// Everything needed to solve one zipline configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZiplineParameters {
    /// Horizontal distance between the anchors in metres.
    pub span: f64,
    /// Elevation of the start anchor in metres.
    pub start_height: f64,
    /// Elevation of the end anchor in metres.
    pub end_height: f64,
    /// Cable mass per metre in kg/m.
    pub rope_mass_per_meter: f64,
    /// Nominal pre-tension in kg-force at the reference temperature.
    pub tension_kg: f64,
    /// Rider weight in kg.
    pub load_weight_kg: f64,
    /// Distance of the rider from the start anchor in metres.
    pub load_position_x: f64,
    /// Air temperature in °C.
    pub temperature_c: f64,
    /// Trolley and carabiner weight in kg.
    pub equipment_weight_kg: f64,
    /// Rider drag area `Cd·A` in m².
    pub drag_area: f64,
    /// Number of sample intervals along the span.
    pub num_points: usize,
}

impl Default for ZiplineParameters {
    /// A 100 m line dropping 4 m on 12 mm rope, 800 kg pre-tension, with a
    /// seated 122 kg rider at midspan.
    fn default() -> Self {
        Self {
            span: 100.0,
            start_height: 15.0,
            end_height: 11.0,
            rope_mass_per_meter: 0.86,
            tension_kg: 800.0,
            load_weight_kg: 122.0,
            load_position_x: 50.0,
            temperature_c: 20.0,
            equipment_weight_kg: 2.0,
            drag_area: 0.5,
            num_points: DEFAULT_NUM_POINTS,
        }
    }
}

impl ZiplineParameters {
    /// Anchor layout described by these parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ZiplineError::InvalidGeometry`] when the span is not strictly positive.
    pub fn geometry(&self) -> Result<Geometry, ZiplineError> {
        Geometry::new(self.span, self.start_height, self.end_height)
    }

    /// Rider load described by these parameters.
    #[must_use]
    pub fn load(&self) -> LoadState {
        LoadState {
            rider_weight: self.load_weight_kg,
            equipment_weight: self.equipment_weight_kg,
            load_position: self.load_position_x,
            drag_area: self.drag_area,
        }
    }

    /// Copy of these parameters with the rider removed and the load parked at midspan.
    #[must_use]
    pub fn unloaded(&self) -> Self {
        Self {
            load_weight_kg: 0.0,
            equipment_weight_kg: 0.0,
            load_position_x: 0.5 * self.span,
            ..*self
        }
    }
}

/// Complete solution for one zipline configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZiplineResult {
    /// Static profile with the load fixed at its configured position.
    pub points: Vec<Point>,
    /// Profile with the load under each sample, carrying the rider speed in km/h.
    pub travel_profile: Vec<Point>,
    /// Anchor reactions in kg-force.
    pub reactions: Reactions,
    /// Cable tension at the start anchor in newtons.
    pub max_tension_newtons: f64,
    /// Length of the static profile polyline in metres.
    pub cable_length: f64,
}

/// Solve the sag profile, anchor reactions and rider speed of a zipline.
///
/// The nominal tension is first corrected for temperature, then the static
/// profile, the travel profile and the anchor reactions are derived from the
/// same loaded cable.
///
/// # Errors
///
/// Returns a [`ZiplineError`] when the geometry, load or resolution is invalid or
/// when the corrected tension is not positive. No partial result is produced.
///
/// # Examples
/// ```
/// use ziplinex::{calculate_zipline_curve, ZiplineParameters};
///
/// let result = calculate_zipline_curve(&ZiplineParameters::default()).expect("valid line");
/// assert_eq!(result.points.len(), 101);
/// assert!(result.cable_length > 100.0);
/// ```
pub fn calculate_zipline_curve(
    parameters: &ZiplineParameters,
) -> Result<ZiplineResult, ZiplineError> {
    let geometry = parameters.geometry()?;
    let load = parameters.load();
    load.validate()?;

    let tension_newtons = adjust_tension(parameters.tension_kg, parameters.temperature_c);
    let cable = CableProfile::new(
        geometry,
        tension_newtons,
        parameters.rope_mass_per_meter,
        load.total_load_kg(),
    )?;
    debug!(
        tension_newtons,
        total_load_kg = load.total_load_kg(),
        "solving zipline profile"
    );

    let points = cable.sample(
        parameters.num_points,
        LoadPlacement::Fixed(load.load_position),
    )?;
    let travel_profile = integrate_travel(&cable, parameters.num_points, load.drag_area)?;
    let anchors = solve_reactions(&cable, load.load_position)?;
    let cable_length = arc_length(&points);

    debug!(
        cable_length,
        max_tension_newtons = anchors.max_tension_newtons,
        "zipline solved"
    );
    Ok(ZiplineResult {
        points,
        travel_profile,
        reactions: anchors.reactions,
        max_tension_newtons: anchors.max_tension_newtons,
        cable_length,
    })
}

/// Recommend a pre-tension in kg-force so that a 120 kg rider at midspan sags the
/// line by `span · target_sag_ratio`.
///
/// # Errors
///
/// Returns [`ZiplineError::InvalidGeometry`] for a non-positive span and
/// [`ZiplineError::InvalidTarget`] for a non-positive sag ratio.
pub fn calculate_optimal_tension(
    span: f64,
    rope_mass_per_meter: f64,
    target_sag_ratio: f64,
) -> Result<f64, ZiplineError> {
    let tension_kg = optimal_tension(span, rope_mass_per_meter, target_sag_ratio)?;
    debug!(span, target_sag_ratio, tension_kg, "optimal tension");
    Ok(tension_kg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn result_shapes_follow_the_resolution() {
        let parameters = ZiplineParameters {
            num_points: 40,
            ..ZiplineParameters::default()
        };
        let result = calculate_zipline_curve(&parameters).expect("valid line");
        assert_eq!(result.points.len(), 41);
        assert_eq!(result.travel_profile.len(), 41);
        assert_eq!(result.points[0].x, 0.0);
        assert_eq!(result.points[40].x, 100.0);
        assert!(result.points.iter().all(|p| p.speed.is_none()));
        assert!(result.travel_profile.iter().all(|p| p.speed.is_some()));
    }

    #[test]
    fn equipment_adds_to_the_point_load() {
        let base = ZiplineParameters::default();
        let heavier = ZiplineParameters {
            equipment_weight_kg: 12.0,
            ..base
        };
        let light = calculate_zipline_curve(&base).expect("valid line");
        let heavy = calculate_zipline_curve(&heavier).expect("valid line");
        assert!(heavy.reactions.start.vertical > light.reactions.start.vertical);
        assert_relative_eq!(
            heavy.reactions.start.vertical - light.reactions.start.vertical,
            5.0,
            epsilon = 1.0e-9
        );
    }

    #[test]
    fn slack_line_fails_atomically() {
        let parameters = ZiplineParameters {
            temperature_c: 1_000.0,
            ..ZiplineParameters::default()
        };
        let error = calculate_zipline_curve(&parameters).expect_err("slack line rejected");
        assert!(matches!(error, ZiplineError::DegenerateTension { .. }));
    }

    #[test]
    fn invalid_span_is_reported_before_anything_else() {
        let parameters = ZiplineParameters {
            span: 0.0,
            temperature_c: 1_000.0,
            ..ZiplineParameters::default()
        };
        assert_eq!(
            calculate_zipline_curve(&parameters),
            Err(ZiplineError::InvalidGeometry { span: 0.0 })
        );
    }

    #[test]
    fn load_beyond_the_end_anchor_is_rejected() {
        let parameters = ZiplineParameters {
            load_position_x: 150.0,
            ..ZiplineParameters::default()
        };
        assert_eq!(
            calculate_zipline_curve(&parameters),
            Err(ZiplineError::InvalidLoadPosition {
                position: 150.0,
                span: 100.0
            })
        );
    }

    #[test]
    fn unloaded_copy_parks_the_load_at_midspan() {
        let unloaded = ZiplineParameters::default().unloaded();
        assert_eq!(unloaded.load().total_load_kg(), 0.0);
        assert_relative_eq!(unloaded.load_position_x, 50.0);
    }

    #[test]
    fn result_serializes_with_camel_case_fields() {
        let parameters = ZiplineParameters {
            num_points: 2,
            ..ZiplineParameters::default()
        };
        let result = calculate_zipline_curve(&parameters).expect("valid line");
        let json = serde_json::to_value(&result).expect("serializes");
        assert!(json.get("travelProfile").is_some());
        assert!(json.get("maxTensionNewtons").is_some());
        assert!(json["points"][0].get("speed").is_none());
        assert_eq!(json["travelProfile"][0]["speed"], 0.0);
    }
}
