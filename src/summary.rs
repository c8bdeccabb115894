//! Design figures derived from a solved zipline.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cable::{is_safe, CableSpec};
use crate::constants::GRAVITY;
use crate::errors::ZiplineError;
use crate::geometry::{point, Point};
use crate::zipline::{calculate_zipline_curve, ZiplineParameters, ZiplineResult};

/// Headline numbers used to judge a zipline design.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSummary {
    /// Elevation of the start anchor in metres.
    pub start_height: f64,
    /// Elevation of the end anchor in metres.
    pub end_height: f64,
    /// Largest drop below the higher anchor on the static profile, in metres.
    pub max_sag: f64,
    /// Length of the loaded cable in metres.
    pub cable_length: f64,
    /// Highest rider speed along the line in km/h.
    pub max_speed: f64,
    /// Rider speed on arrival at the end anchor in km/h.
    pub finish_speed: f64,
    /// Rider speed at the configured load position in km/h.
    pub speed_at_load: f64,
    /// Cable tension at the start anchor in kg-force.
    pub max_tension_kg: f64,
    /// Breaking strength over maximum tension, when the cable is known.
    pub safety_factor: Option<f64>,
}

impl DesignSummary {
    /// Whether the safety factor, when known, meets the minimum.
    #[must_use]
    pub fn is_safe(&self) -> bool {
        self.safety_factor.map_or(true, is_safe)
    }
}

/// A solved design: the loaded result, the unloaded reference line and the summary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignReport {
    /// Parameters the design was solved for.
    pub parameters: ZiplineParameters,
    /// Solution with the rider on the line.
    pub result: ZiplineResult,
    /// Static profile of the same line without a rider.
    pub no_load_profile: Vec<Point>,
    /// Travel profile lowered by the clearance margin.
    pub clearance_line: Vec<Point>,
    /// Clearance margin in metres.
    pub clearance_margin: f64,
    /// Headline numbers.
    pub summary: DesignSummary,
}

/// Largest vertical distance from the higher anchor down to the profile.
#[must_use]
pub fn max_sag(top_height: f64, points: &[Point]) -> f64 {
    let lowest = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    if lowest.is_finite() {
        top_height - lowest
    } else {
        0.0
    }
}

/// Speed of the travel sample nearest to `x`, or 0 for an empty profile.
#[must_use]
pub fn speed_at(travel_profile: &[Point], x: f64) -> f64 {
    travel_profile
        .iter()
        .min_by(|a, b| (a.x - x).abs().total_cmp(&(b.x - x).abs()))
        .and_then(|p| p.speed)
        .unwrap_or(0.0)
}

/// The travel profile lowered by `margin`, for checking ground clearance.
#[must_use]
pub fn clearance_line(travel_profile: &[Point], margin: f64) -> Vec<Point> {
    travel_profile
        .iter()
        .map(|p| point(p.x, p.y - margin))
        .collect()
}

/// Reduce a result to its headline numbers.
#[must_use]
pub fn summarize(
    parameters: &ZiplineParameters,
    result: &ZiplineResult,
    cable: Option<&CableSpec>,
) -> DesignSummary {
    let top = parameters.start_height.max(parameters.end_height);
    let speeds = result.travel_profile.iter().filter_map(|p| p.speed);
    let max_speed = speeds.fold(0.0, f64::max);
    let finish_speed = result
        .travel_profile
        .last()
        .and_then(|p| p.speed)
        .unwrap_or(0.0);
    let safety_factor = cable.and_then(|cable| cable.safety_factor(result.max_tension_newtons));
    if let Some(factor) = safety_factor.filter(|factor| !is_safe(*factor)) {
        warn!(safety_factor = factor, "cable safety factor below minimum");
    }

    DesignSummary {
        start_height: parameters.start_height,
        end_height: parameters.end_height,
        max_sag: max_sag(top, &result.points),
        cable_length: result.cable_length,
        max_speed,
        finish_speed,
        speed_at_load: speed_at(&result.travel_profile, parameters.load_position_x),
        max_tension_kg: result.max_tension_newtons / GRAVITY,
        safety_factor,
    }
}

/// Solve a design together with its unloaded reference line and clearance line.
///
/// # Errors
///
/// Returns the [`ZiplineError`] raised by either solve.
pub fn design_report(
    parameters: &ZiplineParameters,
    cable: Option<&CableSpec>,
    clearance_margin: f64,
) -> Result<DesignReport, ZiplineError> {
    let result = calculate_zipline_curve(parameters)?;
    let no_load = calculate_zipline_curve(&parameters.unloaded())?;
    let summary = summarize(parameters, &result, cable);
    Ok(DesignReport {
        parameters: *parameters,
        clearance_line: clearance_line(&result.travel_profile, clearance_margin),
        no_load_profile: no_load.points,
        clearance_margin,
        summary,
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn travel() -> Vec<Point> {
        vec![
            point(0.0, 10.0).with_speed(0.0),
            point(10.0, 8.0).with_speed(20.0),
            point(20.0, 7.5).with_speed(25.0),
            point(30.0, 9.0).with_speed(12.0),
        ]
    }

    #[test]
    fn max_sag_measures_from_the_higher_anchor() {
        assert_relative_eq!(max_sag(10.0, &travel()), 2.5);
        assert_eq!(max_sag(10.0, &[]), 0.0);
    }

    #[test]
    fn speed_at_picks_the_nearest_sample() {
        assert_relative_eq!(speed_at(&travel(), 12.0), 20.0);
        assert_relative_eq!(speed_at(&travel(), 16.0), 25.0);
        assert_eq!(speed_at(&[], 16.0), 0.0);
    }

    #[test]
    fn clearance_line_drops_every_sample() {
        let line = clearance_line(&travel(), 1.0);
        assert_eq!(line.len(), 4);
        assert_relative_eq!(line[2].y, 6.5);
        assert!(line.iter().all(|p| p.speed.is_none()));
    }

    #[test]
    fn report_includes_the_unloaded_line() {
        let parameters = ZiplineParameters::default();
        let cable = CableSpec::find("Triniks ZL 12mm");
        let report = design_report(&parameters, cable.as_ref(), 1.0).expect("valid line");

        assert_eq!(report.no_load_profile.len(), report.result.points.len());
        let mid = parameters.num_points / 2;
        assert!(report.no_load_profile[mid].y > report.result.points[mid].y);
        assert!(report.summary.max_speed >= report.summary.finish_speed);
        let factor = report.summary.safety_factor.expect("catalog cable is rated");
        assert!(factor > 0.0);
        assert_eq!(report.summary.is_safe(), factor >= 3.0);
    }
}
