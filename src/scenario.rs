use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::info;
use ziplinex::constants::{DEFAULT_NUM_POINTS, DEFAULT_TARGET_SAG_RATIO};
use ziplinex::tension::round_to_rigging_increment;
use ziplinex::{calculate_optimal_tension, CableSpec, Geometry, RiderPose, ZiplineParameters};

/// Cable used when a scenario names neither a cable nor a rope mass.
pub const DEFAULT_CABLE: &str = "Triniks ZL 12mm";

/// A zipline design as written in a scenario file or assembled from flags.
///
/// Every field has a default, so a file only needs to list what differs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Scenario {
    /// Horizontal distance between the anchors in metres.
    pub span: f64,
    /// Elevation of the start anchor in metres.
    pub start_height: f64,
    /// Drop between the anchors as a percentage of the span.
    pub drop_percent: f64,
    /// Elevation of the end anchor in metres; takes precedence over `drop_percent`.
    pub end_height: Option<f64>,
    /// Catalog cable name.
    pub cable: Option<String>,
    /// Cable mass per metre; takes precedence over the catalog mass.
    pub rope_mass_per_meter: Option<f64>,
    /// Pre-tension in kg-force, ignored in auto-tension mode.
    pub tension_kg: f64,
    /// Derive the pre-tension from the target sag.
    pub auto_tension: bool,
    /// Target sag under a 120 kg midspan rider, as a percentage of the span.
    pub target_sag_percent: f64,
    /// Rider weight in kg.
    pub rider_weight: f64,
    /// Trolley and carabiner weight in kg.
    pub equipment_weight: f64,
    /// Rider position as a fraction of the span.
    pub load_position_ratio: f64,
    /// Rider body position.
    pub pose: RiderPose,
    /// Drag area in m²; takes precedence over the pose.
    pub drag_area: Option<f64>,
    /// Air temperature in °C.
    pub temperature: f64,
    /// Number of sample intervals.
    pub points: usize,
    /// Required clearance below the rider's feet in metres.
    pub clearance_margin: f64,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            span: 100.0,
            start_height: 15.0,
            drop_percent: 4.0,
            end_height: None,
            cable: None,
            rope_mass_per_meter: None,
            tension_kg: 800.0,
            auto_tension: false,
            target_sag_percent: DEFAULT_TARGET_SAG_RATIO * 100.0,
            rider_weight: 120.0,
            equipment_weight: 2.0,
            load_position_ratio: 0.5,
            pose: RiderPose::Sitting,
            drag_area: None,
            temperature: 20.0,
            points: DEFAULT_NUM_POINTS,
            clearance_margin: 1.0,
        }
    }
}

/// Engine inputs resolved from a [`Scenario`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedScenario {
    /// Parameters for the engine.
    pub parameters: ZiplineParameters,
    /// Catalog cable, when the scenario names one.
    pub cable: Option<CableSpec>,
    /// Required clearance below the rider's feet in metres.
    pub clearance_margin: f64,
}

impl Scenario {
    /// Read a scenario from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing scenario {}", path.display()))
    }

    /// Turn the scenario into engine parameters.
    pub fn resolve(&self) -> Result<ResolvedScenario> {
        let geometry = match self.end_height {
            Some(end_height) => Geometry::new(self.span, self.start_height, end_height),
            None => Geometry::from_drop_percent(self.span, self.start_height, self.drop_percent),
        }?;

        let cable = match (&self.cable, self.rope_mass_per_meter) {
            (Some(name), _) => match CableSpec::find(name) {
                Some(cable) => Some(cable),
                None => bail!("unknown cable {name:?}; run `ziplinex cables` for the catalog"),
            },
            (None, Some(_)) => None,
            (None, None) => CableSpec::find(DEFAULT_CABLE),
        };
        let rope_mass_per_meter = match (self.rope_mass_per_meter, &cable) {
            (Some(mass), _) => mass,
            (None, Some(cable)) => cable.mass_per_meter,
            (None, None) => bail!("the scenario names neither a cable nor a rope mass"),
        };

        let tension_kg = if self.auto_tension {
            let optimal = calculate_optimal_tension(
                geometry.span,
                rope_mass_per_meter,
                self.target_sag_percent / 100.0,
            )?;
            let rounded = round_to_rigging_increment(optimal);
            info!(tension_kg = rounded, "auto tension");
            rounded
        } else {
            self.tension_kg
        };

        Ok(ResolvedScenario {
            parameters: ZiplineParameters {
                span: geometry.span,
                start_height: geometry.start_height,
                end_height: geometry.end_height,
                rope_mass_per_meter,
                tension_kg,
                load_weight_kg: self.rider_weight,
                load_position_x: self.load_position_ratio * geometry.span,
                temperature_c: self.temperature,
                equipment_weight_kg: self.equipment_weight,
                drag_area: self.drag_area.unwrap_or_else(|| self.pose.drag_area()),
                num_points: self.points,
            },
            cable,
            clearance_margin: self.clearance_margin,
        })
    }
}
