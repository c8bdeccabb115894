//! Rider load and aerodynamic presets.

use serde::{Deserialize, Serialize};

use crate::errors::{LoadError, ZiplineError};

/// Body position of the rider, summarised by its drag area `Cd·A`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiderPose {
    /// Head first, arms along the body.
    Superman,
    /// Seated in the harness.
    #[default]
    Sitting,
    /// Arms and legs spread out.
    Star,
}

impl RiderPose {
    /// All presets, from least to most drag.
    pub const ALL: [RiderPose; 3] = [RiderPose::Superman, RiderPose::Sitting, RiderPose::Star];

    /// Effective drag area in m².
    #[must_use]
    pub const fn drag_area(self) -> f64 {
        match self {
            RiderPose::Superman => 0.15,
            RiderPose::Sitting => 0.50,
            RiderPose::Star => 0.90,
        }
    }
}

/// The point load travelling on the line.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadState {
    /// Rider weight in kg.
    pub rider_weight: f64,
    /// Trolley and carabiner weight in kg, carried only when a rider is present.
    pub equipment_weight: f64,
    /// Distance of the load from the start anchor in metres.
    pub load_position: f64,
    /// Effective drag area `Cd·A` in m².
    pub drag_area: f64,
}

impl LoadState {
    /// Total point load in kg.
    ///
    /// # Examples
    /// ```
    /// use ziplinex::LoadState;
    ///
    /// let rider = LoadState { rider_weight: 80.0, equipment_weight: 2.0, load_position: 10.0, drag_area: 0.5 };
    /// assert_eq!(rider.total_load_kg(), 82.0);
    ///
    /// let empty = LoadState { rider_weight: 0.0, ..rider };
    /// assert_eq!(empty.total_load_kg(), 0.0);
    /// ```
    #[must_use]
    pub fn total_load_kg(&self) -> f64 {
        if self.rider_weight > 0.0 {
            self.rider_weight + self.equipment_weight
        } else {
            self.rider_weight
        }
    }

    /// Check that the weights are not negative and the drag area is positive.
    ///
    /// # Errors
    ///
    /// Returns [`ZiplineError::InvalidLoad`] describing the first offending quantity.
    pub fn validate(&self) -> Result<(), ZiplineError> {
        if self.rider_weight < 0.0 || self.rider_weight.is_nan() {
            return Err(LoadError::NegativeRiderWeight(self.rider_weight).into());
        }
        if self.equipment_weight < 0.0 || self.equipment_weight.is_nan() {
            return Err(LoadError::NegativeEquipmentWeight(self.equipment_weight).into());
        }
        if self.drag_area <= 0.0 || self.drag_area.is_nan() {
            return Err(LoadError::NonPositiveDragArea(self.drag_area).into());
        }
        Ok(())
    }
}
