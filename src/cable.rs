//! Cable catalog and breaking-strength checks.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uom::si::f64::Force;
use uom::si::force::{kilonewton, newton};

use crate::constants::MIN_SAFETY_FACTOR;

/// Steel grade whose breaking strength is quoted by default, in N/mm².
pub const PREFERRED_GRADE: u32 = 1770;

/// A wire rope as listed by its manufacturer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CableSpec {
    /// Catalog name.
    pub name: String,
    /// Mass per metre in kg/m.
    pub mass_per_meter: f64,
    /// Minimum breaking strength in kN for each wire grade in N/mm².
    #[serde(default)]
    pub breaking_strength_by_grade: BTreeMap<u32, f64>,
}

impl CableSpec {
    /// Create a cable from its name, mass per metre and `(grade, kN)` pairs.
    #[must_use]
    pub fn new(name: &str, mass_per_meter: f64, strengths: &[(u32, f64)]) -> Self {
        Self {
            name: name.to_owned(),
            mass_per_meter,
            breaking_strength_by_grade: strengths.iter().copied().collect(),
        }
    }

    /// Built-in catalog of common zipline ropes.
    #[must_use]
    pub fn catalog() -> Vec<CableSpec> {
        vec![
            CableSpec::new(
                "Triniks ZL 10mm",
                0.61,
                &[(1570, 106.0), (1770, 112.0), (1960, 120.0)],
            ),
            CableSpec::new(
                "Triniks ZL 11mm",
                0.72,
                &[(1570, 123.0), (1770, 131.0), (1960, 139.0)],
            ),
            CableSpec::new(
                "Triniks ZL 12mm",
                0.86,
                &[(1570, 147.0), (1770, 156.0), (1960, 165.0)],
            ),
            CableSpec::new(
                "Triniks ZL 16mm",
                1.54,
                &[(1570, 270.0), (1770, 287.0), (1960, 303.0)],
            ),
            CableSpec::new("Steel 12mm CDCI", 0.61, &[(1770, 92.5)]),
            CableSpec::new("Steel 14mm CDCI", 0.84, &[(1770, 141.0)]),
        ]
    }

    /// Look up a catalog cable by name, ignoring case.
    ///
    /// # Examples
    /// ```
    /// use ziplinex::CableSpec;
    ///
    /// let cable = CableSpec::find("triniks zl 12mm").expect("listed cable");
    /// assert_eq!(cable.mass_per_meter, 0.86);
    /// ```
    #[must_use]
    pub fn find(name: &str) -> Option<CableSpec> {
        Self::catalog()
            .into_iter()
            .find(|cable| cable.name.eq_ignore_ascii_case(name))
    }

    /// Breaking strength in kN used for safety checks.
    ///
    /// Uses the 1770 grade when listed, otherwise the lowest listed grade.
    #[must_use]
    pub fn rated_strength_kn(&self) -> Option<f64> {
        self.breaking_strength_by_grade
            .get(&PREFERRED_GRADE)
            .or_else(|| self.breaking_strength_by_grade.values().next())
            .copied()
    }

    /// Ratio of the rated breaking strength to `max_tension_newtons`.
    #[must_use]
    pub fn safety_factor(&self, max_tension_newtons: f64) -> Option<f64> {
        let strength = Force::new::<kilonewton>(self.rated_strength_kn()?);
        if max_tension_newtons <= 0.0 {
            return Some(f64::INFINITY);
        }
        Some(strength.get::<newton>() / max_tension_newtons)
    }
}

/// Whether a safety factor meets the minimum of 3.
#[must_use]
pub fn is_safe(safety_factor: f64) -> bool {
    safety_factor >= MIN_SAFETY_FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn catalog_lists_six_cables() {
        let catalog = CableSpec::catalog();
        assert_eq!(catalog.len(), 6);
        assert!(catalog.iter().all(|cable| cable.rated_strength_kn().is_some()));
    }

    #[test]
    fn prefers_grade_1770() {
        let cable = CableSpec::find("Triniks ZL 16mm").expect("listed cable");
        assert_relative_eq!(cable.rated_strength_kn().expect("rated"), 287.0);
    }

    #[test]
    fn falls_back_to_first_listed_grade() {
        let cable = CableSpec::new("custom", 0.5, &[(1960, 80.0), (1570, 70.0)]);
        assert_relative_eq!(cable.rated_strength_kn().expect("rated"), 70.0);
        let bare = CableSpec::new("bare", 0.5, &[]);
        assert_eq!(bare.rated_strength_kn(), None);
        assert_eq!(bare.safety_factor(10_000.0), None);
    }

    #[test]
    fn safety_factor_compares_strength_to_tension() {
        let cable = CableSpec::find("Steel 14mm CDCI").expect("listed cable");
        let factor = cable.safety_factor(47_000.0).expect("rated");
        assert_relative_eq!(factor, 3.0, epsilon = 1.0e-9);
        assert!(is_safe(factor));
        assert!(!is_safe(2.9));
    }
}
