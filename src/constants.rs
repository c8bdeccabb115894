//! Physical constants and calibrated defaults used by the zipline engine.

/// Gravitational acceleration in m/s², as used by riggers for kg-force conversions.
pub const GRAVITY: f64 = 9.81;

/// Linear thermal expansion coefficient of steel cable, per °C.
pub const STEEL_EXPANSION_COEFFICIENT: f64 = 12.0e-6;

/// Temperature at which the nominal tension is specified, in °C.
pub const REFERENCE_TEMPERATURE_C: f64 = 20.0;

/// Span sensitivity of the thermal tension correction.
///
/// Calibrated against the reference design rather than derived from the cable
/// geometry, so the correction reads `1 - α·ΔT·100`.
pub const THERMAL_SPAN_SENSITIVITY: f64 = 100.0;

/// Air density at sea level (kg/m³).
pub const AIR_DENSITY: f64 = 1.225;

/// Rolling friction coefficient of a trolley pulley on steel cable.
pub const ROLLING_FRICTION_COEFFICIENT: f64 = 0.02;

/// Point load used when recommending a pre-tension, in kg.
pub const REFERENCE_LOAD_KG: f64 = 120.0;

/// Sag-to-span ratio targeted by the auto-tension mode.
pub const DEFAULT_TARGET_SAG_RATIO: f64 = 0.02;

/// Tension recommendations are rounded to this rigging increment, in kg.
pub const TENSION_ROUNDING_KG: f64 = 10.0;

/// Number of sample intervals along the span (101 samples).
pub const DEFAULT_NUM_POINTS: usize = 100;

/// Minimum acceptable ratio of breaking strength to maximum cable tension.
pub const MIN_SAFETY_FACTOR: f64 = 3.0;
