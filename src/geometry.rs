//! Fundamental geometric types for zipline modelling.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::errors::ZiplineError;

/// Anchor layout of a single-span line, measured in metres.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Geometry {
    /// Horizontal distance between the anchors.
    pub span: f64,
    /// Elevation of the start (upper) anchor.
    pub start_height: f64,
    /// Elevation of the end anchor.
    pub end_height: f64,
}

impl Geometry {
    /// Create a [`Geometry`], rejecting spans that are not strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`ZiplineError::InvalidGeometry`] when `span` is zero, negative or not finite.
    ///
    /// # Examples
    /// ```
    /// use ziplinex::Geometry;
    ///
    /// let geometry = Geometry::new(100.0, 15.0, 11.0).expect("valid span");
    /// assert_eq!(geometry.drop(), 4.0);
    /// ```
    pub fn new(span: f64, start_height: f64, end_height: f64) -> Result<Self, ZiplineError> {
        let geometry = Self {
            span,
            start_height,
            end_height,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Create a [`Geometry`] from the start height and the drop as a percentage of the span.
    ///
    /// # Errors
    ///
    /// Returns [`ZiplineError::InvalidGeometry`] when `span` is not strictly positive.
    pub fn from_drop_percent(
        span: f64,
        start_height: f64,
        drop_percent: f64,
    ) -> Result<Self, ZiplineError> {
        Self::new(span, start_height, start_height - span * drop_percent / 100.0)
    }

    /// Check that the span is usable as a divisor.
    ///
    /// # Errors
    ///
    /// Returns [`ZiplineError::InvalidGeometry`] when `span` is zero, negative or not finite.
    pub fn validate(&self) -> Result<(), ZiplineError> {
        if self.span > 0.0 && self.span.is_finite() {
            Ok(())
        } else {
            Err(ZiplineError::InvalidGeometry { span: self.span })
        }
    }

    /// Height difference between the anchors, positive when the line descends.
    #[must_use]
    pub fn drop(&self) -> f64 {
        self.start_height - self.end_height
    }

    /// Gradient of the unloaded chord, positive when the line descends.
    #[must_use]
    pub fn slope(&self) -> f64 {
        self.drop() / self.span
    }

    /// Height of the straight chord between the anchors at `x`.
    #[must_use]
    pub fn chord_height(&self, x: f64) -> f64 {
        self.start_height - (x / self.span) * self.drop()
    }

    /// The higher of the two anchor elevations.
    #[must_use]
    pub fn top_height(&self) -> f64 {
        self.start_height.max(self.end_height)
    }
}

/// A sampled location on a cable profile.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal distance from the start anchor in metres.
    pub x: f64,
    /// Elevation of the cable in metres.
    pub y: f64,
    /// Rider speed at this location in km/h, present on travel profiles only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

impl Point {
    /// Create a [`Point`] without a speed.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, speed: None }
    }

    /// Return a copy of this point carrying the supplied speed in km/h.
    #[must_use]
    pub const fn with_speed(self, speed: f64) -> Self {
        Self {
            speed: Some(speed),
            ..self
        }
    }

    /// Convert the point into an algebraic vector, dropping the speed.
    #[must_use]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<Vector2<f64>> for Point {
    fn from(value: Vector2<f64>) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<Point> for Vector2<f64> {
    fn from(value: Point) -> Self {
        value.to_vector()
    }
}

/// Convenience helper for creating [`Point`] instances.
///
/// # Examples
/// ```
/// use ziplinex::point;
///
/// let anchor = point(0.0, 15.0);
/// assert_eq!(anchor.y, 15.0);
/// assert!(anchor.speed.is_none());
/// ```
#[must_use]
pub const fn point(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Length of the polyline through `points`, summed segment by segment.
///
/// # Examples
/// ```
/// use ziplinex::{arc_length, point};
///
/// let length = arc_length(&[point(0.0, 0.0), point(3.0, 4.0)]);
/// assert_eq!(length, 5.0);
/// ```
#[must_use]
pub fn arc_length(points: &[Point]) -> f64 {
    points
        .windows(2)
        .map(|pair| (pair[1].to_vector() - pair[0].to_vector()).norm())
        .sum()
}
