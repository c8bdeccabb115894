//! Anchor reactions and peak cable tension.

use serde::{Deserialize, Serialize};

use crate::constants::GRAVITY;
use crate::errors::ZiplineError;
use crate::profile::CableProfile;

/// Force an anchor must exert on the cable, in kg-force.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    /// Horizontal component along the span.
    pub horizontal: f64,
    /// Vertical component, signed with the cable slope at the anchor.
    pub vertical: f64,
}

/// Reactions at both anchors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Reactions {
    /// Reaction at the start anchor.
    pub start: Reaction,
    /// Reaction at the end anchor.
    pub end: Reaction,
}

/// Anchor reactions together with the peak cable tension.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorReactions {
    /// Reactions at both anchors in kg-force.
    pub reactions: Reactions,
    /// Cable tension at the start anchor in newtons.
    pub max_tension_newtons: f64,
}

/// Solve the anchor reactions for a cable with its point load at `load_x`.
///
/// The end slopes combine the chord gradient with the slope added by the cable
/// weight and by the point load. Only vertical loads act on the cable, so the
/// horizontal tension is the same at both anchors. The peak tension is evaluated
/// on the start side.
///
/// # Errors
///
/// Returns [`ZiplineError::InvalidLoadPosition`] when `load_x` lies outside the span.
pub fn solve_reactions(
    cable: &CableProfile,
    load_x: f64,
) -> Result<AnchorReactions, ZiplineError> {
    let geometry = cable.geometry();
    let span = geometry.span;
    if !(0.0..=span).contains(&load_x) {
        return Err(ZiplineError::InvalidLoadPosition {
            position: load_x,
            span,
        });
    }
    let t = cable.tension_newtons();
    let q = cable.rope_weight();
    let p = cable.point_load();
    let slope = geometry.slope();

    let rope_slope = q * span / (2.0 * t);
    let angle_start = (slope + rope_slope + p * (span - load_x) / (t * span)).atan();
    let angle_end = (slope - rope_slope - p * load_x / (t * span)).atan();

    let horizontal = t / GRAVITY;
    Ok(AnchorReactions {
        reactions: Reactions {
            start: Reaction {
                horizontal,
                vertical: t * angle_start.tan() / GRAVITY,
            },
            end: Reaction {
                horizontal,
                vertical: t * angle_end.tan() / GRAVITY,
            },
        },
        max_tension_newtons: t / angle_start.cos(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Geometry;
    use approx::assert_relative_eq;

    #[test]
    fn level_line_with_midspan_load_is_balanced() {
        let geometry = Geometry::new(100.0, 10.0, 10.0).expect("valid span");
        let cable = CableProfile::new(geometry, 9_810.0, 1.0, 100.0).expect("valid cable");
        let solved = solve_reactions(&cable, 50.0).expect("load on span");
        let Reactions { start, end } = solved.reactions;

        assert_relative_eq!(start.horizontal, 1_000.0);
        assert_relative_eq!(end.horizontal, 1_000.0);
        // Half of the cable weight plus half of the load at each anchor.
        assert_relative_eq!(start.vertical, 50.0 + 50.0, epsilon = 1.0e-9);
        assert_relative_eq!(end.vertical, -100.0, epsilon = 1.0e-9);
    }

    #[test]
    fn max_tension_uses_the_start_angle() {
        let geometry = Geometry::new(100.0, 15.0, 11.0).expect("valid span");
        let cable = CableProfile::new(geometry, 7_848.0, 0.86, 124.0).expect("valid cable");
        let solved = solve_reactions(&cable, 20.0).expect("load on span");
        let start = solved.reactions.start;
        let expected = (start.horizontal.powi(2) + start.vertical.powi(2)).sqrt() * GRAVITY;
        assert_relative_eq!(solved.max_tension_newtons, expected, epsilon = 1.0e-6);
        assert!(solved.max_tension_newtons > cable.tension_newtons());
    }

    #[test]
    fn load_outside_the_span_is_rejected() {
        let geometry = Geometry::new(50.0, 5.0, 4.0).expect("valid span");
        let cable = CableProfile::new(geometry, 5_000.0, 0.61, 0.0).expect("valid cable");
        assert!(matches!(
            solve_reactions(&cable, -1.0),
            Err(ZiplineError::InvalidLoadPosition { .. })
        ));
    }
}
