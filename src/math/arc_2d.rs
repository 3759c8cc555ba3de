/// 2D arc math utilities.
///
/// Signed radius convention for arcs built from two endpoints:
/// - `radius > 0`: the arc runs clockwise from the first endpoint to the second
/// - `radius < 0`: the arc runs counter-clockwise
/// - `|radius| = |chord| / 2`: semicircle
use crate::error::{GeometryError, Result};

use super::vector_2d::{cross, normalized, rotate_cw, square};
use super::{Point2, Vector2, TWO_PI};

/// Centre and endpoint angles of an arc through two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcFrame {
    pub center: Point2,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// Computes the centre of the arc of radius `|radius|` through `p1` and `p2`
/// and the angles of both endpoints seen from it.
///
/// The angles are adjusted by whole turns so that `end_angle <= start_angle`
/// for a positive radius and `start_angle <= end_angle` for a negative one.
///
/// # Errors
///
/// Returns [`GeometryError::RadiusTooSmall`] if the chord is longer than the
/// diameter, or [`GeometryError::Degenerate`] if the endpoints coincide.
pub fn arc_from_endpoints(p1: &Point2, p2: &Point2, radius: f64) -> Result<ArcFrame> {
    let x = p2 - p1;
    let chord_sq = square(&x);
    if radius * radius < 0.25 * chord_sq {
        tracing::debug!(radius, chord = chord_sq.sqrt(), "arc radius too small for chord");
        return Err(GeometryError::RadiusTooSmall {
            radius,
            chord: chord_sq.sqrt(),
        }
        .into());
    }

    let mut wn = normalized(&rotate_cw(&x))
        .map_err(|_| GeometryError::Degenerate("arc endpoints coincide".into()))?;
    if radius * cross(&wn, &x) < 0.0 {
        wn = -wn;
    }

    // Distance from the chord midpoint to the centre.
    let w = (radius * radius - 0.25 * chord_sq).sqrt();
    let center = p1 + 0.5 * x + w * wn;

    let mut start_angle = angle_from(&center, p1);
    let mut end_angle = angle_from(&center, p2);
    if radius < 0.0 {
        while end_angle < start_angle {
            end_angle += TWO_PI;
        }
    } else {
        while start_angle < end_angle {
            start_angle += TWO_PI;
        }
    }

    Ok(ArcFrame {
        center,
        radius: radius.abs(),
        start_angle,
        end_angle,
    })
}

/// Direction of `p` seen from `center`, via `atan2`.
#[must_use]
pub fn angle_from(center: &Point2, p: &Point2) -> f64 {
    let r = p - center;
    r.y.atan2(r.x)
}

/// Evaluates the point at `angle` on the circle around `center`.
#[must_use]
pub fn arc_point_at(center: &Point2, radius: f64, angle: f64) -> Point2 {
    center + radius * Vector2::new(angle.cos(), angle.sin())
}
