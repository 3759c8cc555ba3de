//! Small helpers over the nalgebra 2D types.
//!
//! nalgebra already supplies dot products, scaling, addition, negation and
//! magnitudes. What it lacks for this kernel is the 2D scalar cross product,
//! tolerance-based equality and a normalisation that refuses the zero vector.

use crate::error::{GeometryError, Result};

use super::{Point2, Vector2, EPSILON};

/// 2D scalar cross product `a.x * b.y - a.y * b.x`.
#[must_use]
pub fn cross(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Squared magnitude, avoiding the square root.
#[must_use]
pub fn square(v: &Vector2) -> f64 {
    v.x * v.x + v.y * v.y
}

/// Returns true if the two vectors differ by less than [`EPSILON`].
#[must_use]
pub fn vectors_coincide(a: &Vector2, b: &Vector2) -> bool {
    (a - b).norm() < EPSILON
}

/// Returns true if the two points are closer than [`EPSILON`].
///
/// This is an engineering tolerance, not an equivalence relation: it is not
/// transitive near the tolerance boundary.
#[must_use]
pub fn points_coincide(a: &Point2, b: &Point2) -> bool {
    (a - b).norm() < EPSILON
}

/// Returns the unit vector in the direction of `v`.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if `v` is shorter than [`EPSILON`].
pub fn normalized(v: &Vector2) -> Result<Vector2> {
    let len = v.norm();
    if len < EPSILON {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(v / len)
}

/// Rotates `v` by -90 degrees: `(x, y) -> (y, -x)`.
#[must_use]
pub fn rotate_cw(v: &Vector2) -> Vector2 {
    Vector2::new(v.y, -v.x)
}

/// Interprets a free vector as a location measured from the origin.
#[must_use]
pub fn as_location(v: Vector2) -> Point2 {
    Point2::from(v)
}

/// Returns the displacement of `p` from the origin.
#[must_use]
pub fn displacement(p: &Point2) -> Vector2 {
    p.coords
}
