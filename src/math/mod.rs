pub mod angle;
pub mod arc_2d;
pub mod intersect_2d;
pub mod vector_2d;

/// 2D point type. An affine location: points subtract to vectors and
/// translate by vectors, but never add to each other.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type. A free displacement with no location.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const EPSILON: f64 = 1e-8;

/// One full turn in radians.
pub const TWO_PI: f64 = std::f64::consts::TAU;

/// Returns true if `x` is within [`EPSILON`] of zero.
#[must_use]
pub fn nearly_zero(x: f64) -> bool {
    x.abs() < EPSILON
}
