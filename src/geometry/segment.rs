use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::intersect_2d::{collinear_overlap, line_line_params};
use crate::math::vector_2d::{cross, points_coincide, square};
use crate::math::{nearly_zero, Point2, Vector2};

use super::arc::Arc;
use super::primitive::Intersection;

/// A directed straight segment from `p1` (parameter 0) to `p2` (parameter 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    p1: Point2,
    p2: Point2,
}

impl LineSegment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(p1: Point2, p2: Point2) -> Self {
        Self { p1, p2 }
    }

    /// Returns the start point (parameter 0).
    #[must_use]
    pub fn p1(&self) -> &Point2 {
        &self.p1
    }

    /// Returns the end point (parameter 1).
    #[must_use]
    pub fn p2(&self) -> &Point2 {
        &self.p2
    }

    /// Returns `p2 - p1`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.p2 - self.p1
    }

    /// Euclidean distance between the endpoints.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// The point halfway between `p1` and `p2`.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        self.param_to_point(0.5)
    }

    /// Returns the same segment traversed from `p2` to `p1`.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.p2, self.p1)
    }

    /// Returns true if the segment is shorter than the global tolerance.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        nearly_zero(self.length())
    }

    /// Evaluates `p1 + t * (p2 - p1)`. Any real `t` is accepted.
    #[must_use]
    pub fn param_to_point(&self, t: f64) -> Point2 {
        self.p1 + t * self.direction()
    }

    /// Projects `pt` onto the infinite line through the segment and returns
    /// its parameter.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] for a zero-length segment.
    pub fn point_to_param(&self, pt: &Point2) -> Result<f64> {
        let r = self.direction();
        let rr = square(&r);
        if nearly_zero(rr) {
            return Err(GeometryError::Degenerate(
                "zero-length segment has no parametrisation".into(),
            )
            .into());
        }
        Ok((pt - self.p1).dot(&r) / rr)
    }

    /// Returns true if the two segments point along the same or opposite
    /// directions.
    #[must_use]
    pub fn parallel(&self, other: &Self) -> bool {
        let x = self.direction();
        let y = other.direction();
        nearly_zero(cross(&x, &y).abs() / (x.norm() * y.norm()))
    }

    /// Returns true if the segments are parallel and lie on the same line.
    #[must_use]
    pub fn colinear(&self, other: &Self) -> bool {
        let p = other.p1;
        self.parallel(other)
            && self
                .point_to_param(&p)
                .is_ok_and(|t| points_coincide(&p, &self.param_to_point(t)))
    }

    /// Returns true if both endpoints coincide within tolerance.
    #[must_use]
    pub fn coincides(&self, other: &Self) -> bool {
        points_coincide(&self.p1, &other.p1) && points_coincide(&self.p2, &other.p2)
    }

    /// Intersects with another segment.
    ///
    /// Crossing segments yield a single point (endpoints count as hits).
    /// Collinear segments that overlap with positive length yield the
    /// overlapping sub-segment, oriented along `self`.
    #[must_use]
    pub fn intersect_segment(&self, other: &Self) -> Intersection {
        if self.is_degenerate() || other.is_degenerate() {
            tracing::debug!(
                segment = %self,
                other = %other,
                "skipping intersection with degenerate segment"
            );
            return Intersection::Empty;
        }
        let s = self.direction();
        let t = other.direction();
        match line_line_params(&self.p1, &s, &other.p1, &t) {
            Some((a, b)) => {
                if (0.0..=1.0).contains(&a) && (0.0..=1.0).contains(&b) {
                    Intersection::Points(vec![self.p1 + a * s])
                } else {
                    Intersection::Empty
                }
            }
            None => match collinear_overlap(&self.p1, &s, &other.p1, &other.p2) {
                Some((left, right)) => {
                    tracing::trace!(left, right, "collinear segment overlap");
                    Intersection::Segment(Self::new(self.p1 + left * s, self.p1 + right * s))
                }
                None => Intersection::Empty,
            },
        }
    }

    /// Intersects with an arc. Same result as [`Arc::intersect_segment`].
    #[must_use]
    pub fn intersect_arc(&self, arc: &Arc) -> Intersection {
        arc.intersect_segment(self)
    }
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LineSegment(({},{}), ({},{}))",
            self.p1.x, self.p1.y, self.p2.x, self.p2.y
        )
    }
}
