use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::angle::AngleRange;
use crate::math::arc_2d::{angle_from, arc_from_endpoints, arc_point_at};
use crate::math::intersect_2d::{circle_circle_points, line_circle_params};
use crate::math::vector_2d::points_coincide;
use crate::math::{nearly_zero, Point2};

use super::primitive::Intersection;
use super::segment::LineSegment;

/// A circular arc in the plane.
///
/// Defined by a center, a non-negative radius and a directed [`AngleRange`]
/// measured counter-clockwise from the positive x axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    center: Point2,
    radius: f64,
    angle_range: AngleRange,
}

impl Arc {
    /// Creates a new arc sweeping from `start_angle` to `end_angle` (radians).
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidRadius`] if the radius is negative or
    /// not finite.
    pub fn new(center: Point2, radius: f64, start_angle: f64, end_angle: f64) -> Result<Self> {
        Self::with_range(center, radius, AngleRange::new(start_angle, end_angle))
    }

    /// Creates a new arc from an existing angle range.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidRadius`] if the radius is negative or
    /// not finite.
    pub fn with_range(center: Point2, radius: f64, angle_range: AngleRange) -> Result<Self> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(GeometryError::InvalidRadius(radius).into());
        }
        Ok(Self {
            center,
            radius,
            angle_range,
        })
    }

    /// Builds the arc of radius `|radius|` through `p1` and `p2`.
    ///
    /// A positive radius sweeps clockwise from `p1` to `p2`, a negative one
    /// counter-clockwise.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::RadiusTooSmall`] if the chord `p1 p2` is longer
    /// than the diameter, or [`GeometryError::Degenerate`] if the endpoints
    /// coincide.
    pub fn from_endpoints(p1: &Point2, p2: &Point2, radius: f64) -> Result<Self> {
        let frame = arc_from_endpoints(p1, p2, radius)?;
        Self::new(
            frame.center,
            frame.radius,
            frame.start_angle,
            frame.end_angle,
        )
    }

    /// Returns the center of the arc.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the arc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the directed angle range swept by the arc.
    #[must_use]
    pub fn angle_range(&self) -> &AngleRange {
        &self.angle_range
    }

    /// The point on the supporting circle at `angle`, whether or not the arc covers it.
    #[must_use]
    pub fn point_at_angle(&self, angle: f64) -> Point2 {
        arc_point_at(&self.center, self.radius, angle)
    }

    /// The point at the stored start angle.
    #[must_use]
    pub fn start_point(&self) -> Point2 {
        self.point_at_angle(self.angle_range.start())
    }

    /// The point at the stored finish angle.
    #[must_use]
    pub fn end_point(&self) -> Point2 {
        self.point_at_angle(self.angle_range.finish())
    }

    /// Returns true if the direction of `pt` from the center falls inside
    /// the arc's angle range. The distance from the center is ignored.
    #[must_use]
    pub fn included_angle(&self, pt: &Point2) -> bool {
        self.angle_range.contains(angle_from(&self.center, pt))
    }

    /// Intersects with a straight segment.
    ///
    /// Candidates come from the line/circle quadratic, larger root first;
    /// those off the segment or outside the arc's angle range are dropped.
    #[must_use]
    pub fn intersect_segment(&self, segment: &LineSegment) -> Intersection {
        if segment.is_degenerate() {
            tracing::debug!(%segment, "skipping intersection with degenerate segment");
            return Intersection::Empty;
        }
        let points = line_circle_params(
            segment.p1(),
            &segment.direction(),
            &self.center,
            self.radius,
        )
        .into_iter()
        .filter(|t| (0.0..=1.0).contains(t))
        .map(|t| segment.param_to_point(t))
        .filter(|p| self.included_angle(p))
        .collect();
        Intersection::from_points(points)
    }

    /// Intersects with another arc.
    ///
    /// Arcs on the same circle overlap along an arc; arcs on different
    /// circles meet in at most two points, each of which must fall inside
    /// both angle ranges.
    #[must_use]
    pub fn intersect_arc(&self, other: &Self) -> Intersection {
        if points_coincide(&self.center, &other.center) {
            if !nearly_zero(self.radius - other.radius) {
                return Intersection::Empty;
            }
            return match self.angle_range.intersection(&other.angle_range) {
                Some(angle_range) => Intersection::Arc(Self {
                    center: self.center,
                    radius: self.radius,
                    angle_range,
                }),
                None => Intersection::Empty,
            };
        }

        let points = circle_circle_points(&self.center, self.radius, &other.center, other.radius)
            .into_iter()
            .filter(|p| self.included_angle(p) && other.included_angle(p))
            .collect();
        Intersection::from_points(points)
    }
}

impl fmt::Display for Arc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Arc(({},{}),{},{},{})",
            self.center.x,
            self.center.y,
            self.radius,
            self.angle_range.start().to_degrees(),
            self.angle_range.finish().to_degrees()
        )
    }
}
