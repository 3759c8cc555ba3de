use std::fmt;

use crate::error::{NoodleError, OperationError};
use crate::math::Point2;

use super::arc::Arc;
use super::segment::LineSegment;

/// A drawable edge: either a straight segment or a circular arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Segment(LineSegment),
    Arc(Arc),
}

impl Primitive {
    /// Intersects two primitives.
    ///
    /// Total over all four variant pairs; the mixed cases are symmetric.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Intersection {
        match (self, other) {
            (Self::Segment(a), Self::Segment(b)) => a.intersect_segment(b),
            (Self::Segment(s), Self::Arc(a)) | (Self::Arc(a), Self::Segment(s)) => {
                a.intersect_segment(s)
            }
            (Self::Arc(a), Self::Arc(b)) => a.intersect_arc(b),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Segment(_) => "segment",
            Self::Arc(_) => "arc",
        }
    }
}

impl From<LineSegment> for Primitive {
    fn from(segment: LineSegment) -> Self {
        Self::Segment(segment)
    }
}

impl From<Arc> for Primitive {
    fn from(arc: Arc) -> Self {
        Self::Arc(arc)
    }
}

impl TryFrom<Primitive> for LineSegment {
    type Error = NoodleError;

    fn try_from(primitive: Primitive) -> Result<Self, Self::Error> {
        match primitive {
            Primitive::Segment(segment) => Ok(segment),
            Primitive::Arc(_) => Err(type_mismatch("segment", &primitive)),
        }
    }
}

impl TryFrom<Primitive> for Arc {
    type Error = NoodleError;

    fn try_from(primitive: Primitive) -> Result<Self, Self::Error> {
        match primitive {
            Primitive::Arc(arc) => Ok(arc),
            Primitive::Segment(_) => Err(type_mismatch("arc", &primitive)),
        }
    }
}

fn type_mismatch(expected: &'static str, found: &Primitive) -> NoodleError {
    OperationError::TypeMismatch {
        expected,
        found: format!("{} {found}", found.kind()),
    }
    .into()
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Segment(segment) => fmt::Display::fmt(segment, f),
            Self::Arc(arc) => fmt::Display::fmt(arc, f),
        }
    }
}

/// Result of intersecting two primitives.
#[derive(Debug, Clone, PartialEq)]
pub enum Intersection {
    /// The primitives do not meet.
    Empty,
    /// One or more isolated points, never empty.
    Points(Vec<Point2>),
    /// Collinear segments overlapping along a segment.
    Segment(LineSegment),
    /// Arcs on the same circle overlapping along an arc.
    Arc(Arc),
}

impl Intersection {
    /// Wraps a list of points, mapping an empty list to [`Intersection::Empty`].
    #[must_use]
    pub fn from_points(points: Vec<Point2>) -> Self {
        if points.is_empty() {
            Self::Empty
        } else {
            Self::Points(points)
        }
    }

    /// Returns true for [`Intersection::Empty`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the isolated intersection points, or an empty slice for the
    /// other variants.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        match self {
            Self::Points(points) => points,
            _ => &[],
        }
    }
}
