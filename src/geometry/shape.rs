use crate::error::{OperationError, Result};
use crate::math::Point2;

use super::arc::Arc;
use super::primitive::Primitive;
use super::segment::LineSegment;

/// A closed cycle of straight and circular edges.
///
/// Edge `i` runs from point `i` to point `(i + 1) % n`. It is a straight
/// segment unless a signed radius is supplied for it, in which case it is
/// the arc through both points with that radius (see
/// [`Arc::from_endpoints`] for the sign convention).
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    edges: Vec<Primitive>,
}

impl Shape {
    /// Builds a shape from its corner points and optional per-edge radii.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if `radii` does not have one
    /// entry per point, or the arc construction error for any edge whose
    /// radius cannot span its chord.
    pub fn new(points: &[Point2], radii: Option<&[Option<f64>]>) -> Result<Self> {
        let n = points.len();
        if let Some(radii) = radii {
            if radii.len() != n {
                return Err(OperationError::InvalidInput(format!(
                    "expected {n} edge radii, got {}",
                    radii.len()
                ))
                .into());
            }
        }

        let mut edges: Vec<Primitive> = Vec::with_capacity(n);
        for (i, p1) in points.iter().enumerate() {
            let p2 = &points[(i + 1) % n];
            let edge: Primitive = match radii.and_then(|r| r[i]) {
                Some(radius) => Arc::from_endpoints(p1, p2, radius)?.into(),
                None => LineSegment::new(*p1, *p2).into(),
            };
            edges.push(edge);
        }
        tracing::trace!(edges = edges.len(), "built shape");
        Ok(Self { edges })
    }

    /// Builds a closed polygon with straight edges only.
    #[must_use]
    pub fn polygon(points: &[Point2]) -> Self {
        let n = points.len();
        let edges = (0..n)
            .map(|i| Primitive::from(LineSegment::new(points[i], points[(i + 1) % n])))
            .collect();
        Self { edges }
    }

    /// Axis-aligned rectangle around `center`, visiting the corners
    /// lower-left, upper-left, upper-right, lower-right.
    #[must_use]
    pub fn rectangle(center: Point2, half_width: f64, half_height: f64) -> Self {
        let (x1, x2) = (center.x - half_width, center.x + half_width);
        let (y1, y2) = (center.y - half_height, center.y + half_height);
        Self::polygon(&[
            Point2::new(x1, y1),
            Point2::new(x1, y2),
            Point2::new(x2, y2),
            Point2::new(x2, y1),
        ])
    }

    /// Returns the edges in cycle order.
    #[must_use]
    pub fn edges(&self) -> &[Primitive] {
        &self.edges
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the shape has no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
