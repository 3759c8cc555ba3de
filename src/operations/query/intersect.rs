use crate::geometry::{Intersection, Shape};

/// A non-empty intersection between one edge of each shape.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeIntersection {
    /// Index of the edge in the first shape.
    pub edge_a: usize,
    /// Index of the edge in the second shape.
    pub edge_b: usize,
    /// What the two edges have in common.
    pub result: Intersection,
}

/// Computes intersections between every edge of two shapes.
pub struct ShapeIntersect<'a> {
    shape_a: &'a Shape,
    shape_b: &'a Shape,
}

impl<'a> ShapeIntersect<'a> {
    /// Creates a new `ShapeIntersect` query.
    #[must_use]
    pub fn new(shape_a: &'a Shape, shape_b: &'a Shape) -> Self {
        Self { shape_a, shape_b }
    }

    /// Executes the query, returning the non-empty edge intersections
    /// ordered by edge of the first shape, then edge of the second.
    #[must_use]
    pub fn execute(&self) -> Vec<EdgeIntersection> {
        let mut hits = Vec::new();
        for (edge_a, a) in self.shape_a.edges().iter().enumerate() {
            for (edge_b, b) in self.shape_b.edges().iter().enumerate() {
                let result = a.intersect(b);
                if !result.is_empty() {
                    hits.push(EdgeIntersection {
                        edge_a,
                        edge_b,
                        result,
                    });
                }
            }
        }
        tracing::trace!(
            edges_a = self.shape_a.len(),
            edges_b = self.shape_b.len(),
            hits = hits.len(),
            "shape intersection query"
        );
        hits
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::Point2;

    fn pt(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn overlapping_rectangles() {
        let a = Shape::rectangle(pt(0.0, 0.0), 1.0, 1.0);
        let b = Shape::rectangle(pt(1.0, 1.0), 1.0, 1.0);
        let hits = ShapeIntersect::new(&a, &b).execute();
        // a's top edge (y = 1) meets b's left edge (x = 0); a's right edge
        // (x = 1) meets b's bottom edge (y = 0).
        assert_eq!(hits.len(), 2);
        assert_eq!((hits[0].edge_a, hits[0].edge_b), (1, 0));
        assert_relative_eq!(hits[0].result.points()[0], pt(0.0, 1.0), epsilon = 1e-12);
        assert_eq!((hits[1].edge_a, hits[1].edge_b), (2, 3));
        assert_relative_eq!(hits[1].result.points()[0], pt(1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn disjoint_shapes() {
        let a = Shape::rectangle(pt(0.0, 0.0), 1.0, 1.0);
        let b = Shape::rectangle(pt(10.0, 0.0), 1.0, 1.0);
        assert!(ShapeIntersect::new(&a, &b).execute().is_empty());
    }

    #[test]
    fn rounded_edge_against_rectangle() {
        // Square with a bulging top edge reaching up to y = 3.
        let pts = [pt(0.0, 0.0), pt(0.0, 2.0), pt(2.0, 2.0), pt(2.0, 0.0)];
        let radii = [None, Some(1.0), None, None];
        let rounded = Shape::new(&pts, Some(&radii[..])).unwrap();
        let bar = Shape::rectangle(pt(1.0, 2.5), 5.0, 0.25);

        let hits = ShapeIntersect::new(&rounded, &bar).execute();
        let on_arc: Vec<_> = hits.iter().filter(|h| h.edge_a == 1).collect();
        assert_eq!(on_arc.len(), 2);
        for hit in on_arc {
            assert_eq!(hit.result.points().len(), 2);
            for p in hit.result.points() {
                assert_relative_eq!((p - pt(1.0, 2.0)).norm(), 1.0, epsilon = 1e-9);
            }
        }
    }
}
