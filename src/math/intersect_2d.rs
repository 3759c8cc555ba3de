use super::vector_2d::{cross, square};
use super::{nearly_zero, Point2, Vector2, EPSILON};

/// Parametric 2D line-line intersection by Cramer's rule.
///
/// Given lines `p + a * s` and `q + b * t`, returns `(a, b)` unless the
/// determinant `s.y * t.x - s.x * t.y` is nearly zero.
#[must_use]
pub fn line_line_params(p: &Point2, s: &Vector2, q: &Point2, t: &Vector2) -> Option<(f64, f64)> {
    let denom = s.y * t.x - s.x * t.y;
    if nearly_zero(denom) {
        return None;
    }
    let dx = q.x - p.x;
    let dy = q.y - p.y;
    let a = (t.x * dy - t.y * dx) / denom;
    let b = (s.x * dy - s.y * dx) / denom;
    Some((a, b))
}

/// Overlap of two parallel segments, as a parameter interval along the first.
///
/// The first segment is `p + a * s` for `a` in `[0, 1]`; the second runs from
/// `q1` to `q2`. Returns `Some((left, right))` with `left < right` when the
/// second segment lies on the same line and their parameter intervals
/// overlap with positive length.
#[must_use]
pub fn collinear_overlap(p: &Point2, s: &Vector2, q1: &Point2, q2: &Point2) -> Option<(f64, f64)> {
    let ss = square(s);
    if nearly_zero(ss) {
        return None;
    }
    // Perpendicular distance of q1 from the line through p.
    if !nearly_zero(cross(s, &(q1 - p)) / ss.sqrt()) {
        return None;
    }
    let mut lo = (q1 - p).dot(s) / ss;
    let mut hi = (q2 - p).dot(s) / ss;
    if hi < lo {
        std::mem::swap(&mut lo, &mut hi);
    }
    let left = lo.max(0.0);
    let right = hi.min(1.0);
    (left < right).then_some((left, right))
}

/// Roots `t` of `|p + t * d - center| = radius`.
///
/// Returns no roots if the line misses the circle, one root if it is tangent
/// (roots nearly coincide in parameter space), otherwise two roots with the
/// larger one first.
/// Roots are not clipped to the segment range.
#[must_use]
pub fn line_circle_params(p: &Point2, d: &Vector2, center: &Point2, radius: f64) -> Vec<f64> {
    let a = square(d);
    if nearly_zero(a) {
        return Vec::new();
    }
    let f = p - center;
    let b = 2.0 * f.dot(d);
    let c = square(&f) - radius * radius;
    let det = b * b - 4.0 * a * c;

    // det / 4a² is the squared half-gap between the roots, independent of scale.
    if nearly_zero(det / (4.0 * a * a)) {
        vec![-b / (2.0 * a)]
    } else if det < 0.0 {
        Vec::new()
    } else {
        let root = det.sqrt();
        vec![(-b + root) / (2.0 * a), (-b - root) / (2.0 * a)]
    }
}

/// Intersection points of two circles with distinct centres.
///
/// Works in a frame scaled, rotated and translated so that the first centre
/// sits at `(0, 0)` and the second at `(1, 0)`. The `+v` candidate comes
/// first; the `-v` candidate is dropped when the circles are tangent.
#[must_use]
pub fn circle_circle_points(c1: &Point2, radius1: f64, c2: &Point2, radius2: f64) -> Vec<Point2> {
    let delta = c2 - c1;
    let dist = delta.norm();
    if nearly_zero(dist) {
        return Vec::new();
    }
    let k = 1.0 / dist;
    let theta = delta.y.atan2(delta.x);
    let r1 = k * radius1;
    let r2 = k * radius2;

    let u = (r1 * r1 + 1.0 - r2 * r2) / 2.0;
    if r1.abs() < u.abs() - EPSILON {
        return Vec::new();
    }
    let v = (r1 * r1 - u * u).max(0.0).sqrt();
    let (sin, cos) = theta.sin_cos();

    let mut points = vec![Point2::new(
        c1.x + (u * cos - v * sin) / k,
        c1.y + (v * cos + u * sin) / k,
    )];
    // External (u == r1) or internal (u == -r1) tangency: one point only.
    if !nearly_zero(r1 - u) && !nearly_zero(r1 + u) {
        points.push(Point2::new(
            c1.x + (u * cos + v * sin) / k,
            c1.y + (-v * cos + u * sin) / k,
        ));
    }
    points
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn line_line_perpendicular() {
        let (a, b) = line_line_params(
            &Point2::new(-5.0, 3.0),
            &Vector2::new(10.0, 0.0),
            &Point2::new(-3.0, -1.0),
            &Vector2::new(0.0, 6.0),
        )
        .unwrap();
        assert_relative_eq!(a, 0.2, epsilon = TOL);
        assert_relative_eq!(b, 2.0 / 3.0, epsilon = TOL);
    }

    #[test]
    fn line_line_parallel_returns_none() {
        let res = line_line_params(
            &Point2::new(0.0, 0.0),
            &Vector2::new(1.0, 0.0),
            &Point2::new(0.0, 1.0),
            &Vector2::new(2.0, 0.0),
        );
        assert!(res.is_none());
    }

    #[test]
    fn overlap_clipped_to_first_segment() {
        let (l, r) = collinear_overlap(
            &Point2::new(-5.0, 3.0),
            &Vector2::new(10.0, 0.0),
            &Point2::new(3.0, 3.0),
            &Point2::new(7.0, 3.0),
        )
        .unwrap();
        assert_relative_eq!(l, 0.8, epsilon = TOL);
        assert_relative_eq!(r, 1.0, epsilon = TOL);
    }

    #[test]
    fn overlap_orders_reversed_second_segment() {
        let (l, r) = collinear_overlap(
            &Point2::new(-5.0, 3.0),
            &Vector2::new(10.0, 0.0),
            &Point2::new(3.0, 3.0),
            &Point2::new(-3.0, 3.0),
        )
        .unwrap();
        assert_relative_eq!(l, 0.2, epsilon = TOL);
        assert_relative_eq!(r, 0.8, epsilon = TOL);
    }

    #[test]
    fn overlap_touching_endpoints_is_empty() {
        let res = collinear_overlap(
            &Point2::new(0.0, 0.0),
            &Vector2::new(1.0, 0.0),
            &Point2::new(1.0, 0.0),
            &Point2::new(2.0, 0.0),
        );
        assert!(res.is_none());
    }

    #[test]
    fn overlap_offset_line_is_empty() {
        let res = collinear_overlap(
            &Point2::new(1.0, 0.0),
            &Vector2::new(1.0, 0.0),
            &Point2::new(1.0, 1.0),
            &Point2::new(2.0, 1.0),
        );
        assert!(res.is_none());
    }

    #[test]
    fn line_circle_two_roots_larger_first() {
        let roots = line_circle_params(
            &Point2::new(-2.0, 0.0),
            &Vector2::new(4.0, 0.0),
            &Point2::new(0.0, 0.0),
            1.0,
        );
        assert_eq!(roots.len(), 2);
        assert_relative_eq!(roots[0], 0.75, epsilon = TOL);
        assert_relative_eq!(roots[1], 0.25, epsilon = TOL);
    }

    #[test]
    fn line_circle_tangent() {
        let roots = line_circle_params(
            &Point2::new(-1.0, 1.0),
            &Vector2::new(2.0, 0.0),
            &Point2::new(0.0, 0.0),
            1.0,
        );
        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots[0], 0.5, epsilon = TOL);
    }

    #[test]
    fn line_circle_small_scale_secant() {
        let roots = line_circle_params(
            &Point2::new(-0.004, 0.0),
            &Vector2::new(0.008, 0.0),
            &Point2::new(0.0, 0.0),
            0.002,
        );
        assert_eq!(roots.len(), 2);
        assert_relative_eq!(roots[0], 0.75, epsilon = TOL);
        assert_relative_eq!(roots[1], 0.25, epsilon = TOL);
    }

    #[test]
    fn line_circle_miss() {
        let roots = line_circle_params(
            &Point2::new(2.0, 1.0),
            &Vector2::new(0.0, -2.0),
            &Point2::new(0.0, 0.0),
            1.0,
        );
        assert!(roots.is_empty());
    }

    #[test]
    fn circles_two_points() {
        let pts = circle_circle_points(&Point2::new(0.0, 0.0), 1.0, &Point2::new(1.0, 0.0), 1.0);
        let h = 3f64.sqrt() / 2.0;
        assert_eq!(pts.len(), 2);
        assert_relative_eq!(pts[0], Point2::new(0.5, h), epsilon = TOL);
        assert_relative_eq!(pts[1], Point2::new(0.5, -h), epsilon = TOL);
    }

    #[test]
    fn circles_tangent_single_point() {
        let pts = circle_circle_points(&Point2::new(0.0, 0.0), 1.0, &Point2::new(2.0, 0.0), 1.0);
        assert_eq!(pts.len(), 1);
        assert_relative_eq!(pts[0], Point2::new(1.0, 0.0), epsilon = TOL);
    }

    #[test]
    fn circles_tangent_off_axis_single_point() {
        let c1 = Point2::new(0.3, -0.7);
        let (r1, r2) = (1.5, 0.5);
        for i in 0..360 {
            let phi = f64::from(i).to_radians() + 0.123;
            let dir = Vector2::new(phi.cos(), phi.sin());
            let c2 = c1 + (r1 + r2) * dir;
            let pts = circle_circle_points(&c1, r1, &c2, r2);
            assert_eq!(pts.len(), 1, "phi = {phi}, pts = {pts:?}");
            assert_relative_eq!(pts[0], c1 + r1 * dir, epsilon = 1e-6);
        }
    }

    #[test]
    fn circles_internally_tangent_single_point() {
        let pts = circle_circle_points(&Point2::new(0.0, 0.0), 2.0, &Point2::new(1.0, 0.0), 1.0);
        assert_eq!(pts.len(), 1);
        assert_relative_eq!(pts[0], Point2::new(2.0, 0.0), epsilon = TOL);
    }

    #[test]
    fn circle_inside_touches_once() {
        let pts = circle_circle_points(&Point2::new(0.0, 0.0), 1.0, &Point2::new(1.0, 0.0), 2.0);
        assert_eq!(pts.len(), 1);
        assert_relative_eq!(pts[0], Point2::new(-1.0, 0.0), epsilon = TOL);
    }

    #[test]
    fn circles_apart() {
        let pts = circle_circle_points(&Point2::new(0.0, 0.0), 1.0, &Point2::new(5.0, 0.0), 1.0);
        assert!(pts.is_empty());
    }

    #[test]
    fn circles_concentric() {
        let p = Point2::new(1.0, 1.0);
        assert!(circle_circle_points(&p, 1.0, &p, 2.0).is_empty());
    }
}
