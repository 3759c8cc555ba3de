use std::fmt;

use super::TWO_PI;

/// Shifts `angle` by whole turns until it lies in `[lo, hi]`.
///
/// An angle below `lo` moves to the smallest equivalent angle not below
/// `lo`; an angle above `hi` then moves to the largest equivalent angle not
/// above `hi`. If the window is narrower than a full turn the result may
/// therefore land below `lo`. Non-finite angles are returned unchanged.
#[must_use]
pub fn normalize_angle(angle: f64, lo: f64, hi: f64) -> f64 {
    if !angle.is_finite() {
        return angle;
    }
    let mut angle = angle;
    if angle < lo {
        angle = lo + (angle - lo).rem_euclid(TWO_PI);
    }
    if angle > hi {
        angle = hi - (hi - angle).rem_euclid(TWO_PI);
    }
    angle
}

/// A directed interval on the circle of angles, in radians.
///
/// The ordering of `start` and `finish` encodes the sweep direction. The
/// span between them never exceeds one full turn: `finish` is normalised
/// into `[start - 2π, start + 2π]` on construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleRange {
    start: f64,
    finish: f64,
}

impl AngleRange {
    /// Creates a new angle range, keeping `start` verbatim.
    #[must_use]
    pub fn new(start: f64, finish: f64) -> Self {
        Self {
            start,
            finish: normalize_angle(finish, start - TWO_PI, start + TWO_PI),
        }
    }

    /// Returns the stored start angle.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Returns the stored finish angle.
    #[must_use]
    pub fn finish(&self) -> f64 {
        self.finish
    }

    /// Returns true iff the stored start is numerically less than the stored finish.
    ///
    /// Renderers rely on exactly this comparison to decide which stored bound
    /// is the low one.
    #[must_use]
    pub fn clockwise(&self) -> bool {
        self.start < self.finish
    }

    /// The smaller of the two stored bounds.
    #[must_use]
    pub fn low(&self) -> f64 {
        self.start.min(self.finish)
    }

    /// The larger of the two stored bounds.
    #[must_use]
    pub fn high(&self) -> f64 {
        self.start.max(self.finish)
    }

    /// Absolute angular span, in `[0, 2π]`.
    #[must_use]
    pub fn span(&self) -> f64 {
        (self.finish - self.start).abs()
    }

    /// Membership test with wraparound.
    ///
    /// The interval is half-open: closed at `start` and open at `finish` when
    /// `start < finish`, and the other way around otherwise.
    #[must_use]
    pub fn contains(&self, angle: f64) -> bool {
        let angle = normalize_angle(angle, self.low(), self.high());
        (self.start <= angle && angle < self.finish)
            || (self.finish <= angle && angle < self.start)
    }

    /// Intersects two ranges as ordinary intervals after moving each low
    /// bound into `[0, 2π]`.
    ///
    /// Returns `None` when the ranges do not overlap.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let (a, b) = Self::lifted(self);
        let (c, d) = Self::lifted(other);
        let lo = a.max(c);
        let hi = b.min(d);
        if hi >= lo {
            Some(Self::new(lo, hi))
        } else {
            None
        }
    }

    /// Returns `(low, high)` with the low bound normalised into `[0, 2π]`
    /// and the span preserved.
    fn lifted(range: &Self) -> (f64, f64) {
        let (lo, hi) = (range.low(), range.high());
        let shifted = normalize_angle(lo, 0.0, TWO_PI);
        (shifted, hi + shifted - lo)
    }
}

impl fmt::Display for AngleRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<AngleRange {} {}>",
            self.start.to_degrees(),
            self.finish.to_degrees()
        )
    }
}
