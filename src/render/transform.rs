use crate::math::Point2;

/// Device units per model unit on a PostScript page (points per inch).
pub const POINTS_PER_INCH: f64 = 72.0;

/// Linear map from model coordinates to device coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageTransform {
    /// Device units per model unit.
    pub scale_factor: f64,
    /// Device location of the model zero reference.
    pub origin: Point2,
    /// Model point that maps onto `origin`.
    pub zero: Point2,
}

impl Default for PageTransform {
    /// Inches on a US-letter page, with the model origin at the page centre.
    fn default() -> Self {
        Self {
            scale_factor: POINTS_PER_INCH,
            origin: Point2::new(POINTS_PER_INCH * 4.25, POINTS_PER_INCH * 5.5),
            zero: Point2::origin(),
        }
    }
}

impl PageTransform {
    /// Creates a transform mapping the model origin onto `origin`.
    #[must_use]
    pub fn new(scale_factor: f64, origin: Point2) -> Self {
        Self {
            scale_factor,
            origin,
            zero: Point2::origin(),
        }
    }

    /// Sets the model point that maps onto `origin`.
    #[must_use]
    pub fn with_zero(mut self, zero: Point2) -> Self {
        self.zero = zero;
        self
    }

    /// Maps a model point to device space.
    #[must_use]
    pub fn map(&self, p: &Point2) -> Point2 {
        self.origin + self.scale_factor * (p - self.zero)
    }

    /// Maps a model length to device space.
    #[must_use]
    pub fn scale(&self, distance: f64) -> f64 {
        self.scale_factor * distance
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn default_is_letter_page_centre() {
        let tfm = PageTransform::default();
        assert_relative_eq!(tfm.map(&Point2::origin()), Point2::new(306.0, 396.0));
        assert_relative_eq!(tfm.map(&Point2::new(1.0, 0.0)), Point2::new(378.0, 396.0));
        assert_relative_eq!(tfm.scale(2.0), 144.0);
    }

    #[test]
    fn custom_zero_reference() {
        let tfm = PageTransform::new(10.0, Point2::new(5.0, 5.0)).with_zero(Point2::new(1.0, 1.0));
        assert_relative_eq!(tfm.map(&Point2::new(1.0, 1.0)), Point2::new(5.0, 5.0));
        assert_relative_eq!(tfm.map(&Point2::new(2.0, 0.0)), Point2::new(15.0, -5.0));
    }
}
