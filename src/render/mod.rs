//! Device-space drawing directives for primitives and shapes.
//!
//! Geometry is mapped through a [`PageTransform`] and emitted as a flat list
//! of [`DrawCommand`]s, whose `Display` form is PostScript.

mod path;
mod transform;

pub use path::Path;
pub use transform::{PageTransform, POINTS_PER_INCH};

use std::fmt;

use crate::geometry::{Arc, LineSegment, Primitive, Shape};
use crate::math::Point2;

/// A single device-space drawing directive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    MoveTo(Point2),
    LineTo(Point2),
    /// Circular arc from `low_deg` to `high_deg`, counter-clockwise.
    Arc {
        center: Point2,
        radius: f64,
        low_deg: f64,
        high_deg: f64,
    },
    ClosePath,
    Stroke,
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoveTo(p) => write!(f, "{} {} moveto", Num(p.x), Num(p.y)),
            Self::LineTo(p) => write!(f, "{} {} lineto", Num(p.x), Num(p.y)),
            Self::Arc {
                center,
                radius,
                low_deg,
                high_deg,
            } => write!(
                f,
                "{} {} {} {} {} arc",
                Num(center.x),
                Num(center.y),
                Num(*radius),
                Num(*low_deg),
                Num(*high_deg)
            ),
            Self::ClosePath => f.write_str("closepath"),
            Self::Stroke => f.write_str("stroke"),
        }
    }
}

/// Number formatting for PostScript output: rounded to 1e-6, no negative zero.
struct Num(f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = (self.0 * 1e6).round() / 1e6;
        // -0.0 + 0.0 == +0.0
        write!(f, "{}", v + 0.0)
    }
}

/// Anything that can be drawn on a page.
pub trait Render {
    /// Emits the device-space directives for `self`.
    fn draw(&self, tfm: &PageTransform) -> Vec<DrawCommand>;

    /// Emits the directives as PostScript text.
    fn to_postscript(&self, tfm: &PageTransform) -> String {
        postscript(&self.draw(tfm))
    }
}

impl Render for LineSegment {
    fn draw(&self, tfm: &PageTransform) -> Vec<DrawCommand> {
        vec![
            DrawCommand::MoveTo(tfm.map(self.p1())),
            DrawCommand::LineTo(tfm.map(self.p2())),
        ]
    }
}

impl Render for Arc {
    fn draw(&self, tfm: &PageTransform) -> Vec<DrawCommand> {
        let range = self.angle_range();
        let (low, high) = if range.clockwise() {
            (range.start(), range.finish())
        } else {
            (range.finish(), range.start())
        };
        vec![
            DrawCommand::MoveTo(tfm.map(&self.point_at_angle(low))),
            DrawCommand::Arc {
                center: tfm.map(self.center()),
                radius: tfm.scale(self.radius()),
                low_deg: low.to_degrees(),
                high_deg: high.to_degrees(),
            },
        ]
    }
}

impl Render for Primitive {
    fn draw(&self, tfm: &PageTransform) -> Vec<DrawCommand> {
        match self {
            Self::Segment(segment) => segment.draw(tfm),
            Self::Arc(arc) => arc.draw(tfm),
        }
    }
}

impl Render for Shape {
    fn draw(&self, tfm: &PageTransform) -> Vec<DrawCommand> {
        let mut commands: Vec<_> = self.edges().iter().flat_map(|e| e.draw(tfm)).collect();
        commands.push(DrawCommand::Stroke);
        commands
    }
}

/// Joins directives into one line of PostScript.
#[must_use]
pub fn postscript(commands: &[DrawCommand]) -> String {
    commands
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Wraps directives in a minimal single-page PostScript document.
#[must_use]
pub fn page(commands: &[DrawCommand]) -> String {
    format!("%!PS-Adobe-2.0\n{}\nshowpage\n", postscript(commands))
}
