use crate::math::Point2;

use super::{DrawCommand, PageTransform, Render};

/// An open or closed polyline through a list of points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    points: Vec<Point2>,
    closed: bool,
}

impl Path {
    /// An empty open path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a vertex.
    pub fn push(&mut self, point: Point2) -> &mut Self {
        self.points.push(point);
        self
    }

    /// Marks the path as closed back to its first vertex.
    pub fn close(&mut self) -> &mut Self {
        self.closed = true;
        self
    }

    /// The vertices in insertion order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns true once [`Path::close`] has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl FromIterator<Point2> for Path {
    fn from_iter<I: IntoIterator<Item = Point2>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
            closed: false,
        }
    }
}

impl Render for Path {
    fn draw(&self, tfm: &PageTransform) -> Vec<DrawCommand> {
        let Some((first, rest)) = self.points.split_first() else {
            return Vec::new();
        };
        let mut commands = Vec::with_capacity(self.points.len() + 1);
        commands.push(DrawCommand::MoveTo(tfm.map(first)));
        commands.extend(rest.iter().map(|p| DrawCommand::LineTo(tfm.map(p))));
        if self.closed {
            commands.push(DrawCommand::ClosePath);
        }
        commands
    }
}
