pub mod arc;
pub mod primitive;
pub mod segment;
pub mod shape;

pub use arc::Arc;
pub use primitive::{Intersection, Primitive};
pub use segment::LineSegment;
pub use shape::Shape;
