mod intersect;

pub use intersect::{EdgeIntersection, ShapeIntersect};
