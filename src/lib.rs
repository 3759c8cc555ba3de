pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod render;

pub use error::{NoodleError, Result};
