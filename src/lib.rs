pub mod backend;
pub mod csg;
pub mod error;
pub mod geometry;
pub mod math;
pub mod model;
pub mod operations;
pub mod placement;
pub mod render;

pub use error::{DomusError, Result};
