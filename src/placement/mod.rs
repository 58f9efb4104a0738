//! Placement algebra: computes wall and hole boxes from compact relative
//! parameters.
//!
//! Each placement is a small operation struct: build it with `new`, adjust
//! it with the `with_*` setters, then `execute` it against the floor (for
//! walls) or the host wall (for holes).

mod hole;
mod wall;

pub use hole::{FractionalHole, GapHole, Side};
pub use wall::{Frame, FractionalWall, GridWall, SpanWall};
