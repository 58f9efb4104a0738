//! The building data model.
//!
//! A [`Building`] stacks an optional [`Foundation`], storeys ([`Floor`]) and
//! the [`Overlap`] slabs between them. Each floor owns its named [`Wall`]s and
//! each wall owns the [`Hole`]s cut into it. Everything is created once, in a
//! single top-down pass, and read-only afterwards.

mod building;
mod floor;
mod grid;
mod hole;
mod slab;
mod wall;

pub use building::{Building, Level};
pub use floor::{Floor, BOUNDARY_WALLS};
pub use grid::Grid;
pub use hole::Hole;
pub use slab::{Foundation, Overlap};
pub use wall::{Wall, WallKind, WallThicknesses};
