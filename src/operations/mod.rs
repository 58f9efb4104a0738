//! Operations on solids held in a [`SolidStore`](crate::csg::SolidStore).

pub mod boolean;
pub mod creation;
pub mod query;
pub mod transform;
