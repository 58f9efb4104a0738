//! The contract between the rendering adapter and a CSG backend.
//!
//! Boolean operations consume their second operand: the cutter or addition
//! is passed by value and must not be used afterwards. Backends express this
//! with a handle type that is neither `Clone` nor `Copy`.

mod memory;

pub use memory::StoreSolid;

use crate::error::Result;
use crate::geometry::BoxSpec;
use crate::math::{Point3, Vector3};

/// An opaque reference to a material understood by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MaterialRef(pub String);

impl MaterialRef {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

/// A solid-modeling backend able to build boxes and combine them.
pub trait CsgBackend {
    /// Handle to a solid owned by the backend.
    type Solid;

    /// Creates a box solid.
    ///
    /// # Errors
    ///
    /// Backend-defined; typically rejects negative or non-finite sizes.
    fn create_box(&mut self, spec: &BoxSpec) -> Result<Self::Solid>;

    /// Removes `cutter` from `target`, consuming the cutter.
    ///
    /// # Errors
    ///
    /// Backend-defined failure of the boolean operation.
    fn subtract(&mut self, target: &mut Self::Solid, cutter: Self::Solid) -> Result<()>;

    /// Merges `addition` into `target`, consuming the addition.
    ///
    /// # Errors
    ///
    /// Backend-defined failure of the boolean operation.
    fn union(&mut self, target: &mut Self::Solid, addition: Self::Solid) -> Result<()>;

    /// Creates an independent copy of a solid.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is no longer valid.
    fn duplicate(&mut self, solid: &Self::Solid) -> Result<Self::Solid>;

    /// Moves a solid by `offset`.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is no longer valid.
    fn translate(&mut self, solid: &mut Self::Solid, offset: &Vector3) -> Result<()>;

    /// Rotates a solid about the vertical line through `pivot`.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is no longer valid.
    fn rotate_z(&mut self, solid: &mut Self::Solid, pivot: &Point3, angle: f64) -> Result<()>;

    /// Labels a solid. Cosmetic.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is no longer valid.
    fn name(&mut self, solid: &Self::Solid, name: &str) -> Result<()>;

    /// Assigns a material to a solid. Cosmetic.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is no longer valid.
    fn assign_material(&mut self, solid: &Self::Solid, material: &MaterialRef) -> Result<()>;

    /// Removes `cutter` from `target` and keeps the cutter usable.
    ///
    /// # Errors
    ///
    /// Propagates failures of [`duplicate`](Self::duplicate) and
    /// [`subtract`](Self::subtract).
    fn subtract_retained(&mut self, target: &mut Self::Solid, cutter: &Self::Solid) -> Result<()> {
        let copy = self.duplicate(cutter)?;
        self.subtract(target, copy)
    }

    /// Merges `addition` into `target` and keeps the addition usable.
    ///
    /// # Errors
    ///
    /// Propagates failures of [`duplicate`](Self::duplicate) and
    /// [`union`](Self::union).
    fn union_retained(&mut self, target: &mut Self::Solid, addition: &Self::Solid) -> Result<()> {
        let copy = self.duplicate(addition)?;
        self.union(target, copy)
    }
}
