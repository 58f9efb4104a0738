//! In-memory CSG arena.
//!
//! Solids are kept as boolean trees over box primitives. Boolean operations
//! graft the consumed operand's tree into the target and drop the operand
//! from the arena, so its ID stops resolving.

pub mod solid;

pub use solid::{CsgNode, SolidData, SolidId};

use crate::error::BackendError;
use slotmap::SlotMap;

/// Central arena that owns all solids.
///
/// Solids are referenced via typed IDs (generational indices), so a consumed
/// solid's stale ID is detected instead of aliasing a newer solid.
#[derive(Debug, Default)]
pub struct SolidStore {
    solids: SlotMap<SolidId, SolidData>,
}

impl SolidStore {
    /// Creates a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a solid and returns its ID.
    pub fn add_solid(&mut self, data: SolidData) -> SolidId {
        self.solids.insert(data)
    }

    /// Returns a reference to the solid data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is not in the store.
    pub fn solid(&self, id: SolidId) -> Result<&SolidData, BackendError> {
        self.solids.get(id).ok_or(BackendError::SolidNotFound)
    }

    /// Returns a mutable reference to the solid data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is not in the store.
    pub fn solid_mut(&mut self, id: SolidId) -> Result<&mut SolidData, BackendError> {
        self.solids.get_mut(id).ok_or(BackendError::SolidNotFound)
    }

    /// Removes a solid, returning its data.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is not in the store.
    pub fn remove_solid(&mut self, id: SolidId) -> Result<SolidData, BackendError> {
        self.solids.remove(id).ok_or(BackendError::SolidNotFound)
    }

    /// Looks up a solid by the name assigned to it.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<SolidId> {
        self.solids
            .iter()
            .find(|(_, data)| data.name.as_deref() == Some(name))
            .map(|(id, _)| id)
    }

    /// Number of live solids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.solids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.solids.is_empty()
    }
}
