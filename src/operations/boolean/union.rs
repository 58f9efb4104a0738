use crate::csg::{SolidId, SolidStore};
use crate::error::Result;

use super::engine::{boolean_execute, BooleanOp};

/// Computes the boolean union of two solids.
pub struct Union {
    target: SolidId,
    addition: SolidId,
}

impl Union {
    /// Creates a new `Union` operation.
    #[must_use]
    pub fn new(target: SolidId, addition: SolidId) -> Self {
        Self { target, addition }
    }

    /// Executes the union in place. The addition is consumed.
    ///
    /// # Errors
    ///
    /// Returns an error if either solid is missing or both are the same.
    pub fn execute(&self, store: &mut SolidStore) -> Result<()> {
        boolean_execute(store, self.target, self.addition, BooleanOp::Union)
    }
}
