use crate::csg::{SolidId, SolidStore};
use crate::error::Result;

use super::engine::{boolean_execute, BooleanOp};

/// Computes the boolean subtraction of one solid from another.
pub struct Subtract {
    target: SolidId,
    cutter: SolidId,
}

impl Subtract {
    /// Creates a new `Subtract` operation (target - cutter).
    #[must_use]
    pub fn new(target: SolidId, cutter: SolidId) -> Self {
        Self { target, cutter }
    }

    /// Executes the subtraction in place. The cutter is consumed.
    ///
    /// # Errors
    ///
    /// Returns an error if either solid is missing or both are the same.
    pub fn execute(&self, store: &mut SolidStore) -> Result<()> {
        boolean_execute(store, self.target, self.cutter, BooleanOp::Subtract)
    }
}
