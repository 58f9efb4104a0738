use crate::csg::{CsgNode, SolidId, SolidStore};
use crate::error::{BackendError, Result};
use crate::geometry::BoxSpec;
use crate::math::{Point3, Vector3};

/// Boolean operation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOp {
    Union,
    Subtract,
}

/// Combines `operand` into `target` in place. The operand is removed from
/// the store and its ID becomes invalid.
pub(super) fn boolean_execute(
    store: &mut SolidStore,
    target: SolidId,
    operand: SolidId,
    op: BooleanOp,
) -> Result<()> {
    if target == operand {
        return Err(
            BackendError::InvalidInput("a solid cannot be combined with itself".to_owned()).into(),
        );
    }
    // Check the target before consuming the operand.
    store.solid(target)?;
    let operand = store.remove_solid(operand)?;

    let data = store.solid_mut(target)?;
    let placeholder = CsgNode::Primitive(BoxSpec::new(Vector3::zeros(), Point3::origin()));
    let left = Box::new(std::mem::replace(&mut data.node, placeholder));
    let right = Box::new(operand.node);
    data.node = match op {
        BooleanOp::Union => CsgNode::Union(left, right),
        BooleanOp::Subtract => CsgNode::Difference(left, right),
    };
    Ok(())
}
