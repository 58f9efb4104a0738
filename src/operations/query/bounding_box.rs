use crate::csg::{CsgNode, SolidId, SolidStore};
use crate::error::Result;
use crate::geometry::Aabb;

/// Computes a conservative axis-aligned bounding box of a solid.
///
/// A difference is bounded by its left operand, so the box may be larger
/// than the solid when a cut removes a whole side.
pub struct BoundingBox {
    solid: SolidId,
}

impl BoundingBox {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self { solid }
    }

    /// Executes the query, returning the AABB.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is not in the store.
    pub fn execute(&self, store: &SolidStore) -> Result<Aabb> {
        Ok(node_bounds(&store.solid(self.solid)?.node))
    }
}

fn node_bounds(node: &CsgNode) -> Aabb {
    match node {
        CsgNode::Primitive(spec) => spec.aabb(),
        CsgNode::Difference(a, _) => node_bounds(a),
        CsgNode::Union(a, b) => node_bounds(a).merge(&node_bounds(b)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::boolean::{Subtract, Union};
    use crate::operations::creation::MakeBox;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn union_bounds_enclose_operands() {
        let mut store = SolidStore::new();
        let a = MakeBox::from_corners(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();
        let b = MakeBox::from_corners(p(2.0, -1.0, 0.5), p(3.0, 0.5, 2.0))
            .execute(&mut store)
            .unwrap();
        Union::new(a, b).execute(&mut store).unwrap();

        let aabb = BoundingBox::new(a).execute(&store).unwrap();
        assert_eq!(aabb.min, p(0.0, -1.0, 0.0));
        assert_eq!(aabb.max, p(3.0, 1.0, 2.0));
    }

    #[test]
    fn difference_keeps_target_bounds() {
        let mut store = SolidStore::new();
        let a = MakeBox::from_corners(p(0.0, 0.0, 0.0), p(4.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();
        let b = MakeBox::from_corners(p(3.0, -1.0, -1.0), p(5.0, 2.0, 2.0))
            .execute(&mut store)
            .unwrap();
        Subtract::new(a, b).execute(&mut store).unwrap();

        let aabb = BoundingBox::new(a).execute(&store).unwrap();
        assert_eq!(aabb.max, p(4.0, 1.0, 1.0));
    }
}
