use crate::csg::{CsgNode, SolidId, SolidStore};
use crate::error::Result;
use crate::math::{Point3, TOLERANCE};

/// Classification of a point relative to a solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointClassification {
    Inside,
    Outside,
    OnBoundary,
}

/// Classifies a point as inside, outside, or on the boundary of a solid.
///
/// # Errors
///
/// Returns an error if the solid is not in the store.
pub fn classify_point_in_solid(
    point: &Point3,
    solid_id: SolidId,
    store: &SolidStore,
) -> Result<PointClassification> {
    let solid = store.solid(solid_id)?;
    Ok(classify_point_in_node(point, &solid.node))
}

/// Classifies a point against a boolean tree.
///
/// Primitives classify directly; differences and unions combine their
/// operands' classifications. Points where two operand boundaries coincide
/// are reported as `OnBoundary` even when the combined solid is locally
/// interior.
#[must_use]
pub fn classify_point_in_node(point: &Point3, node: &CsgNode) -> PointClassification {
    use PointClassification::{Inside, OnBoundary, Outside};

    let boundary_tol = TOLERANCE * 10.0;
    match node {
        CsgNode::Primitive(spec) => {
            if spec.contains_strictly(point, boundary_tol) {
                Inside
            } else if spec.contains(point, boundary_tol) {
                OnBoundary
            } else {
                Outside
            }
        }
        CsgNode::Difference(a, b) => match classify_point_in_node(point, a) {
            Outside => Outside,
            outer => match (outer, classify_point_in_node(point, b)) {
                (_, Inside) => Outside,
                (Inside, Outside) => Inside,
                _ => OnBoundary,
            },
        },
        CsgNode::Union(a, b) => match classify_point_in_node(point, a) {
            Inside => Inside,
            first => match (first, classify_point_in_node(point, b)) {
                (_, Inside) => Inside,
                (Outside, Outside) => Outside,
                _ => OnBoundary,
            },
        },
    }
}
