use crate::csg::{CsgNode, SolidData, SolidId, SolidStore};
use crate::error::{BackendError, Result};
use crate::geometry::BoxSpec;
use crate::math::Point3;

/// Creates a box solid.
pub struct MakeBox {
    spec: BoxSpec,
}

impl MakeBox {
    /// Creates a new `MakeBox` operation.
    #[must_use]
    pub fn new(spec: BoxSpec) -> Self {
        Self { spec }
    }

    /// Creates an axis-aligned box spanning two corner points.
    #[must_use]
    pub fn from_corners(min_corner: Point3, max_corner: Point3) -> Self {
        Self::new(BoxSpec::new(
            max_corner - min_corner,
            nalgebra::center(&min_corner, &max_corner),
        ))
    }

    /// Executes the operation, creating the box in the store.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::InvalidInput` if a size is negative or any
    /// component is not finite.
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        let spec = &self.spec;
        if spec.size.iter().any(|s| !s.is_finite() || *s < 0.0) {
            return Err(BackendError::InvalidInput(format!(
                "box size must be finite and non-negative, got {:?}",
                spec.size
            ))
            .into());
        }
        if spec.location.iter().any(|c| !c.is_finite()) || !spec.rotation_z.is_finite() {
            return Err(
                BackendError::InvalidInput("box placement must be finite".to_owned()).into(),
            );
        }
        Ok(store.add_solid(SolidData::new(CsgNode::Primitive(*spec))))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector3;

    #[test]
    fn box_from_corners() {
        let mut store = SolidStore::new();
        let id = MakeBox::from_corners(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 3.0, 4.0))
            .execute(&mut store)
            .unwrap();
        let CsgNode::Primitive(spec) = store.solid(id).unwrap().node else {
            panic!("expected a primitive");
        };
        assert_eq!(spec.size, Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(spec.location, Point3::new(1.0, 1.5, 2.0));
    }

    #[test]
    fn negative_size_is_rejected() {
        let mut store = SolidStore::new();
        let spec = BoxSpec::new(Vector3::new(-1.0, 1.0, 1.0), Point3::origin());
        assert!(MakeBox::new(spec).execute(&mut store).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn zero_size_is_allowed() {
        let mut store = SolidStore::new();
        let spec = BoxSpec::new(Vector3::new(0.0, 1.0, 1.0), Point3::origin());
        assert!(MakeBox::new(spec).execute(&mut store).is_ok());
    }
}
