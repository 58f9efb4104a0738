use crate::csg::{SolidId, SolidStore};
use crate::error::Result;
use crate::math::Vector3;

/// Translates a solid by a displacement vector.
pub struct Translate {
    solid: SolidId,
    displacement: Vector3,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(solid: SolidId, displacement: Vector3) -> Self {
        Self {
            solid,
            displacement,
        }
    }

    /// Executes the translation, modifying the solid in-place.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is not in the store.
    pub fn execute(&self, store: &mut SolidStore) -> Result<()> {
        let data = store.solid_mut(self.solid)?;
        data.node
            .for_each_primitive_mut(&mut |spec| spec.location += self.displacement);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::Point3;
    use crate::operations::boolean::Subtract;
    use crate::operations::creation::MakeBox;
    use crate::operations::query::BoundingBox;

    #[test]
    fn translates_every_primitive() {
        let mut store = SolidStore::new();
        let wall = MakeBox::from_corners(
            Point3::new(-2.0, -0.15, -1.5),
            Point3::new(2.0, 0.15, 1.5),
        )
        .execute(&mut store)
        .unwrap();
        let hole = MakeBox::from_corners(Point3::new(-0.5, -0.2, -1.5), Point3::new(0.5, 0.2, 0.5))
            .execute(&mut store)
            .unwrap();
        Subtract::new(wall, hole).execute(&mut store).unwrap();

        Translate::new(wall, Vector3::new(1.0, 2.0, 1.5))
            .execute(&mut store)
            .unwrap();

        let aabb = BoundingBox::new(wall).execute(&store).unwrap();
        assert_relative_eq!(aabb.min, Point3::new(-1.0, 1.85, 0.0), epsilon = 1e-12);
        assert_relative_eq!(aabb.max, Point3::new(3.0, 2.15, 3.0), epsilon = 1e-12);
        let mut hole_centers = Vec::new();
        store
            .solid(wall)
            .unwrap()
            .node
            .for_each_primitive(&mut |spec| hole_centers.push(spec.location));
        assert_eq!(hole_centers[1], Point3::new(1.0, 2.0, 1.0));
    }
}
