use crate::csg::{SolidId, SolidStore};
use crate::error::Result;
use crate::math::{Matrix4, Point3, Vector3};

/// Rotates a solid about a vertical axis.
pub struct Rotate {
    solid: SolidId,
    pivot: Point3,
    angle: f64,
}

impl Rotate {
    /// Creates a new `Rotate` operation about the vertical line through
    /// `pivot`.
    ///
    /// * `angle` - Rotation angle in radians, counter-clockwise seen from above.
    #[must_use]
    pub fn new(solid: SolidId, pivot: Point3, angle: f64) -> Self {
        Self { solid, pivot, angle }
    }

    /// Executes the rotation, modifying the solid in-place.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is not in the store.
    pub fn execute(&self, store: &mut SolidStore) -> Result<()> {
        // Translate to origin, rotate, translate back
        let t_neg = Matrix4::new_translation(&(-self.pivot.coords));
        let rot = Matrix4::new_rotation(Vector3::z() * self.angle);
        let t_pos = Matrix4::new_translation(&self.pivot.coords);
        let matrix = t_pos * rot * t_neg;

        let data = store.solid_mut(self.solid)?;
        data.node.for_each_primitive_mut(&mut |spec| {
            spec.location = matrix.transform_point(&spec.location);
            spec.rotation_z += self.angle;
        });
        Ok(())
    }
}
