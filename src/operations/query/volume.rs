use crate::csg::{SolidId, SolidStore};
use crate::error::{BackendError, Result};
use crate::math::{Point3, TOLERANCE};
use crate::operations::boolean::{classify_point_in_node, PointClassification};

/// Computes the volume of a solid.
///
/// Every primitive face lies on one of a finite set of axis-aligned planes.
/// Those planes cut space into cells that are each entirely inside or
/// entirely outside the solid, so classifying each cell's center and summing
/// the inside cells gives the exact volume.
///
/// Only axis-aligned primitives are supported.
pub struct Volume {
    solid: SolidId,
}

impl Volume {
    /// Creates a new `Volume` query.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self { solid }
    }

    /// Executes the query, returning the volume.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is not in the store, or
    /// `BackendError::Unsupported` if any primitive is rotated.
    pub fn execute(&self, store: &SolidStore) -> Result<f64> {
        let node = &store.solid(self.solid)?.node;

        let mut rotated = false;
        let mut planes: [Vec<f64>; 3] = Default::default();
        node.for_each_primitive(&mut |spec| {
            if spec.rotation_z.abs() > TOLERANCE {
                rotated = true;
            }
            let aabb = spec.aabb();
            for (axis, coords) in planes.iter_mut().enumerate() {
                coords.push(aabb.min[axis]);
                coords.push(aabb.max[axis]);
            }
        });
        if rotated {
            return Err(BackendError::Unsupported(
                "volume of rotated primitives".to_owned(),
            )
            .into());
        }
        for coords in &mut planes {
            coords.sort_by(f64::total_cmp);
            coords.dedup_by(|a, b| (*a - *b).abs() < TOLERANCE);
        }

        let [xs, ys, zs] = &planes;
        let mut volume = 0.0;
        for x in xs.windows(2) {
            for y in ys.windows(2) {
                for z in zs.windows(2) {
                    let center = Point3::new(
                        (x[0] + x[1]) / 2.0,
                        (y[0] + y[1]) / 2.0,
                        (z[0] + z[1]) / 2.0,
                    );
                    if classify_point_in_node(&center, node) == PointClassification::Inside {
                        volume += (x[1] - x[0]) * (y[1] - y[0]) * (z[1] - z[0]);
                    }
                }
            }
        }
        Ok(volume)
    }
}
