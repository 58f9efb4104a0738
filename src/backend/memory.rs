use crate::csg::{SolidId, SolidStore};
use crate::error::Result;
use crate::geometry::BoxSpec;
use crate::math::{Point3, Vector3};
use crate::operations::boolean::{Subtract, Union};
use crate::operations::creation::MakeBox;
use crate::operations::transform::{Rotate, Translate};

use super::{CsgBackend, MaterialRef};

/// Handle to a solid in a [`SolidStore`].
///
/// Not `Clone`: passing it to a boolean operation gives it up.
#[derive(Debug, PartialEq, Eq)]
pub struct StoreSolid(SolidId);

impl StoreSolid {
    /// The arena ID, for queries such as
    /// [`Volume`](crate::operations::query::Volume).
    #[must_use]
    pub fn id(&self) -> SolidId {
        self.0
    }
}

impl CsgBackend for SolidStore {
    type Solid = StoreSolid;

    fn create_box(&mut self, spec: &BoxSpec) -> Result<StoreSolid> {
        MakeBox::new(*spec).execute(self).map(StoreSolid)
    }

    fn subtract(&mut self, target: &mut StoreSolid, cutter: StoreSolid) -> Result<()> {
        Subtract::new(target.0, cutter.0).execute(self)
    }

    fn union(&mut self, target: &mut StoreSolid, addition: StoreSolid) -> Result<()> {
        Union::new(target.0, addition.0).execute(self)
    }

    fn duplicate(&mut self, solid: &StoreSolid) -> Result<StoreSolid> {
        let data = self.solid(solid.0)?.clone();
        Ok(StoreSolid(self.add_solid(data)))
    }

    fn translate(&mut self, solid: &mut StoreSolid, offset: &Vector3) -> Result<()> {
        Translate::new(solid.0, *offset).execute(self)
    }

    fn rotate_z(&mut self, solid: &mut StoreSolid, pivot: &Point3, angle: f64) -> Result<()> {
        Rotate::new(solid.0, *pivot, angle).execute(self)
    }

    fn name(&mut self, solid: &StoreSolid, name: &str) -> Result<()> {
        self.solid_mut(solid.0)?.name = Some(name.to_owned());
        Ok(())
    }

    fn assign_material(&mut self, solid: &StoreSolid, material: &MaterialRef) -> Result<()> {
        self.solid_mut(solid.0)?.material = Some(material.clone());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::operations::query::Volume;

    fn cube(store: &mut SolidStore, x: f64) -> StoreSolid {
        store
            .create_box(&BoxSpec::new(Vector3::new(1.0, 1.0, 1.0), Point3::new(x, 0.0, 0.0)))
            .unwrap()
    }

    #[test]
    fn consumed_operand_leaves_the_store() {
        let mut store = SolidStore::new();
        let mut a = cube(&mut store, 0.0);
        let b = cube(&mut store, 0.5);
        store.subtract(&mut a, b).unwrap();
        assert_eq!(store.len(), 1);
        assert_relative_eq!(Volume::new(a.id()).execute(&store).unwrap(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn retained_operand_stays_valid() {
        let mut store = SolidStore::new();
        let mut a = cube(&mut store, 0.0);
        let b = cube(&mut store, 2.0);
        store.union_retained(&mut a, &b).unwrap();
        assert_eq!(store.len(), 2);
        assert_relative_eq!(Volume::new(a.id()).execute(&store).unwrap(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(Volume::new(b.id()).execute(&store).unwrap(), 1.0, epsilon = 1e-12);

        let mut c = cube(&mut store, 0.0);
        store.subtract_retained(&mut c, &b).unwrap();
        assert!(store.solid(b.id()).is_ok());
    }

    #[test]
    fn names_and_materials_are_recorded() {
        let mut store = SolidStore::new();
        let a = cube(&mut store, 0.0);
        store.name(&a, "floor1").unwrap();
        store.assign_material(&a, &MaterialRef::new("brick")).unwrap();
        assert_eq!(store.find_by_name("floor1"), Some(a.id()));
        assert_eq!(
            store.solid(a.id()).unwrap().material,
            Some(MaterialRef::new("brick"))
        );
    }
}
