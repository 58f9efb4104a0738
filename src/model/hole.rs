use crate::geometry::BoxSpec;
use crate::math::{Point3, Vector3};

/// An opening cut into a wall.
///
/// Size and location are relative to the center of the owning wall. A hole
/// reaching past its wall is not rejected; it simply cuts what it overlaps.
#[derive(Debug, Clone, PartialEq)]
pub struct Hole {
    pub size: Vector3,
    pub location: Point3,
}

impl Hole {
    #[must_use]
    pub fn new(size: Vector3, location: Point3) -> Self {
        Self { size, location }
    }

    /// The cutter box in the wall's local frame.
    #[must_use]
    pub fn box_spec(&self) -> BoxSpec {
        BoxSpec::new(self.size, self.location)
    }
}
