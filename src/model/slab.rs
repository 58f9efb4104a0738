use crate::geometry::BoxSpec;
use crate::math::{Point3, Vector3};

/// The foundation slab under the first storey.
#[derive(Debug, Clone, PartialEq)]
pub struct Foundation {
    pub height: f64,
    /// Inset from each footprint edge.
    pub shift: f64,
    pub altitude: f64,
}

/// A floor slab between two storeys.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlap {
    pub height: f64,
    /// Inset from each footprint edge.
    pub shift: f64,
    pub altitude: f64,
}

impl Foundation {
    /// The inset slab this foundation renders as, for a `width` x `depth`
    /// footprint centered on the origin.
    #[must_use]
    pub fn slab(&self, width: f64, depth: f64) -> BoxSpec {
        inset_slab(width, depth, self.shift, self.height, self.altitude)
    }
}

impl Overlap {
    /// The inset slab this overlap renders as.
    #[must_use]
    pub fn slab(&self, width: f64, depth: f64) -> BoxSpec {
        inset_slab(width, depth, self.shift, self.height, self.altitude)
    }
}

fn inset_slab(width: f64, depth: f64, shift: f64, height: f64, altitude: f64) -> BoxSpec {
    BoxSpec::new(
        Vector3::new(width - 2.0 * shift, depth - 2.0 * shift, height),
        Point3::new(0.0, 0.0, altitude + height / 2.0),
    )
}
