use crate::geometry::{BoxSpec, PlanAxis};
use crate::math::{Point3, Vector3};
use crate::placement::FractionalHole;

use super::Hole;

/// Which of a storey's preset thicknesses a wall uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallKind {
    External,
    Internal,
    Thin,
}

/// Preset wall thicknesses of a storey.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallThicknesses {
    /// Thickness of the four boundary walls.
    pub external: f64,
    pub internal: f64,
    pub thin: f64,
}

impl Default for WallThicknesses {
    fn default() -> Self {
        Self {
            external: 0.4,
            internal: 0.2,
            thin: 0.1,
        }
    }
}

impl WallThicknesses {
    /// Default presets with the given external thickness.
    #[must_use]
    pub fn with_external(external: f64) -> Self {
        Self {
            external,
            ..Self::default()
        }
    }

    /// Thickness for a wall kind.
    #[must_use]
    pub fn of(&self, kind: WallKind) -> f64 {
        match kind {
            WallKind::External => self.external,
            WallKind::Internal => self.internal,
            WallKind::Thin => self.thin,
        }
    }
}

/// A box-shaped wall in a storey's local frame.
///
/// `location` is the wall center relative to the storey's horizontal origin
/// and mid-height; the storey altitude is only applied when rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    name: String,
    size: Vector3,
    location: Point3,
    holes: Vec<Hole>,
}

impl Wall {
    /// Creates a wall without openings.
    #[must_use]
    pub fn new(name: impl Into<String>, size: Vector3, location: Point3) -> Self {
        Self {
            name: name.into(),
            size,
            location,
            holes: Vec::new(),
        }
    }

    /// Creates a wall occupying `spec`. Rotation is ignored.
    #[must_use]
    pub fn from_box(name: impl Into<String>, spec: &BoxSpec) -> Self {
        Self::new(name, spec.size, spec.location)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(super) fn rename(&mut self, name: &str) {
        name.clone_into(&mut self.name);
    }

    /// Length x thickness x height, or thickness x length x height for walls
    /// running along the depth axis.
    #[must_use]
    pub fn size(&self) -> Vector3 {
        self.size
    }

    #[must_use]
    pub fn location(&self) -> Point3 {
        self.location
    }

    /// Openings in insertion order.
    #[must_use]
    pub fn holes(&self) -> &[Hole] {
        &self.holes
    }

    /// The wall's box in the storey frame.
    #[must_use]
    pub fn box_spec(&self) -> BoxSpec {
        BoxSpec::new(self.size, self.location)
    }

    #[must_use]
    pub fn bound_left(&self) -> f64 {
        self.box_spec().left()
    }

    #[must_use]
    pub fn bound_right(&self) -> f64 {
        self.box_spec().right()
    }

    #[must_use]
    pub fn bound_front(&self) -> f64 {
        self.box_spec().front()
    }

    #[must_use]
    pub fn bound_back(&self) -> f64 {
        self.box_spec().back()
    }

    /// Adds an opening given directly in the wall's local frame.
    pub fn add_hole(&mut self, hole: Hole) -> &Hole {
        tracing::debug!(
            wall = %self.name,
            size = ?hole.size,
            location = ?hole.location,
            "hole placed"
        );
        self.holes.push(hole);
        &self.holes[self.holes.len() - 1]
    }

    /// Adds an opening placed by a [`FractionalHole`].
    pub fn add_fractional_hole(&mut self, placement: &FractionalHole) -> &Hole {
        let hole = placement.execute(self);
        self.add_hole(hole)
    }

    /// Adds a hole along the width axis: `position` in `[-1, 1]` from the
    /// left end to the right end of the wall.
    pub fn add_width_hole(
        &mut self,
        position: f64,
        width: f64,
        height: f64,
        base_height: f64,
    ) -> &Hole {
        let placement = FractionalHole::new(PlanAxis::Width, position, width, height)
            .with_base_height(base_height);
        self.add_fractional_hole(&placement)
    }

    /// Adds a hole along the depth axis: `position` in `[-1, 1]` from the
    /// front end to the back end of the wall.
    pub fn add_depth_hole(
        &mut self,
        position: f64,
        width: f64,
        height: f64,
        base_height: f64,
    ) -> &Hole {
        let placement = FractionalHole::new(PlanAxis::Depth, position, width, height)
            .with_base_height(base_height);
        self.add_fractional_hole(&placement)
    }

    /// Adds one identical opening per fractional position, e.g. a row of
    /// windows along a facade.
    pub fn add_hole_row(
        &mut self,
        axis: PlanAxis,
        positions: &[f64],
        width: f64,
        height: f64,
        base_height: f64,
    ) {
        for &position in positions {
            let placement =
                FractionalHole::new(axis, position, width, height).with_base_height(base_height);
            self.add_fractional_hole(&placement);
        }
    }
}
