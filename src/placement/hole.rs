use crate::geometry::{BoxSpec, PlanAxis};
use crate::math::{Point3, Vector3};
use crate::model::{Hole, Wall};

/// Places an opening at a fractional position along its host wall.
///
/// `position` runs from `-1` (lower end of the wall) through `0` (center) to
/// `1` (upper end) and locates the opening's center. The opening always
/// cuts through the full wall thickness.
#[derive(Debug, Clone, Copy)]
pub struct FractionalHole {
    axis: PlanAxis,
    position: f64,
    width: f64,
    height: f64,
    base_height: f64,
}

impl FractionalHole {
    /// Creates a floor-level opening `width` wide and `height` tall.
    #[must_use]
    pub fn new(axis: PlanAxis, position: f64, width: f64, height: f64) -> Self {
        Self {
            axis,
            position,
            width,
            height,
            base_height: 0.0,
        }
    }

    /// Raises the opening's bottom (sill) above the wall's bottom.
    #[must_use]
    pub fn with_base_height(mut self, base_height: f64) -> Self {
        self.base_height = base_height;
        self
    }

    /// Computes the opening in the wall's local frame.
    #[must_use]
    pub fn execute(&self, wall: &Wall) -> Hole {
        let along = wall.size()[self.axis.index()] / 2.0 * self.position;
        opening(self.axis, wall, along, self.width, self.height, self.base_height)
    }
}

/// Which side of the reference wall an opening is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Toward the lower coordinate: left of the reference for width
    /// openings, in front of it for depth openings.
    Before,
    /// Toward the higher coordinate.
    After,
}

impl Side {
    /// `Before` for non-negative selectors, `After` for negative ones.
    #[must_use]
    pub fn from_sign(selector: f64) -> Self {
        if selector < 0.0 {
            Self::After
        } else {
            Self::Before
        }
    }
}

/// Places an opening flush against an edge of a reference wall, leaving
/// `gap` of solid wall between the two.
#[derive(Debug, Clone, Copy)]
pub struct GapHole {
    axis: PlanAxis,
    side: Side,
    gap: f64,
    width: f64,
    height: f64,
    base_height: f64,
}

impl GapHole {
    /// Creates a floor-level opening.
    #[must_use]
    pub fn new(axis: PlanAxis, side: Side, gap: f64, width: f64, height: f64) -> Self {
        Self {
            axis,
            side,
            gap,
            width,
            height,
            base_height: 0.0,
        }
    }

    #[must_use]
    pub fn with_base_height(mut self, base_height: f64) -> Self {
        self.base_height = base_height;
        self
    }

    /// Computes the opening in `host`'s local frame. `reference` is the
    /// reference wall's box in the storey frame.
    #[must_use]
    pub fn execute(&self, host: &Wall, reference: &BoxSpec) -> Hole {
        let half = self.width / 2.0;
        let edge = match self.side {
            Side::Before => reference.lower(self.axis) - self.gap - half,
            Side::After => reference.upper(self.axis) + self.gap + half,
        };
        let along = edge - host.location()[self.axis.index()];
        opening(self.axis, host, along, self.width, self.height, self.base_height)
    }
}

fn opening(
    axis: PlanAxis,
    wall: &Wall,
    along: f64,
    width: f64,
    height: f64,
    base_height: f64,
) -> Hole {
    let wall_size = wall.size();
    let vertical = base_height + (height - wall_size.z) / 2.0;
    let (size, location) = match axis {
        PlanAxis::Width => (
            Vector3::new(width, wall_size.y, height),
            Point3::new(along, 0.0, vertical),
        ),
        PlanAxis::Depth => (
            Vector3::new(wall_size.x, width, height),
            Point3::new(0.0, along, vertical),
        ),
    };
    Hole::new(size, location)
}
