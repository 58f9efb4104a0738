use crate::error::{ModelError, Result};

use super::{Floor, Foundation, Overlap, WallThicknesses};

/// One entry of a building's vertical stack, indexing into the floor or
/// overlap sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Foundation,
    Floor(usize),
    Overlap(usize),
}

/// The root of the model: a rectangular footprint and its vertical stack.
///
/// Every `add_*` call places its entity at the running altitude and then
/// raises the altitude by the entity's height. Nothing can be removed or
/// reordered once added.
#[derive(Debug, Clone)]
pub struct Building {
    width: f64,
    depth: f64,
    altitude: f64,
    foundation: Option<Foundation>,
    floors: Vec<Floor>,
    overlaps: Vec<Overlap>,
    stack: Vec<Level>,
}

impl Building {
    /// Creates an empty building with a `width` x `depth` footprint centered
    /// on the origin.
    #[must_use]
    pub fn new(width: f64, depth: f64) -> Self {
        Self {
            width,
            depth,
            altitude: 0.0,
            foundation: None,
            floors: Vec::new(),
            overlaps: Vec::new(),
            stack: Vec::new(),
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Elevation at which the next entity will be placed.
    #[must_use]
    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Height of everything stacked so far.
    #[must_use]
    pub fn total_height(&self) -> f64 {
        self.altitude
    }

    #[must_use]
    pub fn foundation(&self) -> Option<&Foundation> {
        self.foundation.as_ref()
    }

    /// Storeys in stacking order.
    #[must_use]
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    /// Overlap slabs in stacking order.
    #[must_use]
    pub fn overlaps(&self) -> &[Overlap] {
        &self.overlaps
    }

    #[must_use]
    pub fn floor(&self, index: usize) -> Option<&Floor> {
        self.floors.get(index)
    }

    pub fn floor_mut(&mut self, index: usize) -> Option<&mut Floor> {
        self.floors.get_mut(index)
    }

    /// The whole vertical stack, bottom to top.
    #[must_use]
    pub fn levels(&self) -> &[Level] {
        &self.stack
    }

    /// Adds the foundation slab.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::FoundationExists` if one was already added.
    pub fn add_foundation(&mut self, height: f64, shift: f64) -> Result<&Foundation> {
        if self.foundation.is_some() {
            return Err(ModelError::FoundationExists.into());
        }
        let altitude = self.advance(height, "foundation");
        self.stack.push(Level::Foundation);
        Ok(&*self.foundation.insert(Foundation {
            height,
            shift,
            altitude,
        }))
    }

    /// Adds a storey whose boundary walls are `thickness` thick; interior
    /// presets keep their defaults.
    pub fn add_floor(&mut self, height: f64, thickness: f64) -> &mut Floor {
        self.add_floor_with(height, WallThicknesses::with_external(thickness))
    }

    /// Adds a storey with explicit wall thickness presets.
    pub fn add_floor_with(&mut self, height: f64, thicknesses: WallThicknesses) -> &mut Floor {
        let altitude = self.advance(height, "floor");
        self.stack.push(Level::Floor(self.floors.len()));
        self.floors.push(Floor::new(self.width, self.depth, height, thicknesses, altitude));
        let last = self.floors.len() - 1;
        &mut self.floors[last]
    }

    /// Adds a floor slab between storeys.
    pub fn add_overlap(&mut self, height: f64, shift: f64) -> &Overlap {
        let altitude = self.advance(height, "overlap");
        self.stack.push(Level::Overlap(self.overlaps.len()));
        self.overlaps.push(Overlap {
            height,
            shift,
            altitude,
        });
        &self.overlaps[self.overlaps.len() - 1]
    }

    /// Raises the running altitude by `height`, returning the altitude the
    /// new entity starts at.
    fn advance(&mut self, height: f64, entity: &'static str) -> f64 {
        let base = self.altitude;
        self.altitude += height;
        tracing::debug!(entity, base, top = self.altitude, "level added");
        base
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::DomusError;

    #[test]
    fn altitude_accumulates() {
        let mut b = Building::new(10.0, 8.0);
        b.add_foundation(0.2, 0.1).unwrap();
        b.add_floor(3.0, 0.3);
        b.add_overlap(0.25, 0.0);
        b.add_floor(2.75, 0.3);

        assert_relative_eq!(b.floors()[0].altitude(), 0.2);
        assert_relative_eq!(b.overlaps()[0].altitude, 3.2, epsilon = 1e-12);
        assert_relative_eq!(b.floors()[1].altitude(), 0.2 + 3.0 + 0.25);
        assert_relative_eq!(b.total_height(), 0.2 + 3.0 + 0.25 + 2.75);
        assert_eq!(
            b.levels(),
            [Level::Foundation, Level::Floor(0), Level::Overlap(0), Level::Floor(1)]
        );
    }

    #[test]
    fn floor_without_foundation_starts_at_zero() {
        let mut b = Building::new(6.0, 6.0);
        let floor = b.add_floor(3.0, 0.4);
        assert!(floor.altitude().abs() < f64::EPSILON);
        assert!(b.foundation().is_none());
    }

    #[test]
    fn second_foundation_is_rejected() {
        let mut b = Building::new(6.0, 6.0);
        b.add_foundation(0.2, 0.0).unwrap();
        let err = b.add_foundation(0.2, 0.0).unwrap_err();
        assert!(matches!(err, DomusError::Model(ModelError::FoundationExists)));
        assert_relative_eq!(b.altitude(), 0.2);
    }

    #[test]
    fn floors_inherit_footprint() {
        let mut b = Building::new(10.5, 12.5);
        b.add_floor(3.0, 0.4);
        let floor = b.floor(0).unwrap();
        assert_relative_eq!(floor.width(), 10.5);
        assert_relative_eq!(floor.depth(), 12.5);
        assert!(b.floor(1).is_none());
    }
}
