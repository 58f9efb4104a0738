use rustc_hash::FxHashMap;

use crate::error::{ModelError, Result};
use crate::geometry::PlanAxis;
use crate::placement::{FractionalWall, GapHole, GridWall, SpanWall};

use super::{Grid, Wall, WallKind, WallThicknesses};

/// Names of the boundary walls every storey starts with, in creation order.
pub const BOUNDARY_WALLS: [&str; 4] = ["left", "right", "front", "back"];

/// A storey: a footprint-sized set of named walls at a fixed altitude.
///
/// The four boundary walls are placed on construction. Interior walls are
/// added afterwards and may reference any wall added before them by name.
#[derive(Debug, Clone)]
pub struct Floor {
    width: f64,
    depth: f64,
    height: f64,
    altitude: f64,
    thicknesses: WallThicknesses,
    walls: Vec<Wall>,
    index: FxHashMap<String, usize>,
}

impl Floor {
    /// Creates a storey with its four boundary walls.
    #[must_use]
    pub fn new(
        width: f64,
        depth: f64,
        height: f64,
        thicknesses: WallThicknesses,
        altitude: f64,
    ) -> Self {
        let mut floor = Self {
            width,
            depth,
            height,
            altitude,
            thicknesses,
            walls: Vec::with_capacity(BOUNDARY_WALLS.len()),
            index: FxHashMap::default(),
        };

        let t = thicknesses.external;
        let boundaries = [
            FractionalWall::new(PlanAxis::Depth, -1.0, t),
            FractionalWall::new(PlanAxis::Depth, 1.0, t),
            FractionalWall::new(PlanAxis::Width, -1.0, t),
            FractionalWall::new(PlanAxis::Width, 1.0, t),
        ];
        for (name, placement) in BOUNDARY_WALLS.iter().zip(boundaries) {
            let spec = placement.execute(&floor);
            floor.index.insert((*name).to_owned(), floor.walls.len());
            floor.walls.push(Wall::from_box(*name, &spec));
        }
        floor
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn depth(&self) -> f64 {
        self.depth
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Elevation of the storey's base.
    #[must_use]
    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Thickness of the boundary walls.
    #[must_use]
    pub fn thickness(&self) -> f64 {
        self.thicknesses.external
    }

    #[must_use]
    pub fn thickness_of(&self, kind: WallKind) -> f64 {
        self.thicknesses.of(kind)
    }

    /// Width between the inner faces of the left and right walls.
    #[must_use]
    pub fn inner_width(&self) -> f64 {
        self.width - 2.0 * self.thickness()
    }

    /// Depth between the inner faces of the front and back walls.
    #[must_use]
    pub fn inner_depth(&self) -> f64 {
        self.depth - 2.0 * self.thickness()
    }

    /// Footprint extent along a plan axis.
    #[must_use]
    pub fn extent(&self, axis: PlanAxis) -> f64 {
        match axis {
            PlanAxis::Width => self.width,
            PlanAxis::Depth => self.depth,
        }
    }

    /// Looks up a wall by name.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::WallNotFound` if no wall has this name.
    pub fn wall(&self, name: &str) -> Result<&Wall> {
        self.index
            .get(name)
            .map(|&i| &self.walls[i])
            .ok_or_else(|| wall_not_found(name))
    }

    /// Looks up a wall by name for adding openings.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::WallNotFound` if no wall has this name.
    pub fn wall_mut(&mut self, name: &str) -> Result<&mut Wall> {
        match self.index.get(name) {
            Some(&i) => Ok(&mut self.walls[i]),
            None => Err(wall_not_found(name)),
        }
    }

    /// All walls in creation order, boundary walls first.
    pub fn walls(&self) -> impl Iterator<Item = &Wall> {
        self.walls.iter()
    }

    #[must_use]
    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// The `left`, `right`, `front` and `back` walls.
    #[must_use]
    pub fn boundary_walls(&self) -> &[Wall] {
        &self.walls[..BOUNDARY_WALLS.len()]
    }

    /// Walls added after the boundary walls, in creation order.
    #[must_use]
    pub fn interior_walls(&self) -> &[Wall] {
        &self.walls[BOUNDARY_WALLS.len()..]
    }

    /// Adds a precomputed wall, openings included, under `name`.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::DuplicateWall` if the name is taken.
    pub fn add_wall(&mut self, name: &str, mut wall: Wall) -> Result<&mut Wall> {
        if self.index.contains_key(name) {
            return Err(ModelError::DuplicateWall {
                name: name.to_owned(),
            }
            .into());
        }
        tracing::debug!(
            wall = name,
            size = ?wall.size(),
            location = ?wall.location(),
            holes = wall.holes().len(),
            "wall placed"
        );
        wall.rename(name);
        let i = self.walls.len();
        self.index.insert(name.to_owned(), i);
        self.walls.push(wall);
        Ok(&mut self.walls[i])
    }

    /// Adds a wall placed by fractions of the footprint.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::DuplicateWall` if the name is taken.
    pub fn add_fractional_wall(
        &mut self,
        name: &str,
        placement: &FractionalWall,
    ) -> Result<&mut Wall> {
        let spec = placement.execute(self);
        self.add_wall(name, Wall::from_box(name, &spec))
    }

    /// Adds a wall running along the width axis at cross fraction `at`,
    /// spanning fractions `span` of the footprint width.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::DuplicateWall` if the name is taken.
    pub fn add_width_wall(
        &mut self,
        name: &str,
        at: f64,
        span: (f64, f64),
        kind: WallKind,
    ) -> Result<&mut Wall> {
        let placement =
            FractionalWall::new(PlanAxis::Width, at, self.thickness_of(kind)).with_span(span);
        self.add_fractional_wall(name, &placement)
    }

    /// Adds a wall running along the depth axis at cross fraction `at`,
    /// spanning fractions `span` of the footprint depth.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::DuplicateWall` if the name is taken.
    pub fn add_depth_wall(
        &mut self,
        name: &str,
        at: f64,
        span: (f64, f64),
        kind: WallKind,
    ) -> Result<&mut Wall> {
        let placement =
            FractionalWall::new(PlanAxis::Depth, at, self.thickness_of(kind)).with_span(span);
        self.add_fractional_wall(name, &placement)
    }

    /// Adds collinear wall segments named `"{name}.0"`, `"{name}.1"`, ...
    ///
    /// # Errors
    ///
    /// Returns `ModelError::DuplicateWall` if a segment name is taken.
    pub fn add_segmented_wall(
        &mut self,
        name: &str,
        axis: PlanAxis,
        at: f64,
        spans: &[(f64, f64)],
        kind: WallKind,
    ) -> Result<()> {
        let thickness = self.thickness_of(kind);
        for (i, &span) in spans.iter().enumerate() {
            let placement = FractionalWall::new(axis, at, thickness).with_span(span);
            self.add_fractional_wall(&format!("{name}.{i}"), &placement)?;
        }
        Ok(())
    }

    /// Adds a wall filling the gap between two existing walls.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::WallNotFound` if a reference wall is missing, or
    /// `ModelError::DuplicateWall` if the name is taken.
    pub fn add_span_wall(&mut self, name: &str, placement: &SpanWall) -> Result<&mut Wall> {
        let spec = placement.execute(self)?;
        self.add_wall(name, Wall::from_box(name, &spec))
    }

    /// Adds a wall between two nodes of a plan grid.
    ///
    /// # Errors
    ///
    /// Returns an error if a grid node cannot be resolved, the nodes are not
    /// on a shared grid line, or the name is taken.
    pub fn add_grid_wall(
        &mut self,
        name: &str,
        grid: &Grid,
        from: &str,
        to: &str,
        kind: WallKind,
    ) -> Result<&mut Wall> {
        let spec = GridWall::new(from, to, self.thickness_of(kind)).execute(grid, self.height)?;
        self.add_wall(name, Wall::from_box(name, &spec))
    }

    /// Cuts an opening into `host` positioned against the edge of `reference`.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::WallNotFound` if either wall is missing.
    pub fn add_gap_hole(&mut self, host: &str, reference: &str, placement: &GapHole) -> Result<()> {
        let reference = self.wall(reference)?.box_spec();
        let host = self.wall_mut(host)?;
        let hole = placement.execute(host, &reference);
        host.add_hole(hole);
        Ok(())
    }
}

fn wall_not_found(name: &str) -> crate::error::DomusError {
    ModelError::WallNotFound {
        name: name.to_owned(),
    }
    .into()
}
