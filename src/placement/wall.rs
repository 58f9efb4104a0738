use crate::error::{PlacementError, Result};
use crate::geometry::{BoxSpec, PlanAxis};
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::model::{Floor, Grid};

/// Reference extent for fractional wall coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Frame {
    /// Fractions of the full footprint. The cross-axis position is inset by
    /// half the wall's thickness, so `±1` puts the wall's outer face on the
    /// footprint edge.
    #[default]
    Outer,
    /// Fractions of the footprint inside the boundary walls. A span of
    /// `(-1, 1)` ends on the inner faces of the boundary walls.
    Inner,
}

impl Frame {
    /// Center coordinate along `axis` for cross fraction `at`.
    fn cross_position(self, floor: &Floor, axis: PlanAxis, at: f64, thickness: f64) -> f64 {
        match self {
            Self::Outer => (floor.extent(axis) - thickness) / 2.0 * at,
            Self::Inner => inner_extent(floor, axis) / 2.0 * at,
        }
    }

    /// Extent that along-axis fractions are measured against.
    fn span_extent(self, floor: &Floor, axis: PlanAxis) -> f64 {
        match self {
            Self::Outer => floor.extent(axis),
            Self::Inner => inner_extent(floor, axis),
        }
    }
}

fn inner_extent(floor: &Floor, axis: PlanAxis) -> f64 {
    floor.extent(axis) - 2.0 * floor.thickness()
}

/// Assembles a wall box from its along-axis and cross-axis extents.
fn wall_box(
    axis: PlanAxis,
    length: f64,
    along: f64,
    thickness: f64,
    cross: f64,
    height: f64,
) -> BoxSpec {
    match axis {
        PlanAxis::Width => BoxSpec::new(
            Vector3::new(length, thickness, height),
            Point3::new(along, cross, 0.0),
        ),
        PlanAxis::Depth => BoxSpec::new(
            Vector3::new(thickness, length, height),
            Point3::new(cross, along, 0.0),
        ),
    }
}

/// Places a wall by fractions of the storey footprint.
///
/// The wall runs along `axis` from fraction `span.0` to `span.1` (each in
/// `[-1, 1]`) and sits at fraction `at` of the cross axis. It is as tall as
/// the storey.
#[derive(Debug, Clone, Copy)]
pub struct FractionalWall {
    axis: PlanAxis,
    at: f64,
    span: (f64, f64),
    thickness: f64,
    frame: Frame,
}

impl FractionalWall {
    /// Creates a full-length wall in the outer frame.
    #[must_use]
    pub fn new(axis: PlanAxis, at: f64, thickness: f64) -> Self {
        Self {
            axis,
            at,
            span: (-1.0, 1.0),
            thickness,
            frame: Frame::Outer,
        }
    }

    #[must_use]
    pub fn with_span(mut self, span: (f64, f64)) -> Self {
        self.span = span;
        self
    }

    #[must_use]
    pub fn with_frame(mut self, frame: Frame) -> Self {
        self.frame = frame;
        self
    }

    /// Computes the wall box in the storey frame.
    #[must_use]
    pub fn execute(&self, floor: &Floor) -> BoxSpec {
        let (from, to) = self.span;
        let extent = self.frame.span_extent(floor, self.axis);
        let length = extent * (to - from) / 2.0;
        let along = extent * (to + from) / 4.0;
        let cross = self
            .frame
            .cross_position(floor, self.axis.cross(), self.at, self.thickness);
        wall_box(self.axis, length, along, self.thickness, cross, floor.height())
    }
}

/// Places a wall that exactly fills the gap between two existing walls.
///
/// Along `axis` the wall starts at the upper bound of `from` and ends at the
/// lower bound of `to`; if either reference moves, re-placing this wall
/// follows it. The cross-axis position is a fraction, as for
/// [`FractionalWall`].
#[derive(Debug, Clone)]
pub struct SpanWall {
    axis: PlanAxis,
    from: String,
    to: String,
    thickness: f64,
    at: f64,
    frame: Frame,
}

impl SpanWall {
    /// Creates a span wall centered on the cross axis.
    #[must_use]
    pub fn new(axis: PlanAxis, from: &str, to: &str, thickness: f64) -> Self {
        Self {
            axis,
            from: from.to_owned(),
            to: to.to_owned(),
            thickness,
            at: 0.0,
            frame: Frame::Outer,
        }
    }

    /// Moves the wall to cross fraction `at` measured in `frame`.
    #[must_use]
    pub fn with_offset(mut self, at: f64, frame: Frame) -> Self {
        self.at = at;
        self.frame = frame;
        self
    }

    /// Computes the wall box in the storey frame.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::WallNotFound` if a reference wall is missing.
    pub fn execute(&self, floor: &Floor) -> Result<BoxSpec> {
        let start = floor.wall(&self.from)?.box_spec().upper(self.axis);
        let end = floor.wall(&self.to)?.box_spec().lower(self.axis);
        let cross = self
            .frame
            .cross_position(floor, self.axis.cross(), self.at, self.thickness);
        Ok(wall_box(
            self.axis,
            end - start,
            (start + end) / 2.0,
            self.thickness,
            cross,
            floor.height(),
        ))
    }
}

/// Places a wall on a plan grid line between two nodes.
///
/// The wall is centered on the shared grid line and extends half its
/// thickness past each node, so walls meeting at a node close the corner.
#[derive(Debug, Clone)]
pub struct GridWall {
    from: String,
    to: String,
    thickness: f64,
}

impl GridWall {
    /// Creates a wall between nodes written `"<row>:<column>"`.
    #[must_use]
    pub fn new(from: &str, to: &str, thickness: f64) -> Self {
        Self {
            from: from.to_owned(),
            to: to.to_owned(),
            thickness,
        }
    }

    /// Computes the wall box in the storey frame.
    ///
    /// # Errors
    ///
    /// Returns an error if a node cannot be resolved, or
    /// `PlacementError::NotAxisAligned` if the nodes share no grid line.
    pub fn execute(&self, grid: &Grid, height: f64) -> Result<BoxSpec> {
        let (x0, y0) = grid.node(&self.from)?;
        let (x1, y1) = grid.node(&self.to)?;
        let t = self.thickness;

        if (x0 - x1).abs() < TOLERANCE {
            let length = (y1 - y0).abs() + t;
            Ok(wall_box(PlanAxis::Depth, length, (y0 + y1) / 2.0, t, x0, height))
        } else if (y0 - y1).abs() < TOLERANCE {
            let length = (x1 - x0).abs() + t;
            Ok(wall_box(PlanAxis::Width, length, (x0 + x1) / 2.0, t, y0, height))
        } else {
            Err(PlacementError::NotAxisAligned {
                from: self.from.clone(),
                to: self.to.clone(),
            }
            .into())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::DomusError;
    use crate::model::{WallKind, WallThicknesses};

    fn floor() -> Floor {
        Floor::new(10.0, 8.0, 3.0, WallThicknesses::with_external(0.3), 0.0)
    }

    #[test]
    fn outer_frame_full_span() {
        let spec = FractionalWall::new(PlanAxis::Width, 0.5, 0.2).execute(&floor());
        assert_relative_eq!(spec.size.x, 10.0);
        assert_relative_eq!(spec.size.y, 0.2);
        assert_relative_eq!(spec.size.z, 3.0);
        assert_relative_eq!(spec.location.y, (8.0 - 0.2) / 2.0 * 0.5);
    }

    #[test]
    fn outer_frame_partial_span() {
        let spec = FractionalWall::new(PlanAxis::Depth, 0.0, 0.2)
            .with_span((0.0, 1.0))
            .execute(&floor());
        assert_relative_eq!(spec.front(), 0.0);
        assert_relative_eq!(spec.back(), 4.0);
    }

    #[test]
    fn inner_frame_meets_boundary_faces() {
        let f = floor();
        let spec = FractionalWall::new(PlanAxis::Width, 0.0, 0.2)
            .with_frame(Frame::Inner)
            .execute(&f);
        assert_relative_eq!(spec.left(), f.wall("left").unwrap().bound_right(), epsilon = 1e-12);
        assert_relative_eq!(spec.right(), f.wall("right").unwrap().bound_left(), epsilon = 1e-12);

        let spec = FractionalWall::new(PlanAxis::Width, 1.0, 0.2)
            .with_frame(Frame::Inner)
            .execute(&f);
        let back = f.wall("back").unwrap();
        assert_relative_eq!(spec.location.y, back.bound_front(), epsilon = 1e-12);
    }

    #[test]
    fn span_wall_fills_gap() {
        let mut f = floor();
        f.add_depth_wall("partition", -0.2, (-1.0, 1.0), WallKind::Internal).unwrap();
        let span = SpanWall::new(PlanAxis::Width, "partition", "right", 0.1)
            .with_offset(0.25, Frame::Inner);
        let spec = span.execute(&f).unwrap();

        let partition = f.wall("partition").unwrap();
        let right = f.wall("right").unwrap();
        let gap = right.bound_left() - partition.bound_right();
        assert_relative_eq!(spec.size.x, gap, epsilon = 1e-12);
        assert_relative_eq!(spec.left(), partition.bound_right(), epsilon = 1e-12);
        assert_relative_eq!(spec.right(), right.bound_left(), epsilon = 1e-12);
        assert_relative_eq!(spec.location.y, f.inner_depth() / 2.0 * 0.25, epsilon = 1e-12);
    }

    #[test]
    fn span_wall_along_depth() {
        let f = floor();
        let spec = SpanWall::new(PlanAxis::Depth, "front", "back", 0.2).execute(&f).unwrap();
        assert_relative_eq!(spec.size.y, 8.0 - 2.0 * 0.3, epsilon = 1e-12);
        assert!(spec.location.x.abs() < 1e-12);
    }

    #[test]
    fn grid_wall_along_row() {
        let mut grid = Grid::new();
        grid.add_row("B", 1.5).add_column("2", 0.0).add_column("6", 4.0);
        let spec = GridWall::new("B:2", "B:6", 0.2).execute(&grid, 3.0).unwrap();
        assert_relative_eq!(spec.size.x, 4.2);
        assert_relative_eq!(spec.size.y, 0.2);
        assert_relative_eq!(spec.location.x, 2.0);
        assert_relative_eq!(spec.location.y, 1.5);
    }

    #[test]
    fn grid_wall_along_column() {
        let mut grid = Grid::new();
        grid.add_row("B", 0.0).add_row("G", 6.0).add_column("6", 2.0);
        let spec = GridWall::new("G:6", "B:6", 0.2).execute(&grid, 3.0).unwrap();
        assert_relative_eq!(spec.size.x, 0.2);
        assert_relative_eq!(spec.size.y, 6.2);
        assert_relative_eq!(spec.location.x, 2.0);
        assert_relative_eq!(spec.location.y, 3.0);
    }

    #[test]
    fn diagonal_grid_wall_is_rejected() {
        let mut grid = Grid::new();
        grid.add_row("A", 0.0).add_row("B", 1.0).add_column("1", 0.0).add_column("2", 1.0);
        let err = GridWall::new("A:1", "B:2", 0.2).execute(&grid, 3.0).unwrap_err();
        assert!(matches!(err, DomusError::Placement(PlacementError::NotAxisAligned { .. })));
    }
}
