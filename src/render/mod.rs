//! Drives a [`CsgBackend`] from a finished [`Building`].
//!
//! Walls are built in their own frame (a box at the origin minus its hole
//! cutters), then moved into the storey frame. Storeys are assembled at the
//! origin and lifted to their altitude last.

mod options;

pub use options::{Materials, RenderOptions, StoreyStrategy};

use crate::backend::{CsgBackend, MaterialRef};
use crate::error::Result;
use crate::geometry::BoxSpec;
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::model::{Building, Floor, Wall};

/// Thickness of the ground plane and footprint marker plates.
pub const MARKER_THICKNESS: f64 = 0.001;

/// Solids produced for a building, in stacking order.
#[derive(Debug)]
pub struct RenderedBuilding<S> {
    pub ground: Option<S>,
    pub footprint: Option<S>,
    pub foundation: Option<S>,
    pub overlaps: Vec<S>,
    pub floors: Vec<S>,
}

/// Renders every part of `building`.
///
/// # Errors
///
/// Propagates the first backend failure; nothing rendered before it is
/// returned.
pub fn render_building<B: CsgBackend>(
    building: &Building,
    backend: &mut B,
    options: &RenderOptions,
) -> Result<RenderedBuilding<B::Solid>> {
    let (width, depth) = (building.width(), building.depth());
    tracing::debug!(
        width,
        depth,
        floors = building.floors().len(),
        overlaps = building.overlaps().len(),
        "rendering building"
    );

    let ground = match options.ground {
        Some((gw, gd)) => {
            let spec = BoxSpec::new(
                Vector3::new(gw, gd, MARKER_THICKNESS),
                Point3::new(0.0, 0.0, -MARKER_THICKNESS / 2.0),
            );
            Some(finish(backend, spec, "ground", options.materials.ground.as_ref(), options)?)
        }
        None => None,
    };

    let footprint = if options.footprint_marker {
        let spec = BoxSpec::new(
            Vector3::new(width, depth, MARKER_THICKNESS),
            Point3::new(0.0, 0.0, MARKER_THICKNESS / 2.0),
        );
        Some(finish(backend, spec, "bounds", None, options)?)
    } else {
        None
    };

    let foundation = match building.foundation() {
        Some(foundation) => {
            let spec = foundation.slab(width, depth);
            Some(finish(backend, spec, "foundation", options.materials.slabs.as_ref(), options)?)
        }
        None => None,
    };

    let mut overlaps = Vec::with_capacity(building.overlaps().len());
    for (i, overlap) in building.overlaps().iter().enumerate() {
        let spec = overlap.slab(width, depth);
        let name = format!("overlap{}", i + 1);
        overlaps.push(finish(backend, spec, &name, options.materials.slabs.as_ref(), options)?);
    }

    let mut floors = Vec::with_capacity(building.floors().len());
    for (i, floor) in building.floors().iter().enumerate() {
        let mut solid = render_floor(floor, backend, options)?;
        backend.name(&solid, &format!("floor{}", i + 1))?;
        orient(backend, &mut solid, options)?;
        floors.push(solid);
    }

    Ok(RenderedBuilding {
        ground,
        footprint,
        foundation,
        overlaps,
        floors,
    })
}

/// Renders one storey as a single solid placed at its altitude.
///
/// # Errors
///
/// Propagates the first backend failure.
pub fn render_floor<B: CsgBackend>(
    floor: &Floor,
    backend: &mut B,
    options: &RenderOptions,
) -> Result<B::Solid> {
    tracing::debug!(
        altitude = floor.altitude(),
        walls = floor.wall_count(),
        strategy = ?options.strategy,
        "rendering storey"
    );

    let mut storey = match options.strategy {
        StoreyStrategy::WallUnion => union_walls(floor.walls(), backend, options)?,
        StoreyStrategy::ShellCut => shell(floor, backend, options)?,
    };
    if let Some(material) = &options.materials.walls {
        backend.assign_material(&storey, material)?;
    }

    let lift = Vector3::new(0.0, 0.0, floor.altitude() + floor.height() / 2.0);
    backend.translate(&mut storey, &lift)?;
    Ok(storey)
}

/// Renders a wall with its openings cut, in the storey frame.
///
/// # Errors
///
/// Propagates the first backend failure.
pub fn render_wall<B: CsgBackend>(
    wall: &Wall,
    backend: &mut B,
    options: &RenderOptions,
) -> Result<B::Solid> {
    let mut solid = backend.create_box(&BoxSpec::new(wall.size(), Point3::origin()))?;
    for hole in wall.holes() {
        let cutter = backend.create_box(&hole.box_spec().grown(options.hole_clearance))?;
        tracing::trace!(wall = wall.name(), location = ?hole.location, "cutting hole");
        backend.subtract(&mut solid, cutter)?;
    }
    backend.translate(&mut solid, &wall.location().coords)?;
    Ok(solid)
}

fn union_walls<'a, B: CsgBackend>(
    walls: impl Iterator<Item = &'a Wall>,
    backend: &mut B,
    options: &RenderOptions,
) -> Result<B::Solid> {
    let mut storey: Option<B::Solid> = None;
    for wall in walls {
        let solid = render_wall(wall, backend, options)?;
        match storey.as_mut() {
            Some(target) => backend.union(target, solid)?,
            None => storey = Some(solid),
        }
    }
    match storey {
        Some(storey) => Ok(storey),
        // A floor always has its boundary walls.
        None => backend.create_box(&BoxSpec::new(Vector3::zeros(), Point3::origin())),
    }
}

/// Footprint slab minus the inner slab, with boundary openings cut and
/// interior walls merged in.
fn shell<B: CsgBackend>(
    floor: &Floor,
    backend: &mut B,
    options: &RenderOptions,
) -> Result<B::Solid> {
    let height = floor.height();
    let mut storey = backend.create_box(&BoxSpec::new(
        Vector3::new(floor.width(), floor.depth(), height),
        Point3::origin(),
    ))?;
    // The inner slab only overshoots vertically so the walls keep their thickness.
    let inner = backend.create_box(&BoxSpec::new(
        Vector3::new(
            floor.inner_width(),
            floor.inner_depth(),
            height + 2.0 * options.hole_clearance,
        ),
        Point3::origin(),
    ))?;
    backend.subtract(&mut storey, inner)?;

    let boundaries = floor.boundary_walls();
    for (i, wall) in boundaries.iter().enumerate() {
        let offset = wall.location().coords;
        for hole in wall.holes() {
            let spec = hole.box_spec().translated(&offset).grown(options.hole_clearance);
            let mut cutter = backend.create_box(&spec)?;
            // An opening only cuts its own wall; corners shared with the
            // other boundary walls stay solid.
            for (_, other) in boundaries.iter().enumerate().filter(|(j, _)| *j != i) {
                let kept = backend.create_box(&other.box_spec())?;
                backend.subtract(&mut cutter, kept)?;
            }
            backend.subtract(&mut storey, cutter)?;
        }
    }

    for wall in floor.interior_walls() {
        let solid = render_wall(wall, backend, options)?;
        backend.union(&mut storey, solid)?;
    }
    Ok(storey)
}

/// Creates a named slab-like solid and applies the building orientation.
fn finish<B: CsgBackend>(
    backend: &mut B,
    spec: BoxSpec,
    name: &str,
    material: Option<&MaterialRef>,
    options: &RenderOptions,
) -> Result<B::Solid> {
    let mut solid = backend.create_box(&spec)?;
    backend.name(&solid, name)?;
    if let Some(material) = material {
        backend.assign_material(&solid, material)?;
    }
    orient(backend, &mut solid, options)?;
    Ok(solid)
}

fn orient<B: CsgBackend>(
    backend: &mut B,
    solid: &mut B::Solid,
    options: &RenderOptions,
) -> Result<()> {
    if options.orientation.abs() > TOLERANCE {
        backend.rotate_z(solid, &Point3::origin(), options.orientation)?;
    }
    Ok(())
}
