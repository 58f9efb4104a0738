//! Builds a two-storey house and prints the rendered solids.
//!
//! Usage:
//! ```text
//! cargo run --example house
//! RUST_LOG=domus=debug cargo run --example house
//! ```

use domus::csg::SolidStore;
use domus::geometry::PlanAxis;
use domus::model::{Building, WallKind, WallThicknesses};
use domus::operations::query::{BoundingBox, Volume};
use domus::placement::{Frame, GapHole, Side, SpanWall};
use domus::render::{render_building, RenderOptions};

fn main() -> domus::Result<()> {
    // Default: WARN for everything, INFO for domus.
    // Override with RUST_LOG env var (e.g. RUST_LOG=domus=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("domus=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut house = Building::new(10.5, 12.5);
    house.add_foundation(0.2, 0.1)?;

    let ground = house.add_floor_with(3.0, WallThicknesses::default());
    for facade in ["front", "back"] {
        ground
            .wall_mut(facade)?
            .add_hole_row(PlanAxis::Width, &[-0.66, 0.0, 0.66], 2.08, 1.42, 0.5);
    }
    for side in ["left", "right"] {
        ground
            .wall_mut(side)?
            .add_hole_row(PlanAxis::Depth, &[0.66, 0.0, -0.66], 2.08, 1.42, 0.5);
    }
    let hall = ground.add_depth_wall("hall", 0.0, (-1.0, 1.0), WallKind::Internal)?;
    hall.add_depth_hole(-0.8, 1.0, 2.0, 0.0);
    hall.add_depth_hole(0.2, 1.0, 2.0, 0.0);
    let kitchen =
        SpanWall::new(PlanAxis::Width, "hall", "right", 0.2).with_offset(0.33, Frame::Inner);
    ground.add_span_wall("kitchen", &kitchen)?;
    ground.add_gap_hole(
        "kitchen",
        "hall",
        &GapHole::new(PlanAxis::Width, Side::After, 0.3, 0.9, 2.0),
    )?;

    house.add_overlap(0.2, 0.05);
    let upper = house.add_floor(3.0, 0.4);
    upper.add_segmented_wall(
        "hall",
        PlanAxis::Depth,
        0.0,
        &[(-1.0, -0.33), (0.33, 1.0)],
        WallKind::Internal,
    )?;
    upper
        .add_width_wall("landing", 0.33, (-1.0, 1.0), WallKind::Thin)?
        .add_width_hole(-0.2, 1.0, 2.0, 0.0);

    let mut store = SolidStore::new();
    let options = RenderOptions::default().with_ground(30.0, 50.0);
    let rendered = render_building(&house, &mut store, &options)?;

    for (i, floor) in rendered.floors.iter().enumerate() {
        let aabb = BoundingBox::new(floor.id()).execute(&store)?;
        let volume = Volume::new(floor.id()).execute(&store)?;
        println!(
            "floor{}: z {:.2}..{:.2}, wall volume {volume:.3} m3",
            i + 1,
            aabb.min.z,
            aabb.max.z
        );
    }
    println!("total height {:.2} m, {} solids", house.total_height(), store.len());
    Ok(())
}
