#![allow(clippy::unwrap_used)]

use approx::assert_relative_eq;
use domus::backend::CsgBackend;
use domus::csg::SolidStore;
use domus::geometry::PlanAxis;
use domus::model::{Building, Grid, WallKind, WallThicknesses};
use domus::operations::query::{BoundingBox, Volume};
use domus::placement::{FractionalWall, Frame, GapHole, Side, SpanWall};
use domus::render::{render_building, render_floor, RenderOptions, StoreyStrategy};
use domus::DomusError;

#[test]
fn foundation_and_first_storey() {
    let mut building = Building::new(10.0, 8.0);
    let foundation = building.add_foundation(0.2, 0.1).unwrap();
    let slab = foundation.slab(10.0, 8.0);
    assert_relative_eq!(slab.size.x, 9.8, epsilon = 1e-12);
    assert_relative_eq!(slab.size.y, 7.8, epsilon = 1e-12);
    assert_relative_eq!(slab.size.z, 0.2, epsilon = 1e-12);
    assert_relative_eq!(slab.location.z, 0.1, epsilon = 1e-12);

    let floor = building.add_floor(3.0, 0.3);
    assert_relative_eq!(floor.altitude(), 0.2);
    let left = floor.wall("left").unwrap();
    assert_relative_eq!(left.location().x, -10.0 / 2.0 + 0.3 / 2.0, epsilon = 1e-12);
    assert_relative_eq!(left.size().x, 0.3);
    assert_relative_eq!(left.size().y, 8.0);
    assert_relative_eq!(left.size().z, 3.0);
}

#[test]
fn second_storey_altitude() {
    let (h0, h1, h2, h3) = (0.2, 3.0, 0.25, 2.8);
    let mut building = Building::new(10.0, 8.0);
    building.add_foundation(h0, 0.0).unwrap();
    building.add_floor(h1, 0.3);
    building.add_overlap(h2, 0.0);
    building.add_floor(h3, 0.3);
    assert_eq!(building.floors()[1].altitude(), h0 + h1 + h2);
}

#[test]
fn two_storey_house_renders() {
    let mut building = Building::new(10.5, 12.5);
    building.add_foundation(0.2, 0.1).unwrap();

    let ground_floor = building.add_floor_with(3.0, WallThicknesses::default());
    for facade in ["front", "back"] {
        ground_floor
            .wall_mut(facade)
            .unwrap()
            .add_hole_row(PlanAxis::Width, &[-0.66, 0.0, 0.66], 2.08, 1.42, 0.5);
    }
    for side in ["left", "right"] {
        ground_floor
            .wall_mut(side)
            .unwrap()
            .add_hole_row(PlanAxis::Depth, &[0.66, 0.0, -0.66], 2.08, 1.42, 0.5);
    }
    ground_floor
        .add_depth_wall("spine", 0.0, (-1.0, 1.0), WallKind::Internal)
        .unwrap()
        .add_depth_hole(-0.5, 1.0, 2.0, 0.0);
    let kitchen =
        SpanWall::new(PlanAxis::Width, "spine", "right", 0.2).with_offset(0.33, Frame::Inner);
    ground_floor.add_span_wall("kitchen", &kitchen).unwrap();
    let door = GapHole::new(PlanAxis::Width, Side::After, 0.3, 0.9, 2.0);
    ground_floor.add_gap_hole("kitchen", "spine", &door).unwrap();

    building.add_overlap(0.2, 0.05);
    let upper = building.add_floor(3.0, 0.4);
    let spans = [(-1.0, -0.33), (0.33, 1.0)];
    upper
        .add_segmented_wall("spine", PlanAxis::Depth, 0.0, &spans, WallKind::Internal)
        .unwrap();

    let mut store = SolidStore::new();
    let rendered = render_building(&building, &mut store, &RenderOptions::default()).unwrap();
    assert_eq!(rendered.floors.len(), 2);
    assert!(rendered.foundation.is_some());
    assert_eq!(store.len(), 4);

    let top = BoundingBox::new(rendered.floors[1].id()).execute(&store).unwrap();
    assert_relative_eq!(top.max.z, building.total_height(), epsilon = 1e-12);
    assert_relative_eq!(top.size().x, 10.5, epsilon = 1e-12);
}

#[test]
fn grid_walls_close_a_room() {
    let mut grid = Grid::new();
    grid.add_row("B", -1.5);
    grid.add_row_after("G", "B", 3.0).unwrap();
    grid.add_column("2", -2.0);
    grid.add_column_after("6", "2", 4.0).unwrap();

    let mut building = Building::new(10.0, 8.0);
    let floor = building.add_floor(3.0, 0.3);
    floor.add_grid_wall("south", &grid, "B:2", "B:6", WallKind::Internal).unwrap();
    floor.add_grid_wall("east", &grid, "B:6", "G:6", WallKind::Internal).unwrap();
    floor.add_grid_wall("north", &grid, "G:6", "G:2", WallKind::Internal).unwrap();
    floor.add_grid_wall("west", &grid, "G:2", "B:2", WallKind::Internal).unwrap();

    // Lettered lines fix y, numbered lines fix x.
    let south = floor.wall("south").unwrap();
    assert_relative_eq!(south.size().x, 4.2, epsilon = 1e-12);
    assert_relative_eq!(south.location().y, -1.5, epsilon = 1e-12);

    let mut store = SolidStore::new();
    let mut room = store.create_box(&floor.wall("south").unwrap().box_spec()).unwrap();
    for name in ["east", "north", "west"] {
        let wall = store.create_box(&floor.wall(name).unwrap().box_spec()).unwrap();
        store.union(&mut room, wall).unwrap();
    }
    // outer 4.2 x 3.2 ring minus inner 3.8 x 2.8, 3 m tall
    let volume = Volume::new(room.id()).execute(&store).unwrap();
    assert_relative_eq!(volume, (4.2 * 3.2 - 3.8 * 2.8) * 3.0, epsilon = 1e-9);

    assert!(matches!(
        floor.add_grid_wall("diagonal", &grid, "B:2", "G:6", WallKind::Thin),
        Err(DomusError::Placement(_))
    ));
}

#[test]
fn shell_cut_matches_wall_union_for_a_furnished_storey() {
    let mut building = Building::new(12.0, 9.0);
    let floor = building.add_floor(2.8, 0.35);
    floor.wall_mut("front").unwrap().add_width_hole(-0.5, 1.2, 1.4, 0.9);
    floor.wall_mut("right").unwrap().add_depth_hole(0.25, 1.0, 2.1, 0.0);
    // Reaches into the corner shared with the right wall.
    floor.wall_mut("front").unwrap().add_width_hole(0.9, 1.0, 2.0, 0.0);
    let hall = FractionalWall::new(PlanAxis::Width, 0.2, 0.15).with_frame(Frame::Inner);
    floor.add_fractional_wall("hall", &hall).unwrap();
    let bath =
        SpanWall::new(PlanAxis::Depth, "hall", "back", 0.1).with_offset(-0.4, Frame::Inner);
    floor.add_span_wall("bath", &bath).unwrap();

    let floor = &building.floors()[0];
    let volumes: Vec<f64> = [StoreyStrategy::WallUnion, StoreyStrategy::ShellCut]
        .into_iter()
        .map(|strategy| {
            let mut store = SolidStore::new();
            let options = RenderOptions::default().with_strategy(strategy).with_hole_clearance(0.0);
            let solid = render_floor(floor, &mut store, &options).unwrap();
            Volume::new(solid.id()).execute(&store).unwrap()
        })
        .collect();
    assert_relative_eq!(volumes[0], volumes[1], epsilon = 1e-9);
}
