mod aabb;
mod axis;
mod box_spec;

pub use aabb::Aabb;
pub use axis::PlanAxis;
pub use box_spec::BoxSpec;
