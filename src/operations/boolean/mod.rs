mod classify;
mod engine;
mod subtract;
mod union;

pub use classify::{classify_point_in_node, classify_point_in_solid, PointClassification};
pub use engine::BooleanOp;
pub use subtract::Subtract;
pub use union::Union;
