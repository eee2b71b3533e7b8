// Execution Planning Module
// Matrix expansion into the axes a pipeline runs

pub mod axis;
pub mod matrix;
pub mod plan;

pub use axis::Axis;
pub use matrix::{MatrixExpander, MatrixLimits, LIMIT_AXIS, LIMIT_TAGS};
pub use plan::MatrixPlan;
