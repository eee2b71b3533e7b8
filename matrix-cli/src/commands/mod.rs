pub mod expand;
pub mod validate;

use clap::Args;

use matrix_service::{MatrixLimits, LIMIT_AXIS, LIMIT_TAGS};

/// Expansion caps shared by every command
#[derive(Args, Debug, Clone, Copy)]
pub struct LimitArgs {
    /// Highest 0-based variable index kept on each axis
    #[arg(long, value_name = "N", default_value_t = LIMIT_TAGS)]
    pub limit_tags: usize,

    /// Highest 0-based permutation index emitted
    #[arg(long, value_name = "N", default_value_t = LIMIT_AXIS)]
    pub limit_axis: usize,
}

impl From<LimitArgs> for MatrixLimits {
    fn from(args: LimitArgs) -> Self {
        MatrixLimits {
            tags: args.limit_tags,
            axes: args.limit_axis,
        }
    }
}
