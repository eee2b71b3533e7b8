// Matrix Plan
// Expansion result together with the counts needed to report truncation

use crate::error::ServiceResult;
use crate::execution::axis::Axis;
use crate::execution::matrix::{MatrixExpander, MatrixLimits};
use crate::parser::{Matrix, MatrixParser};

use std::fs;
use std::path::Path;

/// A decoded matrix and the axes it expands to under a set of limits
#[derive(Debug, Clone)]
pub struct MatrixPlan {
    pub matrix: Matrix,
    pub limits: MatrixLimits,
    /// Permutations before any cap was applied
    pub permutations: usize,
    pub axes: Vec<Axis>,
}

impl MatrixPlan {
    pub fn new(matrix: Matrix, limits: MatrixLimits) -> Self {
        let expander = MatrixExpander::with_limits(limits);
        let axes = expander.expand_matrix(&matrix);
        Self {
            permutations: MatrixExpander::permutations(&matrix),
            matrix,
            limits,
            axes,
        }
    }

    pub fn parse(content: &str, limits: MatrixLimits) -> ServiceResult<Self> {
        let matrix = MatrixParser::parse(content)?;
        Ok(Self::new(matrix, limits))
    }

    pub fn from_file<P: AsRef<Path>>(path: P, limits: MatrixLimits) -> ServiceResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content, limits)
    }

    /// False when the document declares no matrix and a single default build applies
    pub fn is_matrix_build(&self) -> bool {
        !self.matrix.is_empty()
    }

    /// Axes dropped by the axis limit
    pub fn dropped_axes(&self) -> usize {
        self.permutations.saturating_sub(self.axes.len())
    }

    /// Variables dropped from every axis by the tag limit
    pub fn dropped_variables(&self) -> usize {
        if self.axes.is_empty() {
            return 0;
        }
        self.matrix.len().saturating_sub(self.limits.max_tags())
    }

    pub fn is_truncated(&self) -> bool {
        self.dropped_axes() > 0 || self.dropped_variables() > 0
    }
}
