// Matrix Service Library
// Build matrix decoding and axis expansion for pipeline runs

pub mod error;
pub mod execution;
pub mod parser;

// Re-export commonly used types
pub use error::{ServiceError, ServiceResult};

// Re-export parser types
pub use parser::{Matrix, MatrixDocument, MatrixParser, ParseError, ParseErrorKind, ParseResult};

// Re-export execution types
pub use execution::{Axis, MatrixExpander, MatrixLimits, MatrixPlan, LIMIT_AXIS, LIMIT_TAGS};

/// Parse the matrix section of a YAML document and expand it into axes.
///
/// Returns an empty list for documents without a matrix.
pub fn parse_matrix(raw: &str) -> ParseResult<Vec<Axis>> {
    MatrixParser::parse_axes(raw)
}
