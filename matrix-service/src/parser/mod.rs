// Parser module for build matrices
// Decodes the matrix section of pipeline YAML into an ordered Matrix

pub mod error;
pub mod models;
pub mod yaml;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use models::{Matrix, MatrixDocument, MatrixVariable};
pub use yaml::MatrixParser;
