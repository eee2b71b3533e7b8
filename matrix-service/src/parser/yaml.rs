// Matrix YAML Parser
// Decodes the matrix section of a pipeline document and expands it into axes

use crate::execution::{Axis, MatrixExpander};
use crate::parser::error::{ParseError, ParseErrorKind, ParseResult};
use crate::parser::models::{Matrix, MatrixDocument};

use serde::de::IgnoredAny;

use std::fs;
use std::path::Path;

/// Decoder for the `matrix` section of pipeline YAML files
pub struct MatrixParser;

impl MatrixParser {
    /// Parse the matrix section from a YAML string.
    ///
    /// A document without a `matrix` key yields an empty matrix.
    pub fn parse(content: &str) -> ParseResult<Matrix> {
        if content.trim().is_empty() {
            return Ok(Matrix::new());
        }

        // Syntax errors take precedence over shape errors
        serde_yaml::from_str::<IgnoredAny>(content).map_err(|e| {
            ParseError::from_yaml_error(&e, content, ParseErrorKind::YamlSyntax)
        })?;

        let document: MatrixDocument = serde_yaml::from_str(content).map_err(|e| {
            ParseError::from_yaml_error(&e, content, ParseErrorKind::InvalidSchema)
        })?;

        tracing::debug!(variables = document.matrix.len(), "parsed build matrix");
        Ok(document.matrix)
    }

    /// Parse the matrix section from a file
    pub fn parse_file<P: AsRef<Path>>(path: P) -> ParseResult<Matrix> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ParseError::io_error(format!("failed to read {}: {}", path.display(), e))
        })?;

        Self::parse(&content)
    }

    /// Parse the matrix section and expand it with the default limits.
    ///
    /// Returns an empty list when the document has no matrix; deciding what a
    /// non-matrix build runs is left to the caller.
    pub fn parse_axes(content: &str) -> ParseResult<Vec<Axis>> {
        let matrix = Self::parse(content)?;
        if matrix.is_empty() {
            return Ok(Vec::new());
        }
        Ok(MatrixExpander::expand(&matrix))
    }
}
