// Parser error types with helpful error messages
// Carries line/column info, source context and fix suggestions for matrix documents

use std::fmt;

/// Detailed parse error with location and context
#[derive(Debug, Clone)]
pub struct ParseError {
    /// Error message
    pub message: String,
    /// Line number (1-indexed, 0 when unknown)
    pub line: usize,
    /// Column number (1-indexed, 0 when unknown)
    pub column: usize,
    /// Surrounding source lines
    pub context: String,
    pub suggestion: Option<String>,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// YAML syntax error
    YamlSyntax,
    /// Well-formed YAML with the wrong shape
    InvalidSchema,
    /// File could not be read
    IoError,
}

impl ParseError {
    pub fn new(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            message: message.into(),
            line,
            column,
            context: String::new(),
            suggestion: None,
            kind: ParseErrorKind::InvalidSchema,
        }
    }

    pub fn io_error(message: impl Into<String>) -> Self {
        Self::new(message, 0, 0).with_kind(ParseErrorKind::IoError)
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn with_kind(mut self, kind: ParseErrorKind) -> Self {
        self.kind = kind;
        self
    }

    /// Render the lines around the error location
    pub fn with_source_context(mut self, source: &str, context_lines: usize) -> Self {
        if self.line == 0 {
            return self;
        }

        let lines: Vec<&str> = source.lines().collect();
        let start = self.line.saturating_sub(context_lines + 1);
        let end = (self.line + context_lines).min(lines.len());

        let mut context = String::new();
        for (i, line) in lines.iter().enumerate().take(end).skip(start) {
            let line_num = i + 1;
            let prefix = if line_num == self.line { ">" } else { " " };
            context.push_str(&format!("{} {:4} | {}\n", prefix, line_num, line));

            if line_num == self.line && self.column > 0 {
                let indicator = " ".repeat(self.column.saturating_sub(1)) + "^";
                context.push_str(&format!("       | {}\n", indicator));
            }
        }

        self.context = context;
        self
    }

    /// Create from a serde_yaml error raised while decoding `source`
    pub fn from_yaml_error(err: &serde_yaml::Error, source: &str, kind: ParseErrorKind) -> Self {
        let (line, column) = err
            .location()
            .map(|loc| (loc.line(), loc.column()))
            .unwrap_or((0, 0));

        let msg = err.to_string();

        let mut error = ParseError::new(format_yaml_error_message(&msg), line, column)
            .with_kind(kind)
            .with_source_context(source, 2);
        error.suggestion = suggest_yaml_fix(&msg, source, line);
        error
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;
        if self.line > 0 {
            writeln!(f, "  --> line {}:{}", self.line, self.column)?;
        }

        if !self.context.is_empty() {
            writeln!(f)?;
            write!(f, "{}", self.context)?;
        }

        if let Some(suggestion) = &self.suggestion {
            writeln!(f)?;
            writeln!(f, "help: {}", suggestion)?;
        }

        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Strip serde_yaml's location suffix and reword type errors
fn format_yaml_error_message(msg: &str) -> String {
    if msg.contains("invalid type") {
        if let (Some(expected), Some(found)) = (
            extract_between(msg, "expected ", " at"),
            extract_between(msg, "invalid type: ", ","),
        ) {
            return match msg.find(": invalid type") {
                Some(idx) => format!("{}: expected {}, but found {}", &msg[..idx], expected, found),
                None => format!("expected {}, but found {}", expected, found),
            };
        }
    }

    match msg.find(" at line ") {
        Some(idx) => msg[..idx].to_string(),
        None => msg.to_string(),
    }
}

fn extract_between(msg: &str, prefix: &str, suffix: &str) -> Option<String> {
    let start = msg.find(prefix)? + prefix.len();
    let end = msg[start..].find(suffix).map(|i| i + start).unwrap_or(msg.len());
    Some(msg[start..end].to_string())
}

/// Suggest fixes for common matrix mistakes
fn suggest_yaml_fix(msg: &str, source: &str, line: usize) -> Option<String> {
    let lines: Vec<&str> = source.lines().collect();
    let error_line = lines.get(line.saturating_sub(1)).copied().unwrap_or("");

    if msg.contains("expected a sequence") {
        return Some(
            "each matrix variable must map to a list of values, e.g. `GO_VERSION: [\"1.8\", \"1.9\"]`"
                .to_string(),
        );
    }

    if msg.contains("expected a mapping of variable names") {
        return Some(
            "the matrix section must be a mapping of variable names to lists, not a list"
                .to_string(),
        );
    }

    if msg.contains("expected a string") {
        return Some(
            "matrix values must be plain scalars; nested lists and mappings are not supported"
                .to_string(),
        );
    }

    if error_line.starts_with('\t') {
        return Some(
            "YAML prefers spaces over tabs for indentation. Replace tabs with spaces.".to_string(),
        );
    }

    None
}

/// Result type for parser operations
pub type ParseResult<T> = Result<T, ParseError>;
