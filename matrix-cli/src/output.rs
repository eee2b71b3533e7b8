// Output formatting helpers for CLI commands
// Status goes to stderr so stdout carries only the expanded axes

use matrix_service::ParseError;

/// Print a status message: "  Status message"
pub fn status(action: &str, message: &str) {
    eprintln!("\x1b[1;36m{:>12}\x1b[0m {}", action, message);
}

/// Print a success message with checkmark
pub fn success(message: &str) {
    eprintln!("\x1b[1;32m  \u{2713}\x1b[0m {}", message);
}

/// Print a check/pass item
pub fn check(message: &str) {
    eprintln!("\x1b[32m  \u{2713}\x1b[0m {}", message);
}

/// Print a warning message
pub fn warning(message: &str) {
    eprintln!("\x1b[33m  !\x1b[0m {}", message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("\x1b[1;31merror:\x1b[0m {}", message);
}

/// Print an info message
pub fn info(message: &str) {
    eprintln!("\x1b[36m  i\x1b[0m {}", message);
}

/// Print a decode error with its location, context and suggestion
pub fn parse_error(err: &ParseError) {
    if err.line > 0 {
        error(&format!("{} (line {}:{})", err.message, err.line, err.column));
    } else {
        error(&err.message);
    }
    if !err.context.is_empty() {
        eprint!("{}", err.context);
    }
    if let Some(suggestion) = &err.suggestion {
        info(&format!("Suggestion: {}", suggestion));
    }
}
