//! CLI support for caption-lang
//!
//! Provides programmatic access to the caption CLI functionality for
//! embedding in host tooling.

mod check;
mod inspect;

pub use check::{execute_eval, EvalOptions, EvalResult};
pub use inspect::dump_tokens;

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Lexical, syntax, or evaluation error from the expression core
    Expr(crate::ExprError),
    /// Invalid JSON variable bindings
    Json(serde_json::Error),
    /// IO error
    Io(io::Error),
    /// Malformed variable binding
    BadBinding(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Expr(e) => write!(f, "{}", e),
            CliError::Json(e) => write!(f, "Invalid JSON bindings: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::BadBinding(b) => {
                write!(f, "Invalid variable binding: {} (expected name=value)", b)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Expr(e) => Some(e),
            CliError::Json(e) => Some(e),
            CliError::Io(e) => Some(e),
            CliError::BadBinding(_) => None,
        }
    }
}

impl From<crate::ExprError> for CliError {
    fn from(e: crate::ExprError) -> Self {
        CliError::Expr(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
