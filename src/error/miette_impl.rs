//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::BackReadError;

/// A diagnostic wrapper for reader errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct ReadDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

impl From<BackReadError> for ReadDiagnostic {
    fn from(e: BackReadError) -> Self {
        let help = match &e {
            BackReadError::FileNotFound { .. } => "Check that the path exists",
            BackReadError::NotReadable { .. } => {
                "The path must name a regular file you are allowed to read"
            }
            BackReadError::Io { .. } => "The file could not be read; it may have changed on disk",
            BackReadError::Encoding { .. } => "The file is not valid UTF-8",
            BackReadError::InvalidOptions(_) => "The chunk size must be at least 1 byte",
        };
        let message = match e.target() {
            Some(target) => format!("failed to read '{}' backwards", target),
            None => "failed to configure backward reader".to_string(),
        };
        ReadDiagnostic {
            message,
            source: Some(Box::new(e)),
            help: Some(help.into()),
            severity: Severity::Error,
        }
    }
}

impl From<BackReadError> for miette::Report {
    fn from(e: BackReadError) -> Self {
        miette::Report::new(ReadDiagnostic::from(e))
    }
}
