//! Error types for backward line reading.
//!
//! This module provides:
//! - `Stage`: Indicates which I/O step failed
//! - `BackReadError`: Every failure a reader can report, with its target

use std::fmt;
use std::io;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Error while opening the handle or measuring its size
    Open,
    Seek,
    Read,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Open => write!(f, "Open"),
            Stage::Seek => write!(f, "Seek"),
            Stage::Read => write!(f, "Read"),
        }
    }
}

/// A failure raised while opening or iterating a backward reader.
///
/// `FileNotFound` and `NotReadable` only happen at open time. `Io` and
/// `Encoding` end iteration: the reader yields the error once and nothing
/// afterwards.
#[derive(Debug, Error)]
pub enum BackReadError {
    #[error("{target}: file not found")]
    FileNotFound {
        /// Identifier of the target (usually the file path)
        target: String,
        #[source]
        source: io::Error,
    },

    #[error("{target}: not a readable regular file: {source}")]
    NotReadable {
        target: String,
        #[source]
        source: io::Error,
    },

    #[error("[{stage}] {target}: {source}")]
    Io {
        /// Stage where the error occurred
        stage: Stage,
        target: String,
        #[source]
        source: io::Error,
    },

    /// The bytes at `offset` are not valid UTF-8, even after moving the chunk
    /// start back over a possible split character.
    #[error("{target}: invalid UTF-8 sequence at byte offset {offset}")]
    Encoding { target: String, offset: u64 },

    #[error("invalid reader options: {0}")]
    InvalidOptions(String),
}

impl BackReadError {
    pub(crate) fn io(stage: Stage, target: &str, source: io::Error) -> Self {
        BackReadError::Io {
            stage,
            target: target.to_string(),
            source,
        }
    }

    /// Classify an error returned while opening `target` for reading.
    pub(crate) fn on_open(target: &str, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => BackReadError::FileNotFound {
                target: target.to_string(),
                source,
            },
            io::ErrorKind::PermissionDenied
            | io::ErrorKind::IsADirectory
            | io::ErrorKind::InvalidInput => {
                BackReadError::NotReadable {
                    target: target.to_string(),
                    source,
                }
            }
            _ => BackReadError::io(Stage::Open, target, source),
        }
    }

    /// The target this error refers to, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            BackReadError::FileNotFound { target, .. }
            | BackReadError::NotReadable { target, .. }
            | BackReadError::Io { target, .. }
            | BackReadError::Encoding { target, .. } => Some(target),
            BackReadError::InvalidOptions(_) => None,
        }
    }

    /// Stage for I/O failures; open-time failures report `Stage::Open`.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            BackReadError::FileNotFound { .. } | BackReadError::NotReadable { .. } => {
                Some(Stage::Open)
            }
            BackReadError::Io { stage, .. } => Some(*stage),
            BackReadError::Encoding { .. } | BackReadError::InvalidOptions(_) => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = BackReadError> = std::result::Result<T, E>;

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
