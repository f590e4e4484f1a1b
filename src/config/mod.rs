//! Configuration types for backward readers.
//!
//! This module provides:
//! - `ReaderOptions`: Chunk size and line terminator used by a reader
//! - Loaders for option files in JSON, YAML and TOML (feature-gated)

mod options;

pub use options::{DEFAULT_CHUNK_SIZE, DEFAULT_TERMINATOR, ReaderOptions};
