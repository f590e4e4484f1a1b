//! Reader options.

use serde::{Deserialize, Serialize};

use crate::error::{BackReadError, Result};

/// Default number of bytes fetched per backward read.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Default line terminator.
pub const DEFAULT_TERMINATOR: char = '\n';

/// Options controlling how a reader walks a file backwards.
///
/// Output does not depend on `chunk_size`: every value of at least one byte
/// yields the same lines, including values smaller than a single multi-byte
/// character. Larger chunks only mean fewer read calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReaderOptions {
    /// Bytes requested per backward read
    pub chunk_size: usize,
    /// Character that ends a line
    pub terminator: char,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            terminator: DEFAULT_TERMINATOR,
        }
    }
}

impl ReaderOptions {
    /// Create options with the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the chunk size.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the line terminator.
    pub fn with_terminator(mut self, terminator: char) -> Self {
        self.terminator = terminator;
        self
    }

    /// Check the options are usable.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(BackReadError::InvalidOptions(
                "chunk_size must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Parse and validate options from a JSON document.
    #[cfg(feature = "json")]
    pub fn from_json_str(s: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(s)
            .map_err(|e| BackReadError::InvalidOptions(format!("json: {e}")))?;
        options.validate()?;
        Ok(options)
    }

    /// Parse and validate options from a YAML document.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let options: Self = serde_yaml::from_str(s)
            .map_err(|e| BackReadError::InvalidOptions(format!("yaml: {e}")))?;
        options.validate()?;
        Ok(options)
    }

    /// Parse and validate options from a TOML document.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let options: Self =
            toml::from_str(s).map_err(|e| BackReadError::InvalidOptions(format!("toml: {e}")))?;
        options.validate()?;
        Ok(options)
    }
}
