//! Argument types for the `backread` command-line tool.
//!
//! The types parse flag values with the `sarge` crate.

mod sarge;

/// Files named with `-f/--file`.
///
/// The flag can be repeated and each value may hold several
/// comma-separated paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputFiles(pub Vec<String>);

impl InputFiles {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A non-negative count such as `--chunk-size` or `--lines`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Count(pub usize);
