//! # backread
//!
//! Read UTF-8 text files line by line, from the last line to the first.
//!
//! ## Overview
//!
//! backread provides:
//! - **Backward iteration**: `BackwardLineReader` walks a file from its end in
//!   fixed-size chunks and yields lines lazily, last line first
//! - **Encoding safety**: a chunk never starts inside a multi-byte character,
//!   whatever the chunk size
//! - **Exact lines**: terminators are kept as they appear in the file, so the
//!   reversed output joined together is the original file
//! - **Typed errors**: missing files, unreadable paths, I/O failures and
//!   invalid UTF-8 are reported as distinct `BackReadError` variants
//! - **Sync and Async**: an async reader built on tokio with the same behavior
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use backread::{BackReaderBuilder, last_lines, ReaderOptions};
//!
//! fn main() -> Result<(), backread::BackReadError> {
//!     let reader = BackReaderBuilder::new()
//!         .chunk_size(8192)
//!         .open("server.log")?;
//!
//!     for line in reader.take(20) {
//!         print!("{}", line?);
//!     }
//!
//!     let tail = last_lines("server.log", 5, ReaderOptions::default())?;
//!     assert!(tail.len() <= 5);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `json` - Load `ReaderOptions` from JSON
//! - `yaml` - Load `ReaderOptions` from YAML
//! - `toml` - Load `ReaderOptions` from TOML
//! - `async` - `AsyncBackwardLineReader` on top of Tokio
//! - `miette` - Pretty error reporting with miette
//! - `cli` - The `backread` command-line tool
//!
//! ## Semantics
//!
//! - Reading `"a\nb\nc"` yields `"c"`, `"b\n"`, `"a\n"`; reading
//!   `"a\nb\nc\n"` yields `"c\n"`, `"b\n"`, `"a\n"`. A trailing terminator
//!   never produces an extra empty line.
//! - An empty file yields no lines and no error.
//! - An I/O or encoding error is yielded once; the reader then yields
//!   nothing. Reopen the file to start over.
//! - The reader holds its file handle until `close` is called or it is
//!   dropped.

// Core modules
pub mod builder;
pub mod config;
pub mod error;
pub mod io;
pub mod line;
pub mod reader;

mod buffer;
mod decode;
mod walk;

// Async modules (feature-gated)
#[cfg(feature = "async")]
pub mod reader_async;

// Re-exports for convenience
pub use builder::BackReaderBuilder;
pub use config::{DEFAULT_CHUNK_SIZE, DEFAULT_TERMINATOR, ReaderOptions};
pub use error::{BackReadError, Result, Stage};
pub use io::{FileSource, InMemorySource, ReadSeek, SeekableSource};
pub use line::Line;
pub use reader::{BackwardLineReader, last_lines, read_lines_rev};
pub use walk::ReaderState;

// Async re-exports
#[cfg(feature = "async")]
pub use io::{AsyncFileSource, AsyncInMemorySource, AsyncReadSeek, AsyncSeekableSource};
#[cfg(feature = "async")]
pub use reader_async::{AsyncBackwardLineReader, read_lines_rev_async};

// Command-line argument types (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::ReadDiagnostic;
