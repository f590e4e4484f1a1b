//! Seekable byte sources a backward reader can be built from.
//!
//! This module provides:
//! - `SeekableSource`: Trait for providers of seekable byte handles
//! - `FileSource`: Files on disk
//! - `InMemorySource`: Byte buffers, mostly for testing

mod memory;
mod source;
mod std_io;

pub use memory::InMemorySource;
pub use source::{ReadSeek, SeekableSource};
pub use std_io::FileSource;
pub(crate) use std_io::open_regular_file;

// Async I/O support
#[cfg(feature = "async")]
mod async_source;
#[cfg(feature = "async")]
mod async_std_io;

#[cfg(feature = "async")]
pub use async_source::{AsyncReadSeek, AsyncSeekableSource};
#[cfg(feature = "async")]
pub use async_std_io::AsyncFileSource;
#[cfg(feature = "async")]
pub(crate) use async_std_io::open_regular_file as open_regular_file_async;
#[cfg(feature = "async")]
pub use memory::AsyncInMemorySource;
