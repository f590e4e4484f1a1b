//! Seekable source trait definition.

use std::fmt::Debug;
use std::io::{Read, Seek};

/// A byte handle that can be read and repositioned.
pub trait ReadSeek: Read + Seek {}

impl<T: Read + Seek + ?Sized> ReadSeek for T {}

/// Trait for providers of seekable byte handles.
///
/// Implementors give a backward reader something to open. The returned
/// handle is owned exclusively by the reader until it is closed.
pub trait SeekableSource: Send + Sync + Debug {
    /// Returns a unique identifier for this source.
    ///
    /// This is used for error messages and logging.
    /// Convention: the file path for files.
    fn id(&self) -> &str;

    /// Open and return a new seekable handle.
    fn open(&self) -> std::io::Result<Box<dyn ReadSeek + Send>>;
}
