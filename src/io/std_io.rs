//! File-backed sources.

use std::fs::{File, Metadata};
use std::io;
use std::path::{Path, PathBuf};

use super::{ReadSeek, SeekableSource};

/// Source reading a file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    id: String,
    path: PathBuf,
}

impl FileSource {
    /// Create a new file source.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let id = path.to_string_lossy().into_owned();
        Self { id, path }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the path currently names a regular file.
    pub fn is_file(&self) -> bool {
        self.path.is_file()
    }

    /// Size of the file in bytes.
    pub fn size(&self) -> io::Result<u64> {
        Ok(std::fs::metadata(&self.path)?.len())
    }
}

impl SeekableSource for FileSource {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self) -> io::Result<Box<dyn ReadSeek + Send>> {
        Ok(Box::new(open_regular_file(&self.path)?))
    }
}

/// Open `path` for reading, refusing anything that is not a regular file.
pub(crate) fn open_regular_file(path: &Path) -> io::Result<File> {
    let meta = std::fs::metadata(path)?;
    if !meta.is_file() {
        return Err(not_regular_file(&meta));
    }
    File::open(path)
}

/// Error for a path that exists but is a directory, FIFO, device or socket.
pub(crate) fn not_regular_file(meta: &Metadata) -> io::Error {
    if meta.is_dir() {
        io::Error::new(io::ErrorKind::IsADirectory, "path names a directory")
    } else {
        io::Error::new(io::ErrorKind::InvalidInput, "path does not name a regular file")
    }
}
