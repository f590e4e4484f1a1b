//! Async file-backed sources.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::std_io::not_regular_file;
use super::{AsyncReadSeek, AsyncSeekableSource};

/// Async source reading a file on disk.
#[derive(Debug, Clone)]
pub struct AsyncFileSource {
    id: String,
    path: PathBuf,
}

impl AsyncFileSource {
    /// Create a new async file source.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let id = path.to_string_lossy().into_owned();
        Self { id, path }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl AsyncSeekableSource for AsyncFileSource {
    fn id(&self) -> &str {
        &self.id
    }

    async fn open(&self) -> io::Result<Box<dyn AsyncReadSeek + Unpin + Send>> {
        Ok(Box::new(open_regular_file(&self.path).await?))
    }
}

/// Async counterpart of the regular-file check done for sync sources.
pub(crate) async fn open_regular_file(path: &Path) -> io::Result<tokio::fs::File> {
    let meta = tokio::fs::metadata(path).await?;
    if !meta.is_file() {
        return Err(not_regular_file(&meta));
    }
    tokio::fs::File::open(path).await
}
