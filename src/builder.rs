//! Builder for creating backward readers.

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use crate::config::ReaderOptions;
use crate::error::Result;
use crate::io::{ReadSeek, SeekableSource};
use crate::reader::BackwardLineReader;

#[derive(Debug, Clone, Default)]
pub struct BackReaderBuilder {
    options: ReaderOptions,
}

impl BackReaderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every option at once, e.g. with options loaded from a file.
    pub fn with_options(mut self, options: ReaderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.options.chunk_size = chunk_size;
        self
    }

    pub fn terminator(mut self, terminator: char) -> Self {
        self.options.terminator = terminator;
        self
    }

    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    pub fn open(self, path: impl AsRef<Path>) -> Result<BackwardLineReader<File>> {
        BackwardLineReader::open(path, self.options)
    }

    pub fn from_reader<R: Read + Seek>(
        self,
        id: impl Into<String>,
        handle: R,
    ) -> Result<BackwardLineReader<R>> {
        BackwardLineReader::from_reader(id, handle, self.options)
    }

    pub fn from_source(
        self,
        source: &dyn SeekableSource,
    ) -> Result<BackwardLineReader<Box<dyn ReadSeek + Send>>> {
        BackwardLineReader::from_source(source, self.options)
    }
}

#[cfg(feature = "async")]
mod async_build {
    use std::path::Path;

    use tokio::io::{AsyncRead, AsyncSeek};

    use super::BackReaderBuilder;
    use crate::error::Result;
    use crate::io::{AsyncReadSeek, AsyncSeekableSource};
    use crate::reader_async::AsyncBackwardLineReader;

    impl BackReaderBuilder {
        pub async fn open_async(
            self,
            path: impl AsRef<Path>,
        ) -> Result<AsyncBackwardLineReader<tokio::fs::File>> {
            AsyncBackwardLineReader::open(path, self.options).await
        }

        pub async fn from_async_reader<R: AsyncRead + AsyncSeek + Unpin>(
            self,
            id: impl Into<String>,
            handle: R,
        ) -> Result<AsyncBackwardLineReader<R>> {
            AsyncBackwardLineReader::from_reader(id, handle, self.options).await
        }

        pub async fn from_async_source(
            self,
            source: &dyn AsyncSeekableSource,
        ) -> Result<AsyncBackwardLineReader<Box<dyn AsyncReadSeek + Unpin + Send>>> {
            AsyncBackwardLineReader::from_source(source, self.options).await
        }
    }
}
