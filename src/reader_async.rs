//! Asynchronous backward line reader.

use std::io::{self, SeekFrom};
use std::path::Path;

use futures::stream::{self, BoxStream, StreamExt};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncSeek, AsyncSeekExt};

use crate::config::ReaderOptions;
use crate::decode::ChunkWindow;
use crate::error::{BackReadError, Result, Stage};
use crate::io::{AsyncReadSeek, AsyncSeekableSource, open_regular_file_async};
use crate::line::Line;
use crate::walk::{ReaderState, Walk};

/// Async counterpart of [`BackwardLineReader`](crate::BackwardLineReader).
///
/// Lines, errors and the state machine are identical; reads go through a
/// tokio handle instead of blocking the calling thread.
#[derive(Debug)]
pub struct AsyncBackwardLineReader<R = tokio::fs::File> {
    handle: Option<R>,
    walk: Walk,
}

impl AsyncBackwardLineReader<tokio::fs::File> {
    /// Open the file at `path` and position the reader at its end.
    pub async fn open(path: impl AsRef<Path>, options: ReaderOptions) -> Result<Self> {
        options.validate()?;
        let path = path.as_ref();
        let id = path.to_string_lossy().into_owned();
        let file = open_regular_file_async(path)
            .await
            .map_err(|e| BackReadError::on_open(&id, e))?;
        Self::from_reader(id, file, options).await
    }
}

impl AsyncBackwardLineReader<Box<dyn AsyncReadSeek + Unpin + Send>> {
    /// Open a handle from `source` and position the reader at its end.
    pub async fn from_source(
        source: &dyn AsyncSeekableSource,
        options: ReaderOptions,
    ) -> Result<Self> {
        options.validate()?;
        let handle = source
            .open()
            .await
            .map_err(|e| BackReadError::on_open(source.id(), e))?;
        Self::from_reader(source.id(), handle, options).await
    }
}

impl<R: AsyncRead + AsyncSeek + Unpin> AsyncBackwardLineReader<R> {
    /// Wrap an already opened handle. `id` names it in errors and logs.
    pub async fn from_reader(
        id: impl Into<String>,
        mut handle: R,
        options: ReaderOptions,
    ) -> Result<Self> {
        options.validate()?;
        let id = id.into();
        let size = handle
            .seek(SeekFrom::End(0))
            .await
            .map_err(|e| BackReadError::io(Stage::Open, &id, e))?;
        Ok(Self {
            handle: Some(handle),
            walk: Walk::new(id, size, options),
        })
    }

    pub fn id(&self) -> &str {
        self.walk.id()
    }

    pub fn options(&self) -> &ReaderOptions {
        self.walk.options()
    }

    pub fn file_size(&self) -> u64 {
        self.walk.size()
    }

    pub fn position(&self) -> u64 {
        self.walk.position()
    }

    pub fn state(&self) -> ReaderState {
        self.walk.state()
    }

    /// Return the next line towards the start of the source, or `None` once
    /// nothing is left to return.
    pub async fn next_line(&mut self) -> Option<Result<Line>> {
        if !self.walk.is_open() {
            return None;
        }
        if let Err(e) = self.fill().await {
            return Some(Err(self.walk.fail(e)));
        }
        self.walk.emit().map(Ok)
    }

    /// Release the handle. Calling it again has no effect.
    pub fn close(&mut self) {
        self.handle = None;
        self.walk.close();
    }

    /// Turn the reader into a stream of lines, last line first.
    pub fn into_stream(self) -> BoxStream<'static, Result<Line>>
    where
        R: Send + 'static,
    {
        stream::unfold(self, |mut reader| async move {
            let item = reader.next_line().await?;
            Some((item, reader))
        })
        .boxed()
    }

    async fn fill(&mut self) -> Result<()> {
        while self.walk.needs_chunk() {
            let window = self.walk.next_window();
            let bytes = self.read_window(&window).await?;
            self.walk.accept(&window, &bytes)?;
        }
        Ok(())
    }

    async fn read_window(&mut self, window: &ChunkWindow) -> Result<Vec<u8>> {
        let id = self.walk.id();
        let Some(handle) = self.handle.as_mut() else {
            return Err(BackReadError::io(
                Stage::Read,
                id,
                io::Error::other("reader is closed"),
            ));
        };

        handle
            .seek(SeekFrom::Start(window.read_from))
            .await
            .map_err(|e| BackReadError::io(Stage::Seek, id, e))?;
        let mut bytes = vec![0; window.read_len()];
        handle
            .read_exact(&mut bytes)
            .await
            .map_err(|e| BackReadError::io(Stage::Read, id, e))?;
        Ok(bytes)
    }
}

/// Read every line of the file at `path`, last line first.
pub async fn read_lines_rev_async(
    path: impl AsRef<Path>,
    options: ReaderOptions,
) -> Result<Vec<Line>> {
    let mut reader = AsyncBackwardLineReader::open(path, options).await?;
    let mut lines = Vec::new();
    while let Some(line) = reader.next_line().await {
        lines.push(line?);
    }
    Ok(lines)
}
