//! Synchronous backward line reader.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::iter::FusedIterator;
use std::path::Path;

use crate::config::ReaderOptions;
use crate::decode::ChunkWindow;
use crate::error::{BackReadError, Result, Stage};
use crate::io::{ReadSeek, SeekableSource, open_regular_file};
use crate::line::Line;
use crate::walk::{ReaderState, Walk};

/// Reads a UTF-8 text source line by line, from the last line to the first.
///
/// The reader fetches fixed-size chunks walking from the end of the source
/// towards its start and never splits a multi-byte character across two
/// chunks. Lines come out exactly as stored, terminators included, so the
/// reversed output joined together equals the file.
///
/// The handle is owned by the reader and released on [`close`] or when the
/// reader is dropped, whichever comes first.
///
/// ```rust,ignore
/// use backread::{BackwardLineReader, ReaderOptions};
///
/// let reader = BackwardLineReader::open("app.log", ReaderOptions::default())?;
/// for line in reader.take(10) {
///     print!("{}", line?);
/// }
/// ```
///
/// [`close`]: BackwardLineReader::close
#[derive(Debug)]
pub struct BackwardLineReader<R = File> {
    handle: Option<R>,
    walk: Walk,
}

impl BackwardLineReader<File> {
    /// Open the file at `path` and position the reader at its end.
    ///
    /// Fails with `FileNotFound` when nothing exists at `path` and with
    /// `NotReadable` when it is not a regular file or cannot be opened.
    pub fn open(path: impl AsRef<Path>, options: ReaderOptions) -> Result<Self> {
        options.validate()?;
        let path = path.as_ref();
        let id = path.to_string_lossy().into_owned();
        let file = open_regular_file(path).map_err(|e| BackReadError::on_open(&id, e))?;
        Self::from_reader(id, file, options)
    }
}

impl BackwardLineReader<Box<dyn ReadSeek + Send>> {
    /// Open a handle from `source` and position the reader at its end.
    pub fn from_source(source: &dyn SeekableSource, options: ReaderOptions) -> Result<Self> {
        options.validate()?;
        let handle = source
            .open()
            .map_err(|e| BackReadError::on_open(source.id(), e))?;
        Self::from_reader(source.id(), handle, options)
    }
}

impl<R: Read + Seek> BackwardLineReader<R> {
    /// Wrap an already opened handle. `id` names it in errors and logs.
    pub fn from_reader(
        id: impl Into<String>,
        mut handle: R,
        options: ReaderOptions,
    ) -> Result<Self> {
        options.validate()?;
        let id = id.into();
        let size = handle
            .seek(SeekFrom::End(0))
            .map_err(|e| BackReadError::io(Stage::Open, &id, e))?;
        Ok(Self {
            handle: Some(handle),
            walk: Walk::new(id, size, options),
        })
    }

    /// Identifier of the source being read.
    pub fn id(&self) -> &str {
        self.walk.id()
    }

    pub fn options(&self) -> &ReaderOptions {
        self.walk.options()
    }

    /// Size of the source when it was opened.
    pub fn file_size(&self) -> u64 {
        self.walk.size()
    }

    /// Number of bytes at the start of the source not read yet.
    pub fn position(&self) -> u64 {
        self.walk.position()
    }

    pub fn state(&self) -> ReaderState {
        self.walk.state()
    }

    /// Return the next line towards the start of the source.
    ///
    /// `None` means there is nothing left to return: the source is exhausted,
    /// the reader was closed, or an earlier call already returned an error.
    pub fn next_line(&mut self) -> Option<Result<Line>> {
        if !self.walk.is_open() {
            return None;
        }
        if let Err(e) = self.fill() {
            return Some(Err(self.walk.fail(e)));
        }
        self.walk.emit().map(Ok)
    }

    /// Release the handle. Calling it again has no effect.
    pub fn close(&mut self) {
        self.handle = None;
        self.walk.close();
    }

    fn fill(&mut self) -> Result<()> {
        while self.walk.needs_chunk() {
            let window = self.walk.next_window();
            let bytes = self.read_window(&window)?;
            self.walk.accept(&window, &bytes)?;
        }
        Ok(())
    }

    fn read_window(&mut self, window: &ChunkWindow) -> Result<Vec<u8>> {
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
            .map_err(|e| BackReadError::io(Stage::Seek, id, e))?;
        let mut bytes = vec![0; window.read_len()];
        handle
            .read_exact(&mut bytes)
            .map_err(|e| BackReadError::io(Stage::Read, id, e))?;
        Ok(bytes)
    }
}

impl<R: Read + Seek> Iterator for BackwardLineReader<R> {
    type Item = Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line()
    }
}

impl<R: Read + Seek> FusedIterator for BackwardLineReader<R> {}

/// Read every line of the file at `path`, last line first.
pub fn read_lines_rev(path: impl AsRef<Path>, options: ReaderOptions) -> Result<Vec<Line>> {
    BackwardLineReader::open(path, options)?.collect()
}

/// Return the last `n` lines of the file at `path`, in file order.
///
/// Only the tail of the file needed to produce them is read.
pub fn last_lines(
    path: impl AsRef<Path>,
    n: usize,
    options: ReaderOptions,
) -> Result<Vec<Line>> {
    let reader = BackwardLineReader::open(path, options)?;
    let mut lines = reader.take(n).collect::<Result<Vec<_>>>()?;
    lines.reverse();
    Ok(lines)
}
