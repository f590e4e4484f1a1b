//! Reader state shared by the sync and async readers.
//!
//! The readers only differ in how they pull bytes off their handle. Deciding
//! what to read next, decoding it and splitting lines off the pending text
//! all happen here.

use tracing::{debug, trace, warn};

use crate::buffer::PendingBuffer;
use crate::config::ReaderOptions;
use crate::decode::{self, BackCursor, ChunkWindow};
use crate::error::{BackReadError, Result};
use crate::line::Line;

/// Lifecycle of a reader.
///
/// `Closed` can be entered from any state and is terminal. Reading in any
/// state other than `Open` yields nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderState {
    /// Lines may remain
    Open,
    /// Every line has been returned
    Exhausted,
    /// An I/O or encoding error ended iteration
    Failed,
    Closed,
}

#[derive(Debug)]
pub(crate) struct Walk {
    id: String,
    options: ReaderOptions,
    size: u64,
    cursor: BackCursor,
    pending: PendingBuffer,
    state: ReaderState,
}

impl Walk {
    pub(crate) fn new(id: String, size: u64, options: ReaderOptions) -> Self {
        debug!(
            id = %id,
            size,
            chunk_size = options.chunk_size,
            "opened backward reader"
        );
        Self {
            id,
            options,
            size,
            cursor: BackCursor::at_end(size),
            pending: PendingBuffer::new(options.terminator),
            state: ReaderState::Open,
        }
    }

    pub(crate) fn id(&self) -> &str {
        &self.id
    }

    pub(crate) fn options(&self) -> &ReaderOptions {
        &self.options
    }

    pub(crate) fn size(&self) -> u64 {
        self.size
    }

    pub(crate) fn position(&self) -> u64 {
        self.cursor.position()
    }

    pub(crate) fn state(&self) -> ReaderState {
        self.state
    }

    pub(crate) fn is_open(&self) -> bool {
        self.state == ReaderState::Open
    }

    /// Whether another chunk must be fetched before a line can be resolved.
    pub(crate) fn needs_chunk(&self) -> bool {
        !self.pending.has_complete_line() && !self.cursor.is_at_start()
    }

    pub(crate) fn next_window(&self) -> ChunkWindow {
        self.cursor.next_window(self.options.chunk_size)
    }

    /// Decode the bytes read for `window` and put them in front of the
    /// pending text.
    pub(crate) fn accept(&mut self, window: &ChunkWindow, bytes: &[u8]) -> Result<()> {
        let chunk = decode::decode_window(window, bytes).map_err(|invalid| {
            warn!(id = %self.id, offset = invalid.offset, "invalid UTF-8 while reading backwards");
            BackReadError::Encoding {
                target: self.id.clone(),
                offset: invalid.offset,
            }
        })?;

        if chunk.shift > 0 {
            debug!(
                id = %self.id,
                start = chunk.start,
                shift = chunk.shift,
                "moved chunk start back to a character boundary"
            );
        }
        trace!(id = %self.id, start = chunk.start, end = window.end, "fetched chunk");

        self.cursor.retreat_to(chunk.start);
        self.pending.prepend(chunk.text);
        Ok(())
    }

    /// Hand out the last pending line, or mark the walk exhausted.
    pub(crate) fn emit(&mut self) -> Option<Line> {
        let line = self.pending.take_last_line();
        if line.is_none() {
            debug!(id = %self.id, "backward reader exhausted");
            self.state = ReaderState::Exhausted;
        }
        line
    }

    pub(crate) fn fail(&mut self, err: BackReadError) -> BackReadError {
        self.state = ReaderState::Failed;
        self.pending.clear();
        err
    }

    pub(crate) fn close(&mut self) {
        if self.state != ReaderState::Closed {
            debug!(id = %self.id, "closed backward reader");
        }
        self.state = ReaderState::Closed;
        self.pending.clear();
    }
}
