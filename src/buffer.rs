//! Decoded text waiting to be handed out as lines.

use std::collections::VecDeque;

use crate::line::Line;

/// Text already pulled from the file but not yet emitted.
///
/// Chunks are kept as they were decoded, front to back in file order, and
/// are only joined when a line is split off the tail. Each byte is copied
/// once on its way out, however many chunks a line spans. The terminator
/// count is kept up to date so the reader can tell when it holds enough text
/// to resolve the next line.
#[derive(Debug, Clone)]
pub(crate) struct PendingBuffer {
    chunks: VecDeque<String>,
    terminator: char,
    terminators: usize,
}

impl PendingBuffer {
    pub(crate) fn new(terminator: char) -> Self {
        Self {
            chunks: VecDeque::new(),
            terminator,
            terminators: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Two terminators bound a complete line, so fetching can stop.
    pub(crate) fn has_complete_line(&self) -> bool {
        self.terminators >= 2
    }

    #[cfg(test)]
    pub(crate) fn terminators(&self) -> usize {
        self.terminators
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.chunks.iter().map(String::len).sum()
    }

    #[cfg(test)]
    pub(crate) fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Put a chunk read from further up the file in front of the buffer.
    pub(crate) fn prepend(&mut self, chunk: String) {
        if chunk.is_empty() {
            return;
        }
        self.terminators += chunk.matches(self.terminator).count();
        self.chunks.push_front(chunk);
    }

    /// Split the last line off the buffer.
    ///
    /// A trailing terminator belongs to the returned line. If no other
    /// terminator is left in front of it, the remainder is the first line of
    /// the file and the buffer ends up empty.
    pub(crate) fn take_last_line(&mut self) -> Option<Line> {
        let last = self.chunks.back()?;
        let term_len = if last.ends_with(self.terminator) {
            self.terminator.len_utf8()
        } else {
            0
        };

        // Chunk index and byte offset just past the inner terminator.
        let tail = self.chunks.len() - 1;
        let split = self
            .chunks
            .iter()
            .enumerate()
            .rev()
            .find_map(|(i, chunk)| {
                let end = if i == tail { chunk.len() - term_len } else { chunk.len() };
                chunk[..end]
                    .rfind(self.terminator)
                    .map(|idx| (i, idx + self.terminator.len_utf8()))
            });

        let (first, head) = match split {
            Some((i, at)) => {
                if term_len > 0 {
                    self.terminators -= 1;
                }
                (i + 1, self.chunks[i].split_off(at))
            }
            None => {
                self.terminators = 0;
                (0, String::new())
            }
        };

        let mut line = head;
        for chunk in self.chunks.drain(first..) {
            if line.is_empty() {
                line = chunk;
            } else {
                line.push_str(&chunk);
            }
        }
        Some(Line::new(line, term_len))
    }

    pub(crate) fn clear(&mut self) {
        self.chunks.clear();
        self.terminators = 0;
    }
}
