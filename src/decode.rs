//! Backward cursor and boundary-safe UTF-8 decoding of chunks.
//!
//! A chunk is read as `[start, end)` where `end` is always a character
//! boundary: it is either the end of the file or the start of the chunk
//! decoded just before. Only `start` can land inside a multi-byte character.
//! When it does, the start is moved back one byte at a time until the slice
//! decodes. UTF-8 sequences are at most four bytes long, so three steps back
//! always reach a lead byte in a valid file.

/// Furthest a chunk start may move back to reach a character boundary.
pub(crate) const MAX_BOUNDARY_SHIFT: u64 = 3;

/// Byte offset below which the file has not been read yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BackCursor {
    position: u64,
}

impl BackCursor {
    pub(crate) fn at_end(size: u64) -> Self {
        Self { position: size }
    }

    pub(crate) fn position(&self) -> u64 {
        self.position
    }

    pub(crate) fn is_at_start(&self) -> bool {
        self.position == 0
    }

    /// Range to read for the next chunk.
    ///
    /// The window extends up to `MAX_BOUNDARY_SHIFT` bytes before the
    /// preferred start so that a split character can be recovered without
    /// another read.
    pub(crate) fn next_window(&self, chunk_size: usize) -> ChunkWindow {
        let end = self.position;
        let start = end.saturating_sub(chunk_size as u64);
        ChunkWindow {
            read_from: start.saturating_sub(MAX_BOUNDARY_SHIFT),
            start,
            end,
        }
    }

    /// Move the cursor back to the start of a decoded chunk.
    pub(crate) fn retreat_to(&mut self, start: u64) {
        debug_assert!(start <= self.position);
        self.position = start;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ChunkWindow {
    /// First byte actually read (includes look-behind)
    pub(crate) read_from: u64,
    /// Preferred chunk start
    pub(crate) start: u64,
    pub(crate) end: u64,
}

impl ChunkWindow {
    pub(crate) fn read_len(&self) -> usize {
        (self.end - self.read_from) as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DecodedChunk {
    /// Where the chunk actually starts after any boundary shift
    pub(crate) start: u64,
    /// How many bytes the start moved back
    pub(crate) shift: u64,
    pub(crate) text: String,
}

/// Absolute offset of the first byte that could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct InvalidSequence {
    pub(crate) offset: u64,
}

fn is_continuation(byte: u8) -> bool {
    byte & 0b1100_0000 == 0b1000_0000
}

/// Decode the chunk of `bytes` (read from `window.read_from`) that ends at
/// `window.end`, starting at `window.start` or as few bytes before it as
/// needed to begin on a character boundary.
pub(crate) fn decode_window(
    window: &ChunkWindow,
    bytes: &[u8],
) -> Result<DecodedChunk, InvalidSequence> {
    debug_assert_eq!(bytes.len(), window.read_len());
    let mut skip = (window.start - window.read_from) as usize;

    loop {
        match std::str::from_utf8(&bytes[skip..]) {
            Ok(text) => {
                let start = window.read_from + skip as u64;
                return Ok(DecodedChunk {
                    start,
                    shift: window.start - start,
                    text: text.to_owned(),
                });
            }
            // Leading continuation byte: the chunk starts inside a character.
            Err(err) if err.valid_up_to() == 0 && skip > 0 && is_continuation(bytes[skip]) => {
                skip -= 1;
            }
            Err(err) => {
                return Err(InvalidSequence {
                    offset: window.read_from + (skip + err.valid_up_to()) as u64,
                });
            }
        }
    }
}
