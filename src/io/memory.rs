//! In-memory sources for testing.

use std::io::{self, Cursor};
use std::sync::Arc;

use super::{ReadSeek, SeekableSource};

/// In-memory source for testing.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    id: String,
    data: Arc<Vec<u8>>,
}

impl InMemorySource {
    /// Create a new in-memory source with the given data.
    pub fn new(id: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            data: Arc::new(data),
        }
    }

    /// Create a new in-memory source from a string.
    pub fn from_string(id: impl Into<String>, data: impl Into<String>) -> Self {
        Self::new(id, data.into().into_bytes())
    }

    /// The bytes this source serves.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl SeekableSource for InMemorySource {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self) -> io::Result<Box<dyn ReadSeek + Send>> {
        Ok(Box::new(Cursor::new(SharedBytes(self.data.clone()))))
    }
}

/// Cheap clone of the source bytes handed to each opened cursor.
#[derive(Debug, Clone)]
struct SharedBytes(Arc<Vec<u8>>);

impl AsRef<[u8]> for SharedBytes {
    fn as_ref(&self) -> &[u8] {
        self.0.as_slice()
    }
}

#[cfg(feature = "async")]
mod async_memory {
    use std::io::{self, Cursor};
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::SharedBytes;
    use crate::io::{AsyncReadSeek, AsyncSeekableSource};

    /// Async in-memory source for testing.
    #[derive(Debug, Clone)]
    pub struct AsyncInMemorySource {
        id: String,
        data: Arc<Vec<u8>>,
    }

    impl AsyncInMemorySource {
        /// Create a new async in-memory source with the given data.
        pub fn new(id: impl Into<String>, data: Vec<u8>) -> Self {
            Self {
                id: id.into(),
                data: Arc::new(data),
            }
        }

        /// Create a new async in-memory source from a string.
        pub fn from_string(id: impl Into<String>, data: impl Into<String>) -> Self {
            Self::new(id, data.into().into_bytes())
        }
    }

    #[async_trait]
    impl AsyncSeekableSource for AsyncInMemorySource {
        fn id(&self) -> &str {
            &self.id
        }

        async fn open(&self) -> io::Result<Box<dyn AsyncReadSeek + Unpin + Send>> {
            Ok(Box::new(Cursor::new(SharedBytes(self.data.clone()))))
        }
    }
}

#[cfg(feature = "async")]
pub use async_memory::AsyncInMemorySource;
