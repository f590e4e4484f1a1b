//! Async seekable source trait definition.

use std::fmt::Debug;

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncSeek};

/// An async byte handle that can be read and repositioned.
pub trait AsyncReadSeek: AsyncRead + AsyncSeek {}

impl<T: AsyncRead + AsyncSeek + ?Sized> AsyncReadSeek for T {}

/// Trait for asynchronous providers of seekable byte handles.
#[async_trait]
pub trait AsyncSeekableSource: Send + Sync + Debug {
    /// Returns a unique identifier for this source.
    fn id(&self) -> &str;

    /// Open and return a new async seekable handle.
    async fn open(&self) -> std::io::Result<Box<dyn AsyncReadSeek + Unpin + Send>>;
}
