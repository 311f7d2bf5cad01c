use bytes::Bytes;

use crate::error::StreamError;

/// An open, possibly unbounded connection yielding raw bytes in origin order.
#[async_trait::async_trait]
pub trait ByteSource: Send {
    /// Next chunk, or `Ok(None)` once the origin closed the stream.
    ///
    /// Implementations must not reorder, coalesce across errors, or repeat bytes.
    async fn next_chunk(&mut self) -> Result<Option<Bytes>, StreamError>;
}
