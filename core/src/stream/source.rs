use std::collections::VecDeque;

use bytes::Bytes;
use tokio::io::{AsyncRead, AsyncReadExt};

use super::traits::ByteSource;
use crate::error::StreamError;

pub const READ_CHUNK_SIZE: usize = 16 * 1024;

/// Replays pre-split chunks, optionally ending with a transport error.
#[derive(Debug, Default)]
pub struct MemorySource {
    chunks: VecDeque<Bytes>,
    fail_with: Option<String>,
}

impl MemorySource {
    pub fn new<I, B>(chunks: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Bytes>,
    {
        Self {
            chunks: chunks.into_iter().map(Into::into).collect(),
            fail_with: None,
        }
    }

    /// Splits `data` at the given offsets. Offsets past the end are ignored.
    pub fn split_at(data: &[u8], offsets: &[usize]) -> Self {
        let mut cuts: Vec<usize> = offsets
            .iter()
            .copied()
            .filter(|&o| o > 0 && o < data.len())
            .collect();
        cuts.sort_unstable();
        cuts.dedup();

        let mut chunks = Vec::with_capacity(cuts.len() + 1);
        let mut start = 0;
        for cut in cuts.into_iter().chain(std::iter::once(data.len())) {
            if cut > start {
                chunks.push(Bytes::copy_from_slice(&data[start..cut]));
            }
            start = cut;
        }
        Self::new(chunks)
    }

    /// Fails with a transport error once the queued chunks are exhausted.
    pub fn then_fail(mut self, message: impl Into<String>) -> Self {
        self.fail_with = Some(message.into());
        self
    }
}

#[async_trait::async_trait]
impl ByteSource for MemorySource {
    async fn next_chunk(&mut self) -> Result<Option<Bytes>, StreamError> {
        if let Some(chunk) = self.chunks.pop_front() {
            return Ok(Some(chunk));
        }
        match self.fail_with.take() {
            Some(msg) => Err(StreamError::Transport(msg)),
            None => Ok(None),
        }
    }
}

/// Reads from any tokio reader, e.g. stdin or a saved response body.
pub struct ReaderSource<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self::with_capacity(reader, READ_CHUNK_SIZE)
    }

    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self {
            reader,
            buf: vec![0u8; capacity.max(1)],
        }
    }
}

#[async_trait::async_trait]
impl<R> ByteSource for ReaderSource<R>
where
    R: AsyncRead + Unpin + Send,
{
    async fn next_chunk(&mut self) -> Result<Option<Bytes>, StreamError> {
        loop {
            match self.reader.read(&mut self.buf).await {
                Ok(0) => return Ok(None),
                Ok(n) => return Ok(Some(Bytes::copy_from_slice(&self.buf[..n]))),
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(StreamError::transport(e)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn drain(src: &mut dyn ByteSource) -> Result<Vec<Bytes>, StreamError> {
        let mut out = Vec::new();
        while let Some(chunk) = src.next_chunk().await? {
            out.push(chunk);
        }
        Ok(out)
    }

    #[tokio::test]
    async fn memory_source_yields_in_order_then_ends() {
        let mut src = MemorySource::new(vec!["ab", "cd"]);
        let chunks = drain(&mut src).await.unwrap();
        assert_eq!(chunks, vec![Bytes::from("ab"), Bytes::from("cd")]);
        assert!(src.next_chunk().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn split_at_preserves_bytes() {
        let mut src = MemorySource::split_at(b"abcdefgh", &[5, 2, 2, 0, 99]);
        let chunks = drain(&mut src).await.unwrap();
        assert_eq!(
            chunks,
            vec![Bytes::from("ab"), Bytes::from("cde"), Bytes::from("fgh")]
        );
    }

    #[tokio::test]
    async fn memory_source_reports_injected_failure() {
        let mut src = MemorySource::new(vec!["ab"]).then_fail("connection reset");
        assert!(src.next_chunk().await.unwrap().is_some());
        let err = src.next_chunk().await.unwrap_err();
        assert!(err.to_string().contains("connection reset"));
    }

    #[tokio::test]
    async fn reader_source_forwards_reads() {
        let reader = tokio_test::io::Builder::new()
            .read(b"[{\"Da")
            .read(b"te\":1}]")
            .build();
        let mut src = ReaderSource::new(reader);
        let chunks = drain(&mut src).await.unwrap();
        assert_eq!(
            chunks,
            vec![Bytes::from_static(b"[{\"Da"), Bytes::from_static(b"te\":1}]")]
        );
    }

    #[tokio::test]
    async fn reader_source_maps_read_errors() {
        let reader = tokio_test::io::Builder::new()
            .read(b"x")
            .read_error(std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset"))
            .build();
        let mut src = ReaderSource::new(reader);
        assert!(src.next_chunk().await.unwrap().is_some());
        assert!(matches!(
            src.next_chunk().await,
            Err(StreamError::Transport(msg)) if msg.contains("reset")
        ));
    }

    #[tokio::test]
    async fn reader_source_respects_capacity() {
        let reader = tokio_test::io::Builder::new().read(b"abcdef").build();
        let mut src = ReaderSource::with_capacity(reader, 4);
        let chunks = drain(&mut src).await.unwrap();
        assert_eq!(chunks, vec![Bytes::from("abcd"), Bytes::from("ef")]);
    }
}
