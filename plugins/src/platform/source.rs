use std::pin::Pin;

use applog_core::api::{ByteSource, StreamError};
use bytes::Bytes;
use futures::stream::{Stream, StreamExt};

type BodyStream = Pin<Box<dyn Stream<Item = reqwest::Result<Bytes>> + Send>>;

/// Response body of a log request, chunk by chunk as the server flushes it.
pub struct HttpByteSource {
    body: BodyStream,
    url: String,
}

impl HttpByteSource {
    pub fn new(resp: reqwest::Response) -> Self {
        let url = resp.url().to_string();
        Self {
            body: resp.bytes_stream().boxed(),
            url,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl ByteSource for HttpByteSource {
    async fn next_chunk(&mut self) -> Result<Option<Bytes>, StreamError> {
        match self.body.next().await {
            Some(Ok(chunk)) => Ok(Some(chunk)),
            Some(Err(err)) => {
                tracing::debug!(target: "applog.http", url = %self.url, error = %err, "body read failed");
                Err(StreamError::transport(err))
            }
            None => Ok(None),
        }
    }
}
