use std::io::{ErrorKind, Write};

use super::traits::ByteSource;
use super::types::StreamOutcome;
use crate::decode::RecordDecoder;
use crate::error::StreamError;
use crate::format::RecordFormatter;

const DIAGNOSTIC_PREFIX: &[u8] = b"Error: ";

/// Pumps `source` through the decoder and formatter into `sink` until the
/// source ends.
///
/// Every record is written and flushed before the next chunk is requested, so
/// a follow session shows entries as they arrive. Bytes left undecoded at
/// end-of-stream are written once, unaltered, as `Error: <bytes>`. A transport error
/// aborts the session without that diagnostic.
#[tracing::instrument(
    name = "stream.run",
    skip_all,
    fields(session_id = %uuid::Uuid::new_v4())
)]
pub async fn run_stream<S, W>(
    source: &mut S,
    sink: &mut W,
    formatter: &RecordFormatter,
) -> Result<StreamOutcome, StreamError>
where
    S: ByteSource + ?Sized,
    W: Write + ?Sized,
{
    let mut decoder = RecordDecoder::new();
    let mut outcome = StreamOutcome::default();

    while let Some(chunk) = source.next_chunk().await? {
        outcome.chunks += 1;
        outcome.bytes_read += chunk.len() as u64;

        let records = decoder.feed(&chunk);
        tracing::trace!(
            target: "applog.stream",
            chunk_len = chunk.len(),
            records = records.len(),
            pending = decoder.remaining().len(),
            "chunk fed"
        );

        for record in &records {
            let line = formatter.format(record);
            if !write_flushed(sink, line.as_bytes())? {
                outcome.sink_closed = true;
                tracing::debug!(target: "applog.stream", records = outcome.records, "sink closed");
                return Ok(outcome);
            }
            outcome.records += 1;
        }
    }

    outcome.unparsed = decoder.finish();
    if outcome.has_diagnostic() {
        tracing::debug!(
            target: "applog.stream",
            unparsed = outcome.unparsed.len(),
            "stream ended with undecodable bytes"
        );
        let mut text = Vec::with_capacity(DIAGNOSTIC_PREFIX.len() + outcome.unparsed.len());
        text.extend_from_slice(DIAGNOSTIC_PREFIX);
        text.extend_from_slice(&outcome.unparsed);
        if !write_flushed(sink, &text)? {
            outcome.sink_closed = true;
        }
    }

    tracing::debug!(
        target: "applog.stream",
        records = outcome.records,
        chunks = outcome.chunks,
        bytes = outcome.bytes_read,
        "stream finished"
    );
    Ok(outcome)
}

/// Returns `Ok(false)` when the reader on the other end is gone.
fn write_flushed<W: Write + ?Sized>(sink: &mut W, bytes: &[u8]) -> Result<bool, StreamError> {
    match sink.write_all(bytes).and_then(|()| sink.flush()) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(false),
        Err(e) => Err(StreamError::Sink(e)),
    }
}
