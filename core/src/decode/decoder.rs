use super::buffer::AccumulationBuffer;
use super::prefix::{try_consume_prefix, Consumed};
use crate::record::LogRecord;

/// Turns an arbitrarily chunked byte stream into records.
///
/// Decoding is always attempted on the whole accumulated buffer, never on a
/// single chunk, so chunk boundaries may fall anywhere.
#[derive(Debug, Default)]
pub struct RecordDecoder {
    buffer: AccumulationBuffer,
}

impl RecordDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, chunk: &[u8]) -> Vec<LogRecord> {
        self.buffer.extend(chunk);
        let Consumed { records, consumed } = try_consume_prefix(self.buffer.as_bytes());
        self.buffer.consume(consumed);
        records
    }

    pub fn remaining(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    pub fn consumed_total(&self) -> u64 {
        self.buffer.consumed_total()
    }

    pub fn finish(self) -> Vec<u8> {
        self.buffer.take()
    }
}
