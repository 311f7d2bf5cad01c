//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `applog_core::api` instead of reaching into internal modules.

pub use crate::config::{
    load_default, AppConfig, ColorMode, LoggingConfig, OutputConfig, TargetConfig,
};
pub use crate::decode::{try_consume_prefix, AccumulationBuffer, Consumed, RecordDecoder};
pub use crate::error::{CliError, StreamError};
pub use crate::format::{RecordFormatter, Zone};
pub use crate::record::{zero_time, LogRecord};
pub use crate::stream::{
    run_stream, ByteSource, MemorySource, ReaderSource, StreamOutcome, READ_CHUNK_SIZE,
};
