mod run;
mod source;
mod traits;
mod types;

pub use run::run_stream;
pub use source::{MemorySource, ReaderSource, READ_CHUNK_SIZE};
pub use traits::ByteSource;
pub use types::StreamOutcome;
