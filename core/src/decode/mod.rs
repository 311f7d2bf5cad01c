mod buffer;
mod decoder;
mod prefix;

pub use buffer::AccumulationBuffer;
pub use decoder::RecordDecoder;
pub use prefix::{try_consume_prefix, Consumed};
