mod model;

pub use model::{zero_time, LogRecord};
