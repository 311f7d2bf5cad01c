mod formatter;

pub use formatter::{RecordFormatter, Zone, TIMESTAMP_LAYOUT};
