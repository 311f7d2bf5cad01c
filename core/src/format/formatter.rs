use chrono::{DateTime, FixedOffset, Local, Offset, Utc};
use crossterm::style::Stylize;

use crate::record::LogRecord;

pub const TIMESTAMP_LAYOUT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Timezone used to render record timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Zone {
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl Zone {
    pub fn utc() -> Self {
        Zone::Fixed(Utc.fix())
    }

    fn render(self, ts: &DateTime<Utc>) -> String {
        match self {
            Zone::Local => ts.with_timezone(&Local).format(TIMESTAMP_LAYOUT).to_string(),
            Zone::Fixed(offset) => ts.with_timezone(&offset).format(TIMESTAMP_LAYOUT).to_string(),
        }
    }
}

/// Renders one record per line: `<ts> [<source>][<unit>]: <message>`.
///
/// Only the prefix is styled, and only when `color` is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordFormatter {
    zone: Zone,
    color: bool,
}

impl RecordFormatter {
    pub fn new(zone: Zone, color: bool) -> Self {
        Self { zone, color }
    }

    pub fn plain(zone: Zone) -> Self {
        Self::new(zone, false)
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    pub fn color(&self) -> bool {
        self.color
    }

    pub fn prefix(&self, record: &LogRecord) -> String {
        let date = self.zone.render(&record.timestamp);
        match record.unit.as_deref() {
            Some(unit) if !unit.is_empty() => format!("{date} [{}][{unit}]:", record.source),
            _ => format!("{date} [{}]:", record.source),
        }
    }

    pub fn format(&self, record: &LogRecord) -> String {
        let prefix = self.prefix(record);
        if self.color {
            format!("{} {}\n", prefix.as_str().blue(), record.message)
        } else {
            format!("{prefix} {}\n", record.message)
        }
    }
}
