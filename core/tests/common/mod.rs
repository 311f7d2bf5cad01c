#![allow(dead_code)]

use applog_core::api::{LogRecord, RecordFormatter, Zone};
use chrono::{Duration, TimeZone, Utc};

pub fn sample_records() -> Vec<LogRecord> {
    let t = Utc.with_ymd_and_hms(2015, 3, 10, 14, 2, 11).unwrap();
    vec![
        LogRecord::new(t, "creating app lost", "tsuru"),
        LogRecord::new(t + Duration::hours(2), "app lost successfully created", "app")
            .with_unit("abcdef"),
    ]
}

pub fn encode_unit(records: &[LogRecord]) -> Vec<u8> {
    serde_json::to_vec(records).unwrap()
}

pub fn utc_formatter() -> RecordFormatter {
    RecordFormatter::plain(Zone::utc())
}

pub fn render_all(records: &[LogRecord]) -> String {
    let f = utc_formatter();
    records.iter().map(|r| f.format(r)).collect()
}
