use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One log entry as emitted by the platform.
///
/// The platform writes capitalized keys; lowercase spellings (and `timestamp`
/// for the date) are accepted as well since the server side matches keys
/// case-insensitively. A missing or null date decodes as [`zero_time`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    #[serde(
        rename = "Date",
        alias = "date",
        alias = "timestamp",
        default = "zero_time",
        deserialize_with = "null_as_zero_time"
    )]
    pub timestamp: DateTime<Utc>,

    #[serde(rename = "Message", alias = "message", default)]
    pub message: String,

    #[serde(rename = "Source", alias = "source", default)]
    pub source: String,

    #[serde(
        rename = "Unit",
        alias = "unit",
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub unit: Option<String>,
}

impl LogRecord {
    pub fn new(
        timestamp: DateTime<Utc>,
        message: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            message: message.into(),
            source: source.into(),
            unit: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        let unit = unit.into();
        self.unit = (!unit.is_empty()).then_some(unit);
        self
    }
}

/// `0001-01-01T00:00:00Z`, the timestamp given to records that carry no date.
pub fn zero_time() -> DateTime<Utc> {
    DateTime::from_timestamp(ZERO_TIME_SECS, 0).unwrap_or_default()
}

const ZERO_TIME_SECS: i64 = -62_135_596_800;

fn null_as_zero_time<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<DateTime<Utc>>::deserialize(deserializer)?.unwrap_or_else(zero_time))
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<String>::deserialize(deserializer)?;
    Ok(v.filter(|s| !s.is_empty()))
}
