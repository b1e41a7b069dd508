use std::fmt;

use thiserror::Error;
use time::{format_description::well_known::Rfc3339, OffsetDateTime, UtcOffset};

/// A point in time, always normalized to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(OffsetDateTime);

#[derive(Debug, Error)]
#[error("Invalid timestamp: {0}")]
pub struct InvalidTimestamp(String);

impl Timestamp {
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }

    /// Parses a RFC 3339 date-time string, e.g. `2024-01-15T00:00:00Z`.
    pub fn parse_rfc3339(s: &str) -> Result<Self, InvalidTimestamp> {
        OffsetDateTime::parse(s, &Rfc3339)
            .map(Self::from)
            .map_err(|err| InvalidTimestamp(format!("{s}: {err}")))
    }

    pub fn format_rfc3339(self) -> Result<String, InvalidTimestamp> {
        self.0
            .format(&Rfc3339)
            .map_err(|err| InvalidTimestamp(err.to_string()))
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self(from.to_offset(UtcOffset::UTC))
    }
}

impl From<Timestamp> for OffsetDateTime {
    fn from(from: Timestamp) -> Self {
        from.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.format_rfc3339() {
            Ok(s) => f.write_str(&s),
            Err(_) => write!(f, "{}", self.0),
        }
    }
}
