//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for `created_datetime` and `updated_datetime`.
pub type Timestamp = DateTime<Utc>;

/// Parse an RFC 3339 timestamp as emitted by the places API.
#[must_use]
pub fn parse(raw: &str) -> Option<Timestamp> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}

/// Human-readable rendering of an API timestamp.
///
/// Falls back to the raw text when it is not RFC 3339.
#[must_use]
pub fn display(raw: &str) -> String {
    parse(raw).map_or_else(
        || raw.to_string(),
        |ts| ts.format("%Y-%m-%d %H:%M UTC").to_string(),
    )
}
