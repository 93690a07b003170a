//! Lenient parsing of `created_at` timestamps.
//!
//! Records are written with RFC 3339 UTC timestamps. Older files may hold
//! naive ISO-8601 local timestamps without an offset; those are read as UTC.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parses an RFC 3339 timestamp, falling back to a naive ISO-8601 one.
pub fn parse(raw: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, NAIVE_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| format!("invalid timestamp {:?}: {}", raw, e))
}

/// Serde `deserialize_with` adapter around [`parse`].
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(serde::de::Error::custom)
}
