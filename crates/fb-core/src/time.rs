//! Timestamp parsing for the shapes the API emits.
//!
//! Older servers send naive timestamps that are implicitly UTC; newer ones
//! send RFC 3339. Moderator forms and fixtures sometimes carry a bare date.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::{AppError, Result};

pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    Err(AppError::InvalidTimestamp(raw.to_string()))
}
