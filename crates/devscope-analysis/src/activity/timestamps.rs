//! ISO-8601 parsing. Naive timestamps are read as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use devscope_core::errors::TimestampError;

const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse one timestamp.
///
/// Accepts RFC 3339, offsets without a colon (`+0800`), naive date-times
/// with `T` or a space, and bare dates (midnight UTC).
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, String> {
    let s = input.trim();
    if s.is_empty() {
        return Err("empty timestamp".to_string());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Ok(dt.with_timezone(&Utc));
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(naive.and_utc());
        }
    }
    match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        Ok(date) => date
            .and_hms_opt(0, 0, 0)
            .map(|naive| naive.and_utc())
            .ok_or_else(|| "invalid midnight".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

/// Parse a whole batch. The first bad element aborts the batch.
pub fn parse_all<S: AsRef<str>>(timestamps: &[S]) -> Result<Vec<DateTime<Utc>>, TimestampError> {
    timestamps
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            parse_timestamp(raw.as_ref()).map_err(|reason| TimestampError {
                index,
                input: raw.as_ref().to_string(),
                reason,
            })
        })
        .collect()
}
