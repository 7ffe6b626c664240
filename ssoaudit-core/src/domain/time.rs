//! Timestamp handling for wire and export formats
//!
//! The identity-store APIs carry timestamps as epoch seconds (possibly
//! fractional). Both export formats render ISO-8601 with an explicit
//! `+00:00` offset and no fractional seconds, matching existing consumers.

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};

use crate::domain::result::{Error, Result};

/// Convert epoch seconds from an API response into a UTC timestamp
pub fn from_epoch_seconds(seconds: f64) -> Result<DateTime<Utc>> {
    let secs = seconds.trunc() as i64;
    let nanos = (seconds.fract() * 1_000_000_000.0) as u32;

    Utc.timestamp_opt(secs, nanos)
        .single()
        .ok_or_else(|| Error::decode(format!("timestamp out of range: {seconds}")))
}

/// Render a timestamp as ISO-8601 with UTC offset (`2000-01-23T04:56:00+00:00`)
///
/// Sub-second precision is omitted when zero and rendered as six digits
/// otherwise, the same shape the previous exporter's consumers parse.
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    let seconds_format = if dt.timestamp_subsec_nanos() == 0 {
        SecondsFormat::Secs
    } else {
        SecondsFormat::Micros
    };
    dt.to_rfc3339_opts(seconds_format, false)
}

/// Serde serializer producing the same ISO-8601 form as [`format_timestamp`]
pub mod rfc3339_utc {
    use chrono::{DateTime, Utc};
    use serde::Serializer;

    pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_timestamp(dt))
    }
}
