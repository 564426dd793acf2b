use chrono::{DateTime, FixedOffset, NaiveDateTime};
use thiserror::Error;

/// Wall-clock pattern accepted by the converters.
pub const LOCAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const IST_OFFSET_SECS: i32 = 5 * 3600 + 1800;

#[derive(Debug, Error)]
pub enum TimeError {
    #[error("invalid date-time {input:?}: {source}")]
    Format {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("timestamp out of range: {0}")]
    OutOfRange(i64),
}

/// India Standard Time, a fixed +05:30 with no daylight-saving rule.
pub fn ist() -> FixedOffset {
    FixedOffset::east_opt(IST_OFFSET_SECS).expect("+05:30 is a valid offset")
}

/// Parses a `"YYYY-MM-DD HH:MM:SS"` wall-clock string at the given offset
/// and returns milliseconds since the Unix epoch (UTC).
pub fn local_to_utc_ms(s: &str, offset: FixedOffset) -> Result<i64, TimeError> {
    let naive = NaiveDateTime::parse_from_str(s, LOCAL_FORMAT).map_err(|source| {
        TimeError::Format {
            input: s.to_string(),
            source,
        }
    })?;

    Ok((naive - offset).and_utc().timestamp_millis())
}

/// `local_to_utc_ms` pinned to India Standard Time.
pub fn ist_to_utc_ms(s: &str) -> Result<i64, TimeError> {
    local_to_utc_ms(s, ist())
}

/// Inverse of `local_to_utc_ms`: renders a UTC ms-epoch back as a
/// wall-clock string at the given offset.
pub fn utc_ms_to_local(ms: i64, offset: FixedOffset) -> Result<String, TimeError> {
    let utc = DateTime::from_timestamp_millis(ms).ok_or(TimeError::OutOfRange(ms))?;

    Ok(utc.with_timezone(&offset).format(LOCAL_FORMAT).to_string())
}

/// UTC date-time truncated to the minute, for display.
pub fn utc_minute(ms: i64) -> Result<String, TimeError> {
    let utc = DateTime::from_timestamp_millis(ms).ok_or(TimeError::OutOfRange(ms))?;

    Ok(utc.format("%Y-%m-%d %H:%M").to_string())
}
