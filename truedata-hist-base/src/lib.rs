mod time;
mod types;

pub use time::{ist, ist_to_utc_ms, local_to_utc_ms, utc_minute, utc_ms_to_local, TimeError};
pub use types::{Bar, Symbol, Timeframe};
