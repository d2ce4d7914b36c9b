use chrono::{DateTime, Utc};

/// ISO-8601 UTC with microseconds and a trailing `Z`, e.g. `2025-03-01T09:15:02.048113Z`.
pub fn time_now() -> String {
    format_utc(Utc::now())
}

pub fn format_utc(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}
