//! Plain-text renderers for Riot API responses.
//!
//! Tool results are meant to be read by a model or a human, so every response
//! is reshaped into a labeled text block instead of raw JSON. Formatters are
//! pure functions over the DTOs and carry the unit tests for the reshaping.

use chrono::DateTime;

pub mod account;
pub mod challenges;
pub mod champion;
pub mod clash;
pub mod league;
pub mod match_v5;
pub mod spectator;
pub mod status;
pub mod summoner;
pub mod tournament;

/// Render an epoch-milliseconds timestamp as a UTC date string.
pub(crate) fn timestamp_ms(ms: i64) -> String {
    DateTime::from_timestamp_millis(ms)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| format!("Epoch: {ms}"))
}

/// Render a duration in seconds as `M:SS`.
pub(crate) fn duration_secs(total: i64) -> String {
    format!("{}:{:02}", total / 60, total.rem_euclid(60))
}

/// First 8 characters of an identifier, safe on multi-byte input.
pub(crate) fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_render_as_utc() {
        assert_eq!(timestamp_ms(0), "1970-01-01 00:00:00 UTC");
        assert_eq!(timestamp_ms(1_700_000_000_000), "2023-11-14 22:13:20 UTC");
    }

    #[test]
    fn durations_render_as_minutes_and_seconds() {
        assert_eq!(duration_secs(0), "0:00");
        assert_eq!(duration_secs(65), "1:05");
        assert_eq!(duration_secs(1_805), "30:05");
    }

    #[test]
    fn short_ids_truncate_on_character_boundaries() {
        assert_eq!(short_id("abcdefghijkl"), "abcdefgh");
        assert_eq!(short_id("abc"), "abc");
        // Byte index 8 falls inside the two-byte 'é'.
        assert_eq!(short_id("aaaaaaa\u{e9}xxxx"), "aaaaaaa\u{e9}");
    }
}
