//! Size and time field helpers for the long format

use chrono::{DateTime, Utc};

/// Unit suffixes for abbreviated sizes. The scale caps at `G`, so very
/// large counts render as e.g. `1024.0G` rather than inventing `T`.
const SIZE_UNITS: [&str; 3] = ["K", "M", "G"];

/// Abbreviate a byte count for `-h` output.
///
/// Counts below 1024 render as the plain integer with no suffix. Larger
/// counts are divided by 1024 per unit step and ceiling-rounded to one
/// decimal, so 1101 bytes is `1.1K` (1101/1024 is about 1.075) rather
/// than the nearest-rounded `1.0K`. One decimal is always printed:
/// 1024 is `1.0K`, never `1K`.
pub fn format_size(size: u64) -> String {
    if size < 1024 {
        return size.to_string();
    }

    let mut value = size as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{:.1}{}", ceil_to_tenth(value), SIZE_UNITS[unit])
}

fn ceil_to_tenth(value: f64) -> f64 {
    (value * 10.0).ceil() / 10.0
}

/// Render a Unix timestamp as `Mon DD HH:MM` (e.g. `Nov 14 10:34`).
///
/// Timestamps render in UTC so the same tree produces the same listing
/// on every machine. Out-of-range timestamps fall back to the epoch.
pub fn format_time(timestamp: i64) -> String {
    DateTime::<Utc>::from_timestamp(timestamp, 0)
        .unwrap_or_default()
        .format("%b %d %H:%M")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_sizes_stay_plain_integers() {
        assert_eq!(format_size(0), "0");
        assert_eq!(format_size(1), "1");
        assert_eq!(format_size(512), "512");
        assert_eq!(format_size(1023), "1023");
    }

    #[test]
    fn test_unit_boundaries() {
        assert_eq!(format_size(1024), "1.0K");
        assert_eq!(format_size(1024 * 1024), "1.0M");
        assert_eq!(format_size(1024 * 1024 * 1024), "1.0G");
    }

    #[test]
    fn test_quotients_round_up_not_nearest() {
        // 1101 / 1024 is about 1.075; nearest rounding would give 1.0
        assert_eq!(format_size(1101), "1.1K");
        // 1025 / 1024 barely exceeds 1.0 but still rounds up
        assert_eq!(format_size(1025), "1.1K");
        assert_eq!(format_size(2048), "2.0K");
    }

    #[test]
    fn test_scale_caps_at_gigabytes() {
        assert_eq!(format_size(1024_u64.pow(4)), "1024.0G");
        assert_eq!(format_size(1024_u64.pow(4) * 2), "2048.0G");
    }

    #[test]
    fn test_known_sizes_from_sample_tree() {
        assert_eq!(format_size(8911), "8.8K");
        assert_eq!(format_size(4096), "4.0K");
    }

    #[test]
    fn test_time_renders_in_utc() {
        assert_eq!(format_time(1699957865), "Nov 14 10:31");
        assert_eq!(format_time(0), "Jan 01 00:00");
    }

    #[test]
    fn test_day_and_minute_are_zero_padded() {
        // 2023-11-02 09:05:00 UTC
        assert_eq!(format_time(1698915900), "Nov 02 09:05");
    }
}
