//! Countdown helpers

/// Seconds in one minute
pub const SECONDS_PER_MINUTE: u32 = 60;

/// Convert whole minutes to seconds
pub fn minutes_to_seconds(minutes: u32) -> u32 {
    minutes.saturating_mul(SECONDS_PER_MINUTE)
}

/// Format a countdown as `mm:ss`.
///
/// Minutes are zero-padded to two digits but not capped, so a 75 minute
/// countdown renders as `75:00` and anything past 99 minutes widens.
pub fn format_clock(seconds: u32) -> String {
    format!(
        "{:02}:{:02}",
        seconds / SECONDS_PER_MINUTE,
        seconds % SECONDS_PER_MINUTE
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(180), "03:00");
        assert_eq!(format_clock(1201), "20:01");
        assert_eq!(format_clock(6000), "100:00");
    }

    #[test]
    fn test_minutes_to_seconds() {
        assert_eq!(minutes_to_seconds(0), 0);
        assert_eq!(minutes_to_seconds(3), 180);
        assert_eq!(minutes_to_seconds(u32::MAX), u32::MAX);
    }
}
