//! Countdown time formatting

/// Format a second count as `mm:ss`.
///
/// Minutes are unbounded and padded to at least two digits, seconds are
/// always two digits.
pub fn format_time(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Parse an `mm:ss` string back into seconds.
///
/// Returns `None` when the text is not two colon-separated numbers or the
/// seconds part is 60 or more.
pub fn parse_time(text: &str) -> Option<u64> {
    let (minutes, seconds) = text.trim().split_once(':')?;
    if seconds.len() != 2 || minutes.is_empty() {
        return None;
    }
    let minutes: u64 = minutes.parse().ok()?;
    let seconds: u64 = seconds.parse().ok()?;
    if seconds >= 60 {
        return None;
    }
    minutes.checked_mul(60)?.checked_add(seconds)
}
