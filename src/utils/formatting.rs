//! Formatting utilities used for CLI and export outputs.

/// "08h 05m" rendering of a number of seconds.
pub fn hours_readable(secs: i64) -> String {
    let mins = secs.max(0) / 60;
    format!("{:02}h {:02}m", mins / 60, mins % 60)
}

/// Cut `s` to at most `width` characters, ending with "..." when shortened.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut out: String = s.chars().take(width.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

/// Placeholder for absent optional values.
pub fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("--").to_string()
}
