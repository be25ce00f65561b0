//! Shared formatting utilities for the UI layer.

use chrono::{DateTime, Utc};
use shared_types::CURRENCY;

/// Format a timestamp as "Mar 1, 2025". Missing dates render as a dash.
pub fn format_date(date: Option<&DateTime<Utc>>) -> String {
    match date {
        Some(d) => d.format("%b %-d, %Y").to_string(),
        None => "-".to_string(),
    }
}

/// Format a timestamp as "Mar 1, 2025 8:30 AM" (UTC).
pub fn format_datetime(date: Option<&DateTime<Utc>>) -> String {
    match date {
        Some(d) => d.format("%b %-d, %Y %-I:%M %p").to_string(),
        None => "-".to_string(),
    }
}

/// Format an amount with grouped thousands, e.g. `1000.0` → "1,000 tk".
/// Fractions are kept to two places and dropped when zero.
pub fn format_amount(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let digits = (cents / 100).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    match cents % 100 {
        0 => format!("{sign}{grouped} {CURRENCY}"),
        fraction => format!("{sign}{grouped}.{fraction:02} {CURRENCY}"),
    }
}

/// Shorten text to at most `max` characters, appending an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}
