//! Utilities for date, time and money formatting
//!
//! Provides consistent formatting across the portal's tables and cards.

use chrono::{DateTime, NaiveDateTime};

/// Format ISO datetime string to `YYYY-MM-DD HH:MM` format
/// Example: "2024-03-15T14:02:26.123Z" -> "2024-03-15 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    const OUT: &str = "%Y-%m-%d %H:%M";
    let trimmed = datetime_str.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return dt.format(OUT).to_string();
    }
    for pattern in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return dt.format(OUT).to_string();
        }
    }
    datetime_str.to_string()
}

/// Format ISO date string to `YYYY-MM-DD`, dropping any time part
/// Example: "2024-03-15T14:02:26Z" -> "2024-03-15"
pub fn format_date(date_str: &str) -> String {
    date_str
        .split(['T', ' '])
        .next()
        .unwrap_or(date_str)
        .to_string()
}

/// Optional timestamp for table cells: `-` when absent.
pub fn format_optional(value: &Option<String>) -> String {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => format_datetime(v),
        _ => "-".to_string(),
    }
}

/// Peso amount with thousands separators: `1299.5` -> `₱1,299.50`
pub fn format_money(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let (whole, frac) = (cents / 100, cents % 100);
    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}₱{}.{:02}", sign, grouped, frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "2024-03-15 14:02");
        assert_eq!(format_datetime("2024-12-31 23:59:59"), "2024-12-31 23:59");
        // offset is kept, not converted
        assert_eq!(format_datetime("2024-06-01T08:30:00+08:00"), "2024-06-01 08:30");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "2024-03-15");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "2024-03-15");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_optional(&None), "-");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1299.0), "₱1,299.00");
        assert_eq!(format_money(1234567.891), "₱1,234,567.89");
        assert_eq!(format_money(0.5), "₱0.50");
        assert_eq!(format_money(-250.0), "-₱250.00");
    }
}
