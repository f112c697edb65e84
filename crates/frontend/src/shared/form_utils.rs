//! Conversions between form inputs and optional DTO fields.

/// `None` for blank input, trimmed text otherwise.
pub fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn parse_i64_or(value: &str, fallback: i64) -> i64 {
    value.trim().parse().unwrap_or(fallback)
}

pub fn parse_f64_or(value: &str, fallback: f64) -> f64 {
    value
        .trim()
        .replace(',', "")
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .unwrap_or(fallback)
}

pub fn parse_optional_i64(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

pub fn show_optional<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  ".to_string()), None);
        assert_eq!(non_empty(" Fiber ".to_string()).as_deref(), Some("Fiber"));
    }

    #[test]
    fn test_parsers() {
        assert_eq!(parse_i64_or("12", 0), 12);
        assert_eq!(parse_i64_or("x", 3), 3);
        assert_eq!(parse_f64_or("1,450.50", 0.0), 1450.5);
        assert_eq!(parse_f64_or("NaN", 1.0), 1.0);
        assert_eq!(parse_optional_i64(""), None);
        assert_eq!(show_optional(&Some(5)), "5");
        assert_eq!(show_optional::<i64>(&None), "");
    }
}
