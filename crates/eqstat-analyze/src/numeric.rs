//! Numeric coercion for parameter columns.
//!
//! Handles the formats sensor exports actually contain: plain numbers,
//! thousands separators, stray whitespace, scientific notation. Anything
//! else, including non-finite tokens, coerces to missing and excludes the
//! row from analysis.

/// Parse a string value to a finite f64.
///
/// Returns None if the value cannot be parsed as a finite number.
pub fn parse_numeric(value: &str) -> Option<f64> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return None;
    }

    // Remove thousands separators and whitespace
    let cleaned = trimmed
        .replace(',', "")
        .replace(' ', "")
        .replace('\u{a0}', ""); // Non-breaking space

    match cleaned.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Some(parsed),
        _ => None,
    }
}

/// Check if a string represents a usable numeric value.
pub fn is_numeric(value: &str) -> bool {
    parse_numeric(value).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_integer() {
        assert_eq!(parse_numeric("123"), Some(123.0));
        assert_eq!(parse_numeric("-456"), Some(-456.0));
    }

    #[test]
    fn test_decimal() {
        assert_eq!(parse_numeric("123.45"), Some(123.45));
        assert_eq!(parse_numeric("-0.5"), Some(-0.5));
    }

    #[test]
    fn test_thousands_separator() {
        assert_eq!(parse_numeric("1,234,567"), Some(1234567.0));
        assert_eq!(parse_numeric("1,234.56"), Some(1234.56));
    }

    #[test]
    fn test_whitespace() {
        assert_eq!(parse_numeric("  123  "), Some(123.0));
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(parse_numeric("1.23e5"), Some(123000.0));
        assert_eq!(parse_numeric("1.5E-3"), Some(0.0015));
    }

    #[test]
    fn test_empty() {
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("  "), None);
    }

    #[test]
    fn test_invalid() {
        assert_eq!(parse_numeric("abc"), None);
        assert_eq!(parse_numeric("12.34.56"), None);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert_eq!(parse_numeric("nan"), None);
        assert_eq!(parse_numeric("inf"), None);
        assert_eq!(parse_numeric("-infinity"), None);
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("123"));
        assert!(is_numeric("45.67"));
        assert!(!is_numeric("abc"));
        assert!(!is_numeric(""));
    }
}
