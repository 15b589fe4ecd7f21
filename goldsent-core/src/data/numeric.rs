//! Lenient count parsing for spreadsheet cells and feed strings.

/// Parse a non-negative count such as `"248,000"`. Empty or invalid → `None`.
pub fn parse_count(s: &str) -> Option<u64> {
    let cleaned = strip_separators(s);
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<u64>().ok().or_else(|| {
        // Some exports write counts as "248000.0"
        cleaned
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0 && v.fract() == 0.0)
            .map(|v| v as u64)
    })
}

/// Parse a signed count such as `"-17,500"` or `"+45,000"`.
pub fn parse_signed(s: &str) -> Option<i64> {
    let cleaned = strip_separators(s);
    let cleaned = cleaned.strip_prefix('+').unwrap_or(&cleaned);
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<i64>().ok()
}

/// Parse a decimal price such as `"2,204.70"`.
pub fn parse_price(s: &str) -> Option<f64> {
    let cleaned = strip_separators(s);
    let cleaned = cleaned.strip_prefix('$').unwrap_or(&cleaned);
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn strip_separators(s: &str) -> String {
    s.trim().chars().filter(|c| *c != ',').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_with_thousands_separators() {
        assert_eq!(parse_count("248,000"), Some(248_000));
        assert_eq!(parse_count(" 1,234,567 "), Some(1_234_567));
        assert_eq!(parse_count("250631.0"), Some(250_631));
    }

    #[test]
    fn bad_counts_are_none() {
        assert_eq!(parse_count(""), None);
        assert_eq!(parse_count("n/a"), None);
        assert_eq!(parse_count("-5"), None);
        assert_eq!(parse_count("1.5"), None);
    }

    #[test]
    fn signed_counts() {
        assert_eq!(parse_signed("-17,500"), Some(-17_500));
        assert_eq!(parse_signed("+45,000"), Some(45_000));
        assert_eq!(parse_signed("UNCH"), None);
    }

    #[test]
    fn prices() {
        assert_eq!(parse_price("2,204.70"), Some(2204.7));
        assert_eq!(parse_price("$2188.4"), Some(2188.4));
        assert_eq!(parse_price("-"), None);
    }
}
