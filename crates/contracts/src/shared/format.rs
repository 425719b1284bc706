//! Number formatting for money and percentages

/// Group the digits of a non-negative integer string with the given separator
fn group_thousands(digits: &str, sep: char) -> String {
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(sep);
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Indonesian-style amount: "." between thousands, "," before up to two decimals.
/// Non-finite input formats as "0".
pub fn format_idr(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let cents = (value.abs() * 100.0).round() as u128;
    let int_part = group_thousands(&(cents / 100).to_string(), '.');
    let frac = cents % 100;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    if frac == 0 {
        format!("{}{}", sign, int_part)
    } else {
        let frac = format!("{:02}", frac);
        format!("{}{},{}", sign, int_part, frac.trim_end_matches('0'))
    }
}

/// "Rp 1.500.000"
pub fn format_rupiah(value: f64) -> String {
    format!("Rp {}", format_idr(value))
}

/// One decimal place, e.g. 83.333 -> "83.3"
pub fn format_percent_1(value: f64) -> String {
    format!("{:.1}", value)
}

/// Ratio as percentage, 0 when the denominator is 0
pub fn percent_of(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        part / total * 100.0
    }
}

/// Parse a user-typed number. Blank or malformed input yields `None`.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != '_').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_idr() {
        assert_eq!(format_idr(0.0), "0");
        assert_eq!(format_idr(999.0), "999");
        assert_eq!(format_idr(1_000.0), "1.000");
        assert_eq!(format_idr(1_234_567.0), "1.234.567");
        assert_eq!(format_idr(-5_000_000.0), "-5.000.000");
        assert_eq!(format_idr(1_500.5), "1.500,5");
        assert_eq!(format_idr(f64::NAN), "0");
    }

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(5_000_000.0), "Rp 5.000.000");
    }

    #[test]
    fn test_percent_of_zero_total() {
        assert_eq!(percent_of(10.0, 0.0), 0.0);
        assert_eq!(percent_of(50.0, 200.0), 25.0);
        assert_eq!(format_percent_1(percent_of(1.0, 3.0)), "33.3");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("4000000"), Some(4_000_000.0));
        assert_eq!(parse_amount(" 12.5 "), Some(12.5));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
    }
}
