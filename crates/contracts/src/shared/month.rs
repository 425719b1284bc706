//! Month strings ("YYYY-MM") as used by revenue plans, budgets and the dashboard

use chrono::Datelike;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// "YYYY-MM" prefix with a month in 01..=12
fn is_year_month_prefix(bytes: &[u8]) -> bool {
    bytes.len() >= 7
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[4] == b'-'
        && bytes[5..7].iter().all(u8::is_ascii_digit)
        && (1..=12).contains(&((bytes[5] - b'0') * 10 + (bytes[6] - b'0')))
}

/// Keep "YYYY-MM", truncate "YYYY-MM-DD..." to "YYYY-MM", reject anything else
pub fn normalize_month(raw: &str) -> Option<String> {
    let bytes = raw.trim().as_bytes();
    if !is_year_month_prefix(bytes) {
        return None;
    }
    match bytes.len() {
        7 => Some(raw.trim().to_string()),
        n if n >= 10 && bytes[7] == b'-' && bytes[8..10].iter().all(u8::is_ascii_digit) => {
            Some(raw.trim()[..7].to_string())
        }
        _ => None,
    }
}

/// Year and month number of a month string
pub fn split_month(raw: &str) -> Option<(i32, u32)> {
    let month = normalize_month(raw)?;
    let year = month[..4].parse().ok()?;
    let mon: u32 = month[5..7].parse().ok()?;
    (1..=12).contains(&mon).then_some((year, mon))
}

pub fn year_of(raw: &str) -> Option<i32> {
    normalize_month(raw).and_then(|m| m[..4].parse().ok())
}

pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month.checked_sub(1)? as usize).copied()
}

/// "2025-01" -> "Jan 2025"; "-" when the input is not a month
pub fn month_label(raw: &str) -> String {
    match split_month(raw) {
        Some((year, mon)) => match month_name(mon) {
            Some(name) => format!("{} {}", name, year),
            None => "-".to_string(),
        },
        None => "-".to_string(),
    }
}

/// The twelve months of a calendar year, "YYYY-01" through "YYYY-12"
pub fn months_of_year(year: i32) -> Vec<String> {
    (1..=12).map(|m| format!("{:04}-{:02}", year, m)).collect()
}

/// "YYYY-MM" -> "YYYY-MM-01"; other strings are passed through unchanged
pub fn month_to_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.len() == 7 && normalize_month(trimmed).is_some() {
        format!("{}-01", trimmed)
    } else {
        trimmed.to_string()
    }
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Current month as "YYYY-MM"
pub fn current_month() -> String {
    chrono::Local::now().format("%Y-%m").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_month() {
        assert_eq!(normalize_month("2025-03"), Some("2025-03".to_string()));
        assert_eq!(normalize_month("2025-03-15"), Some("2025-03".to_string()));
        assert_eq!(
            normalize_month("2025-03-15T00:00:00Z"),
            Some("2025-03".to_string())
        );
        assert_eq!(normalize_month("2025-3"), None);
        assert_eq!(normalize_month("March 2025"), None);
        assert_eq!(normalize_month(""), None);
        assert_eq!(normalize_month("2025-03x"), None);
    }

    #[test]
    fn test_normalize_month_rejects_out_of_range_months() {
        assert_eq!(normalize_month("2025-00"), None);
        assert_eq!(normalize_month("2025-13"), None);
        assert_eq!(normalize_month("2025-13-01"), None);
        assert_eq!(normalize_month("2025-12"), Some("2025-12".to_string()));
        assert_eq!(month_label("2025-13"), "-");
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label("2025-01"), "Jan 2025");
        assert_eq!(month_label("2024-12-31"), "Dec 2024");
        assert_eq!(month_label("2025-13"), "-");
        assert_eq!(month_label("nope"), "-");
    }

    #[test]
    fn test_months_of_year() {
        let months = months_of_year(2025);
        assert_eq!(months.len(), 12);
        assert_eq!(months[0], "2025-01");
        assert_eq!(months[11], "2025-12");
    }

    #[test]
    fn test_year_of() {
        assert_eq!(year_of("2024-07"), Some(2024));
        assert_eq!(year_of("2024-07-01"), Some(2024));
        assert_eq!(year_of(""), None);
    }

    #[test]
    fn test_month_to_date() {
        assert_eq!(month_to_date("2025-04"), "2025-04-01");
        assert_eq!(month_to_date("2025-04-15"), "2025-04-15");
        assert_eq!(month_to_date(""), "");
    }
}
