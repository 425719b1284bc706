//! Date helpers for inputs and tables

/// Value for an `<input type="date">`: the leading "YYYY-MM-DD", or empty
pub fn date_input_value(raw: &str) -> String {
    let raw = raw.trim();
    match raw.get(0..10) {
        Some(date) if date.as_bytes()[4] == b'-' && date.as_bytes()[7] == b'-' => date.to_string(),
        _ => String::new(),
    }
}

/// ISO timestamp as "DD/MM/YYYY HH:MM"
/// Example: "2024-03-15T14:02:26.123Z" -> "15/03/2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                let time = time_part.get(0..5).unwrap_or(time_part);
                return format!("{}/{}/{} {}", day, month, year, time);
            }
        }
    }
    datetime_str.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_input_value() {
        assert_eq!(date_input_value("2025-03-04T00:00:00Z"), "2025-03-04");
        assert_eq!(date_input_value("2025-03-04"), "2025-03-04");
        assert_eq!(date_input_value(""), "");
        assert_eq!(date_input_value("yesterday!"), "");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15/03/2024 14:02");
        assert_eq!(format_datetime("invalid"), "invalid");
    }
}
