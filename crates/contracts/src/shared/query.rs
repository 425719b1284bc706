/// Build a URL query string ("?a=1&b=2") from ordered key/value pairs.
/// Keys may repeat. Returns an empty string when there are no pairs.
pub fn build_query(pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let joined = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!("?{}", joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_query() {
        assert_eq!(build_query(&[]), "");
        assert_eq!(
            build_query(&[
                ("division", "Oil Mining & Goverments".to_string()),
                ("status", "Prospect".to_string()),
                ("status", "Carry Over".to_string()),
            ]),
            "?division=Oil%20Mining%20%26%20Goverments&status=Prospect&status=Carry%20Over"
        );
    }
}
