use serde::de::DeserializeOwned;
use serde_json::Value;

/// Normalise a list response.
///
/// Endpoints answer with a bare array or with the array wrapped under `data`
/// (customers also use `customers`). Anything else is treated as an empty list.
pub fn list_from_value<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, serde_json::Error> {
    let array = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => ["data", "customers", "items"]
            .iter()
            .find_map(|key| match map.remove(*key) {
                Some(v @ Value::Array(_)) => Some(v),
                _ => None,
            })
            .unwrap_or_else(|| Value::Array(Vec::new())),
        _ => Value::Array(Vec::new()),
    };
    serde_json::from_value(array)
}

/// Decode a response body. An empty body (e.g. 204 No Content) decodes as
/// JSON `null`, so callers expecting nothing use `()` or `Option<T>`.
pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, serde_json::Error> {
    let body = body.trim();
    serde_json::from_str(if body.is_empty() { "null" } else { body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_array() {
        let list: Vec<i64> = list_from_value(json!([1, 2, 3])).unwrap();
        assert_eq!(list, vec![1, 2, 3]);
    }

    #[test]
    fn test_wrapped_array() {
        let list: Vec<i64> = list_from_value(json!({"data": [4]})).unwrap();
        assert_eq!(list, vec![4]);
        let list: Vec<i64> = list_from_value(json!({"customers": [5, 6]})).unwrap();
        assert_eq!(list, vec![5, 6]);
    }

    #[test]
    fn test_unexpected_shapes_are_empty() {
        let list: Vec<i64> = list_from_value(json!(null)).unwrap();
        assert!(list.is_empty());
        let list: Vec<i64> = list_from_value(json!({"data": null})).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_empty_body_decodes_as_null() {
        assert!(decode_body::<()>("").is_ok());
        let missing: Option<i64> = decode_body("  ").unwrap();
        assert_eq!(missing, None);
        let value: serde_json::Value = decode_body(r#"{"ok":true}"#).unwrap();
        assert_eq!(value["ok"], json!(true));
    }

    #[test]
    fn test_bad_body_is_an_error() {
        assert!(decode_body::<i64>("<html>").is_err());
    }
}
