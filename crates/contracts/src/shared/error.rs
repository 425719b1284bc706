use serde_json::Value;
use thiserror::Error;

/// Message used when a failed response carries nothing readable
pub const FALLBACK_ERROR_MESSAGE: &str = "API request failed";

/// Failure of a single API call. Every variant renders as the text shown
/// inline next to the control that triggered the request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Not authenticated")]
    NotAuthenticated,
}

impl ApiError {
    /// Build the error for a non-2xx response from its status and raw body text
    pub fn from_response_body(status: u16, body: &str) -> Self {
        if status == 401 {
            return ApiError::Unauthorized;
        }
        ApiError::Http {
            status,
            message: extract_error_message(body),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

/// Pull a readable message out of an error body.
///
/// JSON objects use their `error` field, then `message`; a JSON string or a
/// non-JSON body is used as-is; anything else falls back to a generic text.
pub fn extract_error_message(body: &str) -> String {
    let raw = body.trim();
    if raw.is_empty() {
        return FALLBACK_ERROR_MESSAGE.to_string();
    }

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => ["error", "message"]
            .iter()
            .filter_map(|key| map.get(*key))
            .filter_map(|v| v.as_str())
            .find(|s| !s.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string()),
        Ok(Value::String(s)) if !s.trim().is_empty() => s,
        Ok(_) => FALLBACK_ERROR_MESSAGE.to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Form-level validation failure. Raised before any request is made.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{0} is required.")]
    Required(&'static str),

    #[error("Project type \"New Recurring\" is only allowed when status is \"New Prospect\".")]
    NewRecurringRequiresNewProspect,

    #[error("SPH number is required when SPH is released.")]
    SphNumberRequired,

    #[error("Reason category is required when SPH status is Loss or Drop.")]
    ReasonCategoryRequired,

    #[error("A note is required when the reason category is Other.")]
    ReasonNoteRequired,

    #[error("Revenue plan is not filled in correctly.")]
    RevenuePlanEmpty,

    #[error("Revenue plan row {row}: month is required.")]
    RevenuePlanMonthMissing { row: usize },

    #[error("Revenue plan row {row}: target revenue must be greater than 0.")]
    RevenuePlanValueNotPositive { row: usize },

    #[error("Duplicate months in revenue plan.")]
    RevenuePlanDuplicateMonth,

    #[error("Budget amount must be a number ≥ 0.")]
    NegativeBudget,

    #[error("Budget cannot be lower than the total realization (Rp {0}).")]
    BudgetBelowRealization(String),

    #[error("Amount must be a number > 0.")]
    NonPositiveAmount,

    #[error("Realization must be a number ≥ 0.")]
    NegativeRealization,

    #[error("Password is required.")]
    PasswordRequired,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_field_wins_over_message() {
        let body = r#"{"error":"budget not found","message":"ignored"}"#;
        assert_eq!(extract_error_message(body), "budget not found");
    }

    #[test]
    fn test_message_field_used_when_error_missing() {
        assert_eq!(extract_error_message(r#"{"message":"bad month"}"#), "bad month");
    }

    #[test]
    fn test_plain_text_body_used_verbatim() {
        assert_eq!(extract_error_message("gateway timeout"), "gateway timeout");
        assert_eq!(extract_error_message(r#""quoted text""#), "quoted text");
    }

    #[test]
    fn test_fallback_message() {
        assert_eq!(extract_error_message(""), FALLBACK_ERROR_MESSAGE);
        assert_eq!(extract_error_message("{}"), FALLBACK_ERROR_MESSAGE);
        assert_eq!(extract_error_message("[1,2]"), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn test_server_error_displays_body_message() {
        let err = ApiError::from_response_body(500, r#"{"error":"trend query failed"}"#);
        assert!(!err.is_unauthorized());
        assert_eq!(err.to_string(), "trend query failed");
        assert_eq!(
            ApiError::Network("connection refused".into()).to_string(),
            "Network error: connection refused"
        );
    }

    #[test]
    fn test_401_maps_to_unauthorized() {
        assert!(ApiError::from_response_body(401, r#"{"error":"expired"}"#).is_unauthorized());
        assert_eq!(
            ApiError::from_response_body(409, r#"{"error":"already exists"}"#).to_string(),
            "already exists"
        );
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::Required("Customer").to_string(),
            "Customer is required."
        );
        assert_eq!(
            ValidationError::BudgetBelowRealization("5.000.000".into()).to_string(),
            "Budget cannot be lower than the total realization (Rp 5.000.000)."
        );
    }
}
