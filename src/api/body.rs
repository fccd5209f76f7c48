//! Field extraction over JSON request bodies.
//!
//! Handlers take bodies as `Json<Value>` and pull fields through these
//! helpers so missing or mistyped input surfaces as a 400 with a field-level
//! message instead of a framework rejection.

use serde_json::Value;

use crate::error::ApiError;

/// Required non-empty string field
pub fn require_str(body: &Value, key: &str) -> Result<String, ApiError> {
    match body.get(key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        Some(Value::String(_)) => Err(ApiError::bad_request(format!("{} must not be empty", key))),
        Some(_) => Err(ApiError::bad_request(format!("{} must be a string", key))),
        None => Err(ApiError::bad_request(format!("{} is required", key))),
    }
}

/// Required strictly-positive numeric field
pub fn require_positive_number(body: &Value, key: &str) -> Result<f64, ApiError> {
    match body.get(key) {
        Some(value) => match value.as_f64() {
            Some(n) if n > 0.0 => Ok(n),
            Some(_) => Err(ApiError::bad_request(format!("{} must be positive", key))),
            None => Err(ApiError::bad_request(format!("{} must be a number", key))),
        },
        None => Err(ApiError::bad_request(format!("{} is required", key))),
    }
}

/// Optional strictly-positive integer field. Absent and null both mean "not
/// provided"; anything else must be a positive integer.
pub fn optional_positive_int(body: &Value, key: &str) -> Result<Option<i32>, ApiError> {
    match body.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => match value.as_i64() {
            Some(n) if n > 0 && n <= i32::MAX as i64 => Ok(Some(n as i32)),
            Some(_) => Err(ApiError::bad_request(format!(
                "{} must be a positive integer",
                key
            ))),
            None => Err(ApiError::bad_request(format!(
                "{} must be a positive integer",
                key
            ))),
        },
    }
}

/// Optional strictly-positive numeric field, for partial updates
pub fn optional_positive_number(body: &Value, key: &str) -> Result<Option<f64>, ApiError> {
    match body.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => match value.as_f64() {
            Some(n) if n > 0.0 => Ok(Some(n)),
            Some(_) => Err(ApiError::bad_request(format!("{} must be positive", key))),
            None => Err(ApiError::bad_request(format!("{} must be a number", key))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn require_str_accepts_and_trims() {
        let body = json!({ "name": "  Mayo  " });
        assert_eq!(require_str(&body, "name").unwrap(), "Mayo");
    }

    #[test]
    fn require_str_rejects_missing_empty_and_mistyped() {
        assert_eq!(require_str(&json!({}), "name").unwrap_err().status_code(), 400);
        assert_eq!(
            require_str(&json!({ "name": "   " }), "name").unwrap_err().status_code(),
            400
        );
        assert_eq!(
            require_str(&json!({ "name": 7 }), "name").unwrap_err().status_code(),
            400
        );
    }

    #[test]
    fn require_positive_number_bounds() {
        assert_eq!(require_positive_number(&json!({ "weight": 100 }), "weight").unwrap(), 100.0);
        assert_eq!(
            require_positive_number(&json!({ "weight": 62.5 }), "weight").unwrap(),
            62.5
        );
        assert!(require_positive_number(&json!({ "weight": 0 }), "weight").is_err());
        assert!(require_positive_number(&json!({ "weight": -5 }), "weight").is_err());
        assert!(require_positive_number(&json!({ "weight": "heavy" }), "weight").is_err());
        assert!(require_positive_number(&json!({}), "weight").is_err());
    }

    #[test]
    fn optional_positive_int_behavior() {
        assert_eq!(optional_positive_int(&json!({}), "reps").unwrap(), None);
        assert_eq!(optional_positive_int(&json!({ "reps": null }), "reps").unwrap(), None);
        assert_eq!(optional_positive_int(&json!({ "reps": 5 }), "reps").unwrap(), Some(5));
        assert!(optional_positive_int(&json!({ "reps": 0 }), "reps").is_err());
        assert!(optional_positive_int(&json!({ "reps": -3 }), "reps").is_err());
        assert!(optional_positive_int(&json!({ "reps": 2.5 }), "reps").is_err());
        assert!(optional_positive_int(&json!({ "reps": "five" }), "reps").is_err());
    }
}
