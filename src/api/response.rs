//! Response body handling shared by every gateway call.

use super::ApiError;
use reqwest::StatusCode;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Parses a response body, treating empty or malformed JSON as `{}`.
///
/// Parse failures are logged and swallowed; they never reach the caller.
#[must_use]
pub fn parse_body(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Object(Map::new());
    }

    serde_json::from_str(body).unwrap_or_else(|err| {
        warn!(error = %err, body_len = body.len(), "Response body is not JSON");
        Value::Object(Map::new())
    })
}

/// Maps a status and raw body to the call's result.
///
/// Non-2xx statuses fail with the body's `error` string when present, else
/// the status reason phrase.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for any non-success status.
pub fn interpret_response(status: StatusCode, body: &str) -> Result<Value, ApiError> {
    let value = parse_body(body);
    debug!(status = %status, "Interpreting response");

    if status.is_success() {
        return Ok(value);
    }

    let message = value
        .get("error")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|msg| !msg.is_empty())
        .map_or_else(|| status_text(status), str::to_string);

    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map_or_else(|| format!("HTTP {}", status.as_u16()), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_body_is_empty_object() {
        assert_eq!(parse_body(""), json!({}));
        assert_eq!(parse_body("  \n"), json!({}));
    }

    #[test]
    fn malformed_body_is_empty_object() {
        assert_eq!(parse_body("<html>oops</html>"), json!({}));
        assert_eq!(parse_body("{\"id\": "), json!({}));
    }

    #[test]
    fn json_body_is_parsed() {
        assert_eq!(parse_body("{\"id\": 4}"), json!({"id": 4}));
        assert_eq!(parse_body("[1, 2]"), json!([1, 2]));
    }

    #[test]
    fn success_with_empty_body() {
        let value = interpret_response(StatusCode::CREATED, "").unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn success_with_unparsable_body() {
        let value = interpret_response(StatusCode::OK, "not json").unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn failure_uses_error_field() {
        let err = interpret_response(
            StatusCode::BAD_REQUEST,
            r#"{"error": "guess must be a valid word from the dictionary"}"#,
        )
        .unwrap_err();

        assert_eq!(
            err,
            ApiError::Status {
                status: 400,
                message: "guess must be a valid word from the dictionary".to_string(),
            }
        );
    }

    #[test]
    fn failure_falls_back_to_reason_phrase() {
        let err = interpret_response(StatusCode::NOT_FOUND, "").unwrap_err();
        assert_eq!(err.to_string(), "Not Found");

        let err = interpret_response(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error": ""}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "Internal Server Error");
    }

    #[test]
    fn failure_without_reason_phrase() {
        let status = StatusCode::from_u16(599).unwrap();
        let err = interpret_response(status, "{}").unwrap_err();
        assert_eq!(err.to_string(), "HTTP 599");
    }
}
