//! Normalization of the `cpanelresult` response envelope.
//!
//! API 2 reports failure in several places depending on how things went
//! wrong: the HTTP status with `cpanelresult.error`, a `statusmsg` inside an
//! object `data`, or `result.status == 0` inside a list `data`. All of them
//! end up as a [`CpanelError`] here.

use cpanel_core::{CpanelError, Result};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct Envelope {
    cpanelresult: CpanelResult,
}

#[derive(Debug, Deserialize)]
struct CpanelResult {
    #[serde(default)]
    data: Value,

    #[serde(default)]
    error: Option<Value>,
}

/// Check a response and hand back its `data` member
pub(crate) fn into_data(function: &str, status: u16, body: &str) -> Result<Value> {
    let envelope = serde_json::from_str::<Envelope>(body);

    if !(200..300).contains(&status) {
        let message = envelope
            .ok()
            .and_then(|e| e.cpanelresult.error)
            .and_then(|e| non_empty_text(&e))
            .unwrap_or_else(|| fallback_message(status, body));

        return Err(match status {
            401 | 403 => CpanelError::Unauthorized { message },
            _ => CpanelError::remote(function, Some(status), message),
        });
    }

    let result = envelope
        .map_err(|e| CpanelError::InvalidResponse {
            function: function.to_string(),
            message: e.to_string(),
        })?
        .cpanelresult;

    if let Some(message) = embedded_failure(&result.data) {
        return Err(CpanelError::remote(function, None, message));
    }

    if let Some(message) = result.error.as_ref().and_then(non_empty_text) {
        return Err(CpanelError::remote(function, None, message));
    }

    Ok(result.data)
}

/// Failure message carried inside a successful response, if any
fn embedded_failure(data: &Value) -> Option<String> {
    match data {
        Value::Object(map) => map.get("statusmsg").map(text),
        Value::Array(items) => items.iter().find_map(|item| {
            let result = item.get("result")?;
            if is_truthy(result.get("status")?) {
                return None;
            }
            Some(
                result
                    .get("statusmsg")
                    .and_then(non_empty_text)
                    .unwrap_or_else(|| "request failed without a status message".to_string()),
            )
        }),
        _ => None,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_i64().map_or(true, |n| n != 0),
        Value::String(s) => !matches!(s.trim(), "" | "0"),
        Value::Null => false,
        _ => true,
    }
}

fn fallback_message(status: u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("HTTP {status}")
    } else {
        format!("HTTP {status}: {body}")
    }
}

fn non_empty_text(value: &Value) -> Option<String> {
    Some(text(value)).filter(|s| !s.trim().is_empty())
}

/// Render a JSON scalar without quotes
pub(crate) fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: &Value) -> String {
        value.to_string()
    }

    #[test]
    fn test_success_returns_data() {
        let response = body(&json!({"cpanelresult": {"data": [{"line": 3}], "event": {"result": 1}}}));
        let data = into_data("fetchzone_records", 200, &response).unwrap();
        assert_eq!(data, json!([{"line": 3}]));
    }

    #[test]
    fn test_http_error_uses_nested_error() {
        let response = body(&json!({"cpanelresult": {"error": "Internal failure", "data": null}}));
        let err = into_data("fetchzone_records", 500, &response).unwrap_err();
        match err {
            CpanelError::Remote { function, status, message } => {
                assert_eq!(function, "fetchzone_records");
                assert_eq!(status, Some(500));
                assert_eq!(message, "Internal failure");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_http_error_with_plain_body() {
        let err = into_data("remove_zone_record", 502, "Bad Gateway").unwrap_err();
        assert!(err.to_string().contains("HTTP 502: Bad Gateway"));

        let err = into_data("remove_zone_record", 503, "").unwrap_err();
        assert!(err.to_string().contains("HTTP 503"));
    }

    #[test]
    fn test_unauthorized() {
        let response = body(&json!({"cpanelresult": {"error": "Access denied"}}));
        let err = into_data("fetchzone_records", 401, &response).unwrap_err();
        assert!(err.is_auth_error());
        assert!(err.to_string().contains("Access denied"));
    }

    #[test]
    fn test_statusmsg_object_is_failure() {
        let response = body(&json!({"cpanelresult": {"data": {"statusmsg": "No such zone"}}}));
        let err = into_data("add_zone_record", 200, &response).unwrap_err();
        assert_eq!(err.to_string(), "cPanel add_zone_record failed: No such zone");
    }

    #[test]
    fn test_result_status_list() {
        let ok = body(&json!({"cpanelresult": {"data": [
            {"result": {"status": 1, "statusmsg": "Bind reloading on server"}}
        ]}}));
        assert!(into_data("add_zone_record", 200, &ok).is_ok());

        let failed = body(&json!({"cpanelresult": {"data": [
            {"result": {"status": 0, "statusmsg": "Failed to serialize zone"}}
        ]}}));
        let err = into_data("edit_zone_record", 200, &failed).unwrap_err();
        assert!(err.to_string().contains("Failed to serialize zone"));
    }

    #[test]
    fn test_embedded_error_field() {
        let response = body(&json!({"cpanelresult": {"data": [], "error": "Permission denied"}}));
        let err = into_data("fetchzone_records", 200, &response).unwrap_err();
        assert!(err.to_string().contains("Permission denied"));

        let response = body(&json!({"cpanelresult": {"data": [], "error": ""}}));
        assert!(into_data("fetchzone_records", 200, &response).is_ok());
    }

    #[test]
    fn test_malformed_success_body() {
        let err = into_data("fetchzone_records", 200, "<html>login</html>").unwrap_err();
        assert!(matches!(err, CpanelError::InvalidResponse { .. }));
    }
}
