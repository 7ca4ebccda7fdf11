use serde_json::Value;

use crate::domain::SendPulseResponse;

/// Turn a raw status and body into the unified result.
///
/// Only JSON objects and arrays become `data`. Empty bodies, parse failures and
/// scalar JSON leave `data` absent; the latter two are logged. `is_error` depends
/// on the status code alone.
pub fn normalize(status: u16, body: &str) -> SendPulseResponse {
    SendPulseResponse::from_http(status, parse_body(status, body))
}

fn parse_body(status: u16, body: &str) -> Option<Value> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(value @ (Value::Object(_) | Value::Array(_))) => Some(value),
        Ok(other) => {
            tracing::warn!(
                status,
                kind = json_kind(&other),
                "invalid response: expected JSON object or array"
            );
            None
        }
        Err(err) => {
            tracing::warn!(status, error = %err, "failed to parse response body as JSON");
            None
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
