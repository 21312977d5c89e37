//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks (non-success → [`ClientError::Api`]) and
//! body decoding so the endpoint modules stay focused on request
//! construction.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ClientError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success, otherwise
/// [`ClientError::Api`] carrying the status code and response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    if !resp.status().is_success() {
        return Err(ClientError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Decode a successful response body as `T`.
pub async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let body = resp.text().await?;
    parse_body(&body)
}

/// Decode a response body, turning `{"success": false, "error": ...}` into
/// [`ClientError::Application`].
pub async fn decode_checked<T: DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, ClientError> {
    let body = resp.text().await?;
    let value: Value = parse_body(&body)?;
    reject_failure(&value)?;
    serde_json::from_value(value).map_err(|e| ClientError::Parse(e.to_string()))
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ClientError> {
    serde_json::from_str(body).map_err(|e| ClientError::Parse(e.to_string()))
}

fn reject_failure(value: &Value) -> Result<(), ClientError> {
    if value.get("success").and_then(Value::as_bool) == Some(false) {
        let message = value
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("request failed without an error message");
        return Err(ClientError::Application(message.to_string()));
    }
    Ok(())
}
