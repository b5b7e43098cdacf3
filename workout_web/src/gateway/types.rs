use serde::de::DeserializeOwned;
use serde_json::Value;

use super::errors::GatewayError;

/// Successful backend response
///
/// `data` is `Null` for `204 No Content`, the decoded JSON for JSON bodies,
/// and a `String` for anything else.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayResponse {
    pub status: u16,
    pub data: Value,
}

impl GatewayResponse {
    /// Decodes `data[key]`, or `data` itself when the backend did not wrap the payload.
    pub fn decode<T: DeserializeOwned>(&self, key: &str) -> Result<T, GatewayError> {
        decode_envelope(&self.data, key)
    }
}

/// Decodes an enveloped payload such as `{"workout": {...}}`.
///
/// A bare payload is accepted too. A shape mismatch is reported as a 500
/// `GatewayError` so handlers never see serde errors.
pub fn decode_envelope<T: DeserializeOwned>(data: &Value, key: &str) -> Result<T, GatewayError> {
    let inner = data.get(key).unwrap_or(data);
    serde_json::from_value(inner.clone())
        .map_err(|e| GatewayError::unexpected_response(format!("decoding `{key}`: {e}")))
}

pub(super) fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|ct| ct.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

/// Turns a raw response into the uniform success or error shape.
pub(super) fn normalize_response(
    status: u16,
    content_type: Option<&str>,
    text: &str,
) -> Result<GatewayResponse, GatewayError> {
    let success = (200..300).contains(&status);

    if status == 204 {
        return Ok(GatewayResponse {
            status,
            data: Value::Null,
        });
    }

    if is_json_content_type(content_type) {
        let parsed = if text.trim().is_empty() {
            Ok(Value::Null)
        } else {
            serde_json::from_str::<Value>(text)
        };

        return match (success, parsed) {
            (true, Ok(data)) => Ok(GatewayResponse { status, data }),
            (true, Err(e)) => Err(GatewayError::unexpected_response(format!(
                "malformed JSON body: {e}"
            ))),
            (false, Ok(data)) => Err(GatewayError::from_response(status, Some(data), text)),
            (false, Err(_)) => Err(GatewayError::from_response(status, None, text)),
        };
    }

    if success {
        Ok(GatewayResponse {
            status,
            data: Value::String(text.to_string()),
        })
    } else {
        Err(GatewayError::from_response(status, None, text))
    }
}
