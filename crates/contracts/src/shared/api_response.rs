//! Response envelope used by every backend endpoint.
//!
//! The wire shape is `{ "success": bool, "data": T?, "message": string? }`.
//! It is converted once, at the edge, into [`ApiResponse`] so that callers
//! match on an explicit success/error variant instead of probing fields.

use super::ApiError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

const MAX_ERROR_BODY: usize = 200;

/// Raw envelope as sent by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Discriminated response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ApiResponse<T> {
    Success { data: T },
    Error { message: String },
}

impl<T> ApiEnvelope<T> {
    pub fn into_response(self) -> ApiResponse<Option<T>> {
        if self.success {
            ApiResponse::Success { data: self.data }
        } else {
            let message = self
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| "Request failed".to_string());
            ApiResponse::Error { message }
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            ApiResponse::Success { data } => Ok(data),
            ApiResponse::Error { message } => Err(ApiError::Api(message)),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success { .. })
    }
}

impl<T> ApiResponse<Option<T>> {
    /// Success without a payload becomes [`ApiError::MissingData`].
    pub fn require_data(self) -> Result<T, ApiError> {
        self.into_result()?.ok_or(ApiError::MissingData)
    }
}

/// Decode a response body into an [`ApiResponse`].
///
/// A body that is not an envelope is reported as [`ApiError::Http`] for
/// non-2xx statuses and as [`ApiError::Decode`] otherwise. An envelope is
/// honoured whatever the status, so `422 { success: false, message }` keeps
/// the backend's message.
pub fn decode_envelope<T: DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<ApiResponse<Option<T>>, ApiError> {
    match serde_json::from_str::<ApiEnvelope<T>>(body) {
        Ok(envelope) => Ok(envelope.into_response()),
        Err(e) if (200..300).contains(&status) => Err(ApiError::Decode(e.to_string())),
        Err(_) => Err(ApiError::Http {
            status,
            body: body.chars().take(MAX_ERROR_BODY).collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: i64,
    }

    #[test]
    fn test_success_with_data() {
        let body = r#"{"success":true,"data":[{"id":1},{"id":2}]}"#;
        let items: Vec<Item> = decode_envelope(200, body).unwrap().require_data().unwrap();
        assert_eq!(items, vec![Item { id: 1 }, Item { id: 2 }]);
    }

    #[test]
    fn test_api_failure_keeps_message() {
        let body = r#"{"success":false,"message":"Pattern not found"}"#;
        let err = decode_envelope::<Item>(404, body).unwrap().require_data().unwrap_err();
        assert_eq!(err, ApiError::Api("Pattern not found".to_string()));
    }

    #[test]
    fn test_failure_without_message_gets_default() {
        let body = r#"{"success":false,"message":"  "}"#;
        let response = decode_envelope::<Item>(200, body).unwrap();
        assert_eq!(
            response,
            ApiResponse::Error {
                message: "Request failed".to_string()
            }
        );
    }

    #[test]
    fn test_success_without_data() {
        let body = r#"{"success":true,"message":"Deleted"}"#;
        let response = decode_envelope::<Item>(200, body).unwrap();
        assert!(response.is_success());
        assert_eq!(response.require_data().unwrap_err(), ApiError::MissingData);
    }

    #[test]
    fn test_null_data_decodes_as_none() {
        // `Item` has no `Default`; a null or absent payload still decodes.
        let body = r#"{"success":true,"data":null}"#;
        let response = decode_envelope::<Item>(200, body).unwrap();
        assert_eq!(response, ApiResponse::Success { data: None });
    }

    #[test]
    fn test_non_envelope_error_page() {
        let body = "<html>Bad Gateway</html>";
        let err = decode_envelope::<Item>(502, body).unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 502,
                body: body.to_string()
            }
        );
    }

    #[test]
    fn test_malformed_success_body() {
        let err = decode_envelope::<Item>(200, "not json").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_discriminated_serialization() {
        let ok: ApiResponse<i32> = ApiResponse::Success { data: 7 };
        let json = serde_json::to_value(&ok).unwrap();
        assert_eq!(json, serde_json::json!({"status": "success", "data": 7}));
    }
}
