use thiserror::Error;

/// Errors surfaced by calls to the REST backend.
///
/// None of them is fatal: screens log the error and show its `Display` text
/// in a dismissable banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (fetch rejected, CORS, offline).
    #[error("Network error: {0}")]
    Transport(String),

    /// Non-2xx status with a body that is not a response envelope.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The backend answered `success: false`.
    #[error("{0}")]
    Api(String),

    /// The body could not be decoded into the expected type.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("Failed to encode request: {0}")]
    Encode(String),

    /// `success: true` without a `data` field where one was required.
    #[error("Response contained no data")]
    MissingData,

    /// Rejected locally before any request was sent.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Http { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_and_decode_messages_differ() {
        let encode = ApiError::Encode("key must be a string".into());
        assert_eq!(encode.to_string(), "Failed to encode request: key must be a string");
        assert_ne!(encode, ApiError::Decode("key must be a string".into()));
        assert!(!encode.is_not_found());
    }
}
