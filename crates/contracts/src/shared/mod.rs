pub mod api_error;
pub mod api_response;
pub mod text;

pub use api_error::ApiError;
pub use api_response::{decode_envelope, ApiEnvelope, ApiResponse};
