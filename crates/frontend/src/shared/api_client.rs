//! Thin JSON client over `gloo-net` that unwraps the response envelope.
//!
//! Every function logs failures once and returns a typed [`ApiError`];
//! callers only decide how to show it.

use crate::shared::api_utils::api_url;
use contracts::shared::{decode_envelope, ApiError, ApiResponse};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

fn transport(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

/// The body never left the browser, so this is not a transport error.
fn encode(e: gloo_net::Error) -> ApiError {
    ApiError::Encode(e.to_string())
}

async fn read_envelope<T: DeserializeOwned>(
    method: &str,
    url: &str,
    response: Result<Response, gloo_net::Error>,
) -> Result<ApiResponse<Option<T>>, ApiError> {
    let result: Result<ApiResponse<Option<T>>, ApiError> = async move {
        let response = response.map_err(transport)?;
        let status = response.status();
        let body = response.text().await.map_err(transport)?;
        decode_envelope::<T>(status, &body)
    }
    .await;
    match &result {
        Ok(ApiResponse::Error { message }) => log::warn!("{} {} rejected: {}", method, url, message),
        Err(e) => log::error!("{} {} failed: {}", method, url, e),
        Ok(_) => log::debug!("{} {} ok", method, url),
    }
    result
}

/// GET a resource whose `data` is required.
pub async fn get_data<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = api_url(path);
    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await;
    read_envelope::<T>("GET", &url, response).await?.require_data()
}

/// POST a JSON body; the response payload is ignored.
pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let url = api_url(path);
    let response = match Request::post(&url).json(body) {
        Ok(request) => request.send().await,
        Err(e) => return Err(encode(e)),
    };
    read_envelope::<serde_json::Value>("POST", &url, response)
        .await?
        .into_result()
        .map(|_| ())
}

/// PUT a JSON body; the response payload is ignored.
pub async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let url = api_url(path);
    let response = match Request::put(&url).json(body) {
        Ok(request) => request.send().await,
        Err(e) => return Err(encode(e)),
    };
    read_envelope::<serde_json::Value>("PUT", &url, response)
        .await?
        .into_result()
        .map(|_| ())
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let url = api_url(path);
    let response = Request::delete(&url)
        .header("Accept", "application/json")
        .send()
        .await;
    read_envelope::<serde_json::Value>("DELETE", &url, response)
        .await?
        .into_result()
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_serialization_failure_is_encode_error() {
        let err = encode(gloo_net::Error::GlooError("key must be a string".into()));
        assert!(matches!(err, ApiError::Encode(_)));
        assert!(err.to_string().starts_with("Failed to encode request"));
    }
}
