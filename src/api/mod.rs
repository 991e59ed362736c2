use std::time::Duration;

use reqwest::{
    Client,
    Response,
    StatusCode,
};
use serde::{
    de::DeserializeOwned,
    Deserialize,
};

use crate::core::ApiError;

mod courses;
mod students;

pub use courses::CourseApi;
pub use students::StudentApi;

/// Shared client for both services. One client, one timeout; no retries.
pub fn build_client() -> Result<Client, ApiError> {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| ApiError::Invalid(format!("HTTP client build failed: {e}")))
}

/// Error body shape used by the services. FastAPI puts its message under
/// `detail`; some responses use `message` instead.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

fn classify_transport(error: reqwest::Error) -> ApiError {
    if error.is_builder() {
        // The request never left the client
        ApiError::Invalid(error.to_string())
    } else {
        // Sent (or attempted) but no response came back
        ApiError::Unreachable
    }
}

async fn rejection(status: StatusCode, response: Response) -> ApiError {
    let detail = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.detail.or(body.message))
        .filter(|detail| !detail.trim().is_empty());
    ApiError::Rejected { status: status.as_u16(), detail }
}

/// Resolve a sent request into a decoded body or a single classified error.
pub(crate) async fn decode<T: DeserializeOwned>(
    sent: Result<Response, reqwest::Error>,
) -> Result<T, ApiError> {
    let response = sent.map_err(classify_transport)?;
    let status = response.status();
    if !status.is_success() {
        return Err(rejection(status, response).await);
    }
    response.json::<T>().await.map_err(|e| ApiError::Invalid(e.to_string()))
}

/// Like `decode` but for calls whose response body we do not care about
/// (delete returns only a status blob).
pub(crate) async fn ensure_success(
    sent: Result<Response, reqwest::Error>,
) -> Result<(), ApiError> {
    let response = sent.map_err(classify_transport)?;
    let status = response.status();
    if !status.is_success() {
        return Err(rejection(status, response).await);
    }
    Ok(())
}

pub(crate) fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        assert_eq!(normalize_base_url("http://localhost:8000/"), "http://localhost:8000");
        assert_eq!(normalize_base_url(" http://localhost:8000 "), "http://localhost:8000");
        assert_eq!(normalize_base_url("http://localhost:8000"), "http://localhost:8000");
    }

    #[test]
    fn error_body_accepts_detail_or_message() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail": "Course full"}"#).unwrap();
        assert_eq!(body.detail.as_deref(), Some("Course full"));

        let body: ErrorBody = serde_json::from_str(r#"{"message": "nope"}"#).unwrap();
        assert_eq!(body.detail.or(body.message).as_deref(), Some("nope"));

        let body: ErrorBody = serde_json::from_str(r#"{}"#).unwrap();
        assert!(body.detail.or(body.message).is_none());
    }
}
