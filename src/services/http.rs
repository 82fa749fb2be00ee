// ============================================================================
// HTTP GATEWAY - every backend call goes through here
// ============================================================================
// Stateless helpers around gloo-net. Centralizing the send path keeps three
// things uniform across the app: the Authorization header, the request
// timeout, and the error taxonomy the session guard depends on.
// ============================================================================

use std::future::Future;

use futures::future::{select, Either};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::FormData;

use crate::config::CONFIG;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The backend rejected the token (HTTP 401). Callers hand this to the
    /// session guard instead of rendering it.
    Unauthorized,
    /// Any other non-2xx reply, with the body text when one was sent.
    Api { status: u16, message: String },
    Network(String),
    Parse(String),
    Timeout,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "Session expired or invalid"),
            ApiError::Api { status, message } => write!(f, "HTTP {}: {}", status, message),
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ApiError::Timeout => write!(f, "The request timed out, please try again"),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

/// Map a non-2xx status to the error taxonomy. 401 always becomes
/// `Unauthorized`, everything else keeps the status and the body detail.
pub fn classify_status(status: u16, detail: &str) -> ApiError {
    if status == 401 {
        return ApiError::Unauthorized;
    }
    let message = if detail.trim().is_empty() {
        format!("status {}", status)
    } else {
        detail.trim().to_string()
    };
    ApiError::Api { status, message }
}

fn endpoint(path: &str) -> String {
    format!("{}{}", CONFIG.backend_url(), path)
}

fn authorized(builder: RequestBuilder, token: &str) -> RequestBuilder {
    builder.header("Authorization", &format!("Bearer {}", token))
}

/// Race the send against the configured timeout so a stalled backend cannot
/// wedge a spinner forever.
async fn send_with_timeout<F>(send: F) -> Result<Response, ApiError>
where
    F: Future<Output = Result<Response, gloo_net::Error>>,
{
    let timeout = TimeoutFuture::new(CONFIG.network_timeout_ms());
    match select(Box::pin(send), Box::pin(timeout)).await {
        Either::Left((result, _)) => {
            result.map_err(|e| ApiError::Network(e.to_string()))
        }
        Either::Right(_) => Err(ApiError::Timeout),
    }
}

/// Turn a reply into the ok response or a classified error. 401 skips the
/// body read, the guard does not care about the detail.
async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    if status == 401 {
        return Err(ApiError::Unauthorized);
    }
    let detail = match response.text().await {
        Ok(body) if !body.trim().is_empty() => body,
        _ => response.status_text(),
    };
    Err(classify_status(status, &detail))
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str, token: &str) -> Result<T, ApiError> {
    let builder = authorized(Request::get(&endpoint(path)), token);
    let response = send_with_timeout(builder.send()).await?;
    parse_json(ensure_ok(response).await?).await
}

pub async fn put_json<B, T>(path: &str, token: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let request = authorized(Request::put(&endpoint(path)), token)
        .json(body)
        .map_err(|e| ApiError::Parse(format!("serialization failed: {}", e)))?;
    let response = send_with_timeout(request.send()).await?;
    parse_json(ensure_ok(response).await?).await
}

pub async fn post_json<B, T>(path: &str, token: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let request = authorized(Request::post(&endpoint(path)), token)
        .json(body)
        .map_err(|e| ApiError::Parse(format!("serialization failed: {}", e)))?;
    let response = send_with_timeout(request.send()).await?;
    parse_json(ensure_ok(response).await?).await
}

/// POST with an empty JSON object. Used by fire-and-acknowledge endpoints
/// such as the tagline regeneration trigger.
pub async fn post_empty<T: DeserializeOwned>(path: &str, token: &str) -> Result<T, ApiError> {
    post_json(path, token, &serde_json::json!({})).await
}

/// POST without a token. Sign-in is the only caller.
pub async fn post_json_public<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let request = Request::post(&endpoint(path))
        .json(body)
        .map_err(|e| ApiError::Parse(format!("serialization failed: {}", e)))?;
    let response = send_with_timeout(request.send()).await?;
    parse_json(ensure_ok(response).await?).await
}

/// Multipart upload. The browser fills in the boundary header itself, so no
/// Content-Type is set here.
pub async fn post_multipart<T: DeserializeOwned>(
    path: &str,
    token: &str,
    form: FormData,
) -> Result<T, ApiError> {
    let request = authorized(Request::post(&endpoint(path)), token)
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = send_with_timeout(request.send()).await?;
    parse_json(ensure_ok(response).await?).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_401_always_maps_to_unauthorized() {
        assert_eq!(classify_status(401, ""), ApiError::Unauthorized);
        assert_eq!(
            classify_status(401, "token expired"),
            ApiError::Unauthorized
        );
        assert!(classify_status(401, "whatever").is_unauthorized());
    }

    #[test]
    fn other_statuses_keep_their_detail() {
        assert_eq!(
            classify_status(500, "boom"),
            ApiError::Api {
                status: 500,
                message: "boom".to_string()
            }
        );
        assert_eq!(
            classify_status(422, "  "),
            ApiError::Api {
                status: 422,
                message: "status 422".to_string()
            }
        );
        assert!(!classify_status(403, "forbidden").is_unauthorized());
    }

    #[test]
    fn display_strings_are_presentable() {
        assert_eq!(
            ApiError::Network("connection refused".to_string()).to_string(),
            "Network error: connection refused"
        );
        assert_eq!(
            ApiError::Api {
                status: 500,
                message: "boom".to_string()
            }
            .to_string(),
            "HTTP 500: boom"
        );
        assert_eq!(
            ApiError::Timeout.to_string(),
            "The request timed out, please try again"
        );
    }
}
