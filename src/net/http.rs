//! Shared HTTP request pipeline for every backend call.
//!
//! SYSTEM CONTEXT
//! ==============
//! All screens talk to the backend through the helpers here, never through
//! `gloo-net` directly. The pipeline owns the three global policies: the
//! fixed base URL + JSON default header, just-in-time `Authorization`
//! injection from durable storage, and the 401 clear-and-redirect rule.
//! The credential is read from storage at send time rather than from the
//! in-memory session so the pipeline stays correct even if the two briefly
//! disagree across a tab reload.
//!
//! ERROR HANDLING
//! ==============
//! Every failure resolves to one `ApiError` for the calling screen; nothing
//! here panics or retries. A 401 additionally clears both storage keys and
//! navigates to the login route before the error is surfaced. Concurrent
//! in-flight requests may each take the 401 path; storage deletion and
//! navigation are both idempotent so the order does not matter.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::state::session::{TOKEN_KEY, USER_KEY};
use crate::util::storage::StorageHandle;

/// Fixed origin prefix for every backend call.
pub const API_BASE: &str = "https://womecare-backend.onrender.com/api";

/// Uniform request timeout; expiry surfaces like a network failure.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Route navigated to when the backend rejects the stored credential.
pub const LOGIN_ROUTE: &str = "/login";

/// Failure of a pipeline request, surfaced to the calling screen.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Backend rejected the call; message comes from the `{"error": ...}`
    /// payload, or from the caller's fallback when the payload lacks one.
    #[error("{message}")]
    Http { status: u16, message: String },
    /// Stored credential rejected. The global clear-and-redirect already ran
    /// by the time a caller sees this.
    #[error("session expired")]
    Unauthorized,
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Absolute URL for an API path like `/login`.
pub(crate) fn endpoint_url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// `Authorization` header value for the stored credential, if one exists.
/// Absence means the request simply goes out unauthenticated; rejecting it
/// is the backend's job.
pub(crate) fn authorization_value(storage: &StorageHandle) -> Option<String> {
    storage.read(TOKEN_KEY).map(|token| format!("Bearer {token}"))
}

/// Single human-readable message for a failed response body.
pub(crate) fn error_from_body(body: &str, fallback: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("error")?.as_str().map(ToOwned::to_owned))
        .unwrap_or_else(|| fallback.to_owned())
}

/// Clear the persisted session and send the user back to the login route.
/// Runs for any 401, no matter which screen issued the request. Idempotent:
/// concurrent 401s may all land here.
pub(crate) fn expire_session(storage: &StorageHandle, navigate: impl Fn(&str)) {
    storage.delete(USER_KEY);
    storage.delete(TOKEN_KEY);
    navigate(LOGIN_ROUTE);
}

#[cfg(feature = "csr")]
fn redirect_to_login(route: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(route);
    }
}

/// Race a request against the uniform timeout.
#[cfg(feature = "csr")]
async fn send_with_timeout(
    request: gloo_net::http::Request,
) -> Result<gloo_net::http::Response, ApiError> {
    use futures::FutureExt;

    let mut send = Box::pin(request.send().fuse());
    let mut timeout = Box::pin(gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS).fuse());
    futures::select! {
        result = send => result.map_err(|e| ApiError::Network(e.to_string())),
        () = timeout => Err(ApiError::Timeout),
    }
}

/// Attach the default header set: JSON content type plus the stored
/// credential when present.
#[cfg(feature = "csr")]
fn with_default_headers(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    let mut builder = builder.header("Content-Type", "application/json");
    if let Some(value) = authorization_value(&StorageHandle::browser()) {
        builder = builder.header("Authorization", &value);
    }
    builder
}

/// Send and apply the global response policy: 401 expires the session,
/// other failures become an `ApiError::Http` with an extracted message.
#[cfg(feature = "csr")]
async fn send(
    request: gloo_net::http::Request,
    fallback: &str,
) -> Result<gloo_net::http::Response, ApiError> {
    let response = send_with_timeout(request).await?;
    if response.status() == 401 {
        log::warn!("credential rejected, clearing session");
        expire_session(&StorageHandle::browser(), redirect_to_login);
        return Err(ApiError::Unauthorized);
    }
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Http {
            status,
            message: error_from_body(&body, fallback),
        });
    }
    Ok(response)
}

#[cfg(feature = "csr")]
async fn decode<T: DeserializeOwned>(response: gloo_net::http::Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// GET `path` and decode the JSON response.
pub async fn get_json<T: DeserializeOwned>(path: &str, fallback: &str) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = with_default_headers(gloo_net::http::Request::get(&endpoint_url(path)))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(send(request, fallback).await?).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (path, fallback);
        Err(ApiError::Network("browser environment required".to_owned()))
    }
}

/// POST a JSON `body` to `path` and decode the JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    fallback: &str,
) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = with_default_headers(gloo_net::http::Request::post(&endpoint_url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(send(request, fallback).await?).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (path, body, fallback);
        Err(ApiError::Network("browser environment required".to_owned()))
    }
}

/// POST a JSON `body` to `path`, discarding the response body.
pub async fn post_unit<B: Serialize>(path: &str, body: &B, fallback: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = with_default_headers(gloo_net::http::Request::post(&endpoint_url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        send(request, fallback).await.map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (path, body, fallback);
        Err(ApiError::Network("browser environment required".to_owned()))
    }
}

/// PUT a JSON `body` to `path`, discarding the response body.
pub async fn put_unit<B: Serialize>(path: &str, body: &B, fallback: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = with_default_headers(gloo_net::http::Request::put(&endpoint_url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        send(request, fallback).await.map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (path, body, fallback);
        Err(ApiError::Network("browser environment required".to_owned()))
    }
}

/// DELETE `path`, discarding the response body.
pub async fn delete_unit(path: &str, fallback: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = with_default_headers(gloo_net::http::Request::delete(&endpoint_url(path)))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        send(request, fallback).await.map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (path, fallback);
        Err(ApiError::Network("browser environment required".to_owned()))
    }
}
