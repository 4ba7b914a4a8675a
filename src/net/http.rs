//! HTTP plumbing shared by every API call.
//!
//! DESIGN
//! ======
//! One wrapper implements both interceptor stages so call sites never handle
//! auth plumbing themselves. The outbound stage attaches the bearer
//! credential read from the session store; the inbound stage watches every
//! response and reacts to HTTP 401 by logging the session out and raising
//! the expiry signal before re-raising the failure to the original caller.
//! Every other response, including non-401 failures and network errors,
//! passes through untouched, and nothing is retried.
//!
//! A 401 on one call never cancels another: each call's inbound stage
//! inspects only its own response, so a second in-flight request still
//! delivers its result after the first has triggered a logout.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use leptos::prelude::*;
use serde::de::DeserializeOwned;

use crate::net::error::ApiError;
use crate::state::session::SessionState;

/// HTTP method for an outbound call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// What the inbound stage does with a response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
    /// Deliver the response to the caller unmodified.
    PassThrough,
    /// Clear the session, raise the expiry signal, then re-raise.
    ExpireSession,
}

/// Classify a response status for the inbound stage. Only HTTP 401 expires
/// the session; every other status, success or failure, passes through.
/// Purely a function of the status code, never of store state or of other
/// in-flight calls.
#[must_use]
pub fn inbound_disposition(status: u16) -> Disposition {
    if status == 401 { Disposition::ExpireSession } else { Disposition::PassThrough }
}

/// Format the outbound authorization header for `token`, or `None` when no
/// session is present.
#[must_use]
pub fn authorization_header(token: &str) -> Option<String> {
    if token.is_empty() { None } else { Some(format!("Bearer {token}")) }
}

/// Run the inbound stage's reaction for one response `status` against the
/// session. Returns the error to re-raise when the credential was rejected,
/// `None` when the response should be delivered as-is.
///
/// Responses are reacted to individually: a logout triggered here never
/// cancels or reclassifies another in-flight call's response.
pub fn apply_inbound(session: RwSignal<SessionState>, status: u16) -> Option<ApiError> {
    match inbound_disposition(status) {
        Disposition::ExpireSession => {
            session.update(SessionState::expire);
            Some(ApiError::Unauthorized)
        }
        Disposition::PassThrough => None,
    }
}

/// Local precondition for calls that must not go out unauthenticated: fail
/// before any network activity when no credential is present.
///
/// # Errors
///
/// Returns [`ApiError::NotAuthenticated`] when the store holds no credential.
pub fn ensure_authenticated(session: RwSignal<SessionState>) -> Result<(), ApiError> {
    if session.with_untracked(SessionState::is_logged_in) {
        Ok(())
    } else {
        Err(ApiError::NotAuthenticated)
    }
}

#[cfg(feature = "hydrate")]
async fn send(
    session: RwSignal<SessionState>,
    method: Method,
    url: &str,
    body: Option<&serde_json::Value>,
) -> Result<gloo_net::http::Response, ApiError> {
    use gloo_net::http::Request;

    let builder = match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    };

    // Outbound stage: attach the current credential, if any.
    let token = session.with_untracked(|s| s.token().to_owned());
    let builder = match authorization_header(&token) {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    };

    // Construction failures propagate unmodified; no new failure mode here.
    let request = match body {
        Some(json) => builder.json(json).map_err(|e| ApiError::Transport(e.to_string()))?,
        None => builder.build().map_err(|e| ApiError::Transport(e.to_string()))?,
    };
    let response = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;

    // Inbound stage: observe every response before the caller's continuation.
    if let Some(err) = apply_inbound(session, response.status()) {
        log::warn!("http: credential rejected by {url}, clearing session");
        return Err(err);
    }
    Ok(response)
}

#[cfg(feature = "hydrate")]
async fn decode<T: DeserializeOwned>(response: gloo_net::http::Response) -> Result<T, ApiError> {
    if !response.ok() {
        let message = response.text().await.unwrap_or_default();
        return Err(ApiError::Status { code: response.status(), message });
    }
    response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn expect_ok(response: gloo_net::http::Response) -> Result<(), ApiError> {
    if response.ok() {
        return Ok(());
    }
    let message = response.text().await.unwrap_or_default();
    Err(ApiError::Status { code: response.status(), message })
}

/// GET `url` and decode a JSON body.
///
/// # Errors
///
/// See [`ApiError`]; 401 handling happens here before the error is returned.
pub async fn get_json<T: DeserializeOwned>(
    session: RwSignal<SessionState>,
    url: &str,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = send(session, Method::Get, url, None).await?;
        decode(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, url);
        Err(ApiError::Unavailable)
    }
}

/// POST `body` to `url` and decode a JSON response.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn post_json<T: DeserializeOwned>(
    session: RwSignal<SessionState>,
    url: &str,
    body: &serde_json::Value,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = send(session, Method::Post, url, Some(body)).await?;
        decode(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, url, body);
        Err(ApiError::Unavailable)
    }
}

/// POST `body` to `url`, expecting only a success status back.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn post_unit(
    session: RwSignal<SessionState>,
    url: &str,
    body: &serde_json::Value,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = send(session, Method::Post, url, Some(body)).await?;
        expect_ok(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, url, body);
        Err(ApiError::Unavailable)
    }
}

/// PUT `body` to `url` and decode a JSON response.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn put_json<T: DeserializeOwned>(
    session: RwSignal<SessionState>,
    url: &str,
    body: &serde_json::Value,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = send(session, Method::Put, url, Some(body)).await?;
        decode(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, url, body);
        Err(ApiError::Unavailable)
    }
}

/// PUT `body` to `url`, expecting only a success status back.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn put_unit(
    session: RwSignal<SessionState>,
    url: &str,
    body: &serde_json::Value,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = send(session, Method::Put, url, Some(body)).await?;
        expect_ok(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, url, body);
        Err(ApiError::Unavailable)
    }
}

/// DELETE `url`, expecting only a success status back.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn delete(session: RwSignal<SessionState>, url: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = send(session, Method::Delete, url, None).await?;
        expect_ok(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, url);
        Err(ApiError::Unavailable)
    }
}
