//! Client-side error taxonomy for API calls.
//!
//! ERROR HANDLING
//! ==============
//! Failures always reach the immediate caller. The only automatic recovery
//! lives in `net::http`: a 401 clears the session before `Unauthorized` is
//! re-raised, and `state::session::refresh_profile` absorbs its own failures
//! after clearing the session. Nothing is retried.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Errors surfaced by the HTTP layer and the typed endpoint wrappers.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server rejected the credential (HTTP 401). By the time the caller
    /// sees this, the interceptor has already cleared the session and raised
    /// the expiry signal.
    #[error("unauthorized")]
    Unauthorized,
    /// A credential-requiring call was attempted with no session present.
    /// Raised locally, before any network activity.
    #[error("not authenticated")]
    NotAuthenticated,
    /// Any non-2xx status other than 401, passed through untouched.
    #[error("request failed with status {code}: {message}")]
    Status { code: u16, message: String },
    /// Network failure or request-construction failure.
    #[error("transport error: {0}")]
    Transport(String),
    /// The response body did not match the expected schema.
    #[error("decode error: {0}")]
    Decode(String),
    /// HTTP calls only exist in the browser build.
    #[error("not available on server")]
    Unavailable,
}
