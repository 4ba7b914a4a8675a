//! Typed REST endpoints for the PIM backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every call flows through the interceptor pipeline in `net::http`, so
//! bearer injection and 401 handling are uniform. Admin endpoints check a
//! local precondition first and never reach the network without a
//! credential.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::http;
use crate::net::types::{
    Availability, LoginRequest, LoginResponse, RegisterRequest, UserListResponse, UserProfile,
};
use crate::state::session::SessionState;

const LOGIN: &str = "/api/auth/login";
const REGISTER: &str = "/api/auth/register";
const PROFILE: &str = "/api/user/profile";
const CHANGE_PASSWORD: &str = "/api/user/change-password";
const ADMIN_USERS: &str = "/api/admin/users";

fn check_username_endpoint(username: &str) -> String {
    format!("/api/users/check-username?username={username}")
}

fn check_email_endpoint(email: &str) -> String {
    format!("/api/users/check-email?email={email}")
}

fn admin_users_query(page: u32, size: u32, keyword: Option<&str>) -> String {
    match keyword {
        Some(keyword) if !keyword.is_empty() => {
            format!("{ADMIN_USERS}?page={page}&size={size}&keyword={keyword}")
        }
        _ => format!("{ADMIN_USERS}?page={page}&size={size}"),
    }
}

fn admin_user_endpoint(id: i64) -> String {
    format!("{ADMIN_USERS}/{id}")
}

fn admin_user_password_endpoint(id: i64) -> String {
    format!("{ADMIN_USERS}/{id}/password")
}

fn to_body<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Transport(e.to_string()))
}

/// Exchange credentials for a token and user record.
///
/// # Errors
///
/// Propagates any API failure unmodified.
pub async fn login(
    session: RwSignal<SessionState>,
    credentials: &LoginRequest,
) -> Result<LoginResponse, ApiError> {
    http::post_json(session, LOGIN, &to_body(credentials)?).await
}

/// Create a new account. The response body is unused beyond success/failure.
///
/// # Errors
///
/// Propagates any API failure unmodified.
pub async fn register(
    session: RwSignal<SessionState>,
    registration: &RegisterRequest,
) -> Result<(), ApiError> {
    http::post_unit(session, REGISTER, &to_body(registration)?).await
}

/// Fetch the profile of the current credential's user.
///
/// # Errors
///
/// Propagates any API failure unmodified; a stale credential surfaces as
/// [`ApiError::Unauthorized`].
pub async fn fetch_profile(session: RwSignal<SessionState>) -> Result<UserProfile, ApiError> {
    http::get_json(session, PROFILE).await
}

/// Persist profile changes and return the server's updated record.
///
/// # Errors
///
/// Propagates any API failure unmodified.
pub async fn update_profile(
    session: RwSignal<SessionState>,
    changes: &UserProfile,
) -> Result<UserProfile, ApiError> {
    http::put_json(session, PROFILE, &to_body(changes)?).await
}

/// Change the current user's password.
///
/// # Errors
///
/// Propagates any API failure unmodified.
pub async fn change_password(
    session: RwSignal<SessionState>,
    current: &str,
    new: &str,
) -> Result<(), ApiError> {
    let body = serde_json::json!({
        "currentPassword": current,
        "newPassword": new,
    });
    http::put_unit(session, CHANGE_PASSWORD, &body).await
}

/// Check whether `username` is still available for registration.
///
/// # Errors
///
/// Propagates any API failure unmodified.
pub async fn check_username(
    session: RwSignal<SessionState>,
    username: &str,
) -> Result<Availability, ApiError> {
    http::get_json(session, &check_username_endpoint(username)).await
}

/// Check whether `email` is still available for registration.
///
/// # Errors
///
/// Propagates any API failure unmodified.
pub async fn check_email(
    session: RwSignal<SessionState>,
    email: &str,
) -> Result<Availability, ApiError> {
    http::get_json(session, &check_email_endpoint(email)).await
}

/// List users for the admin view, one page at a time (1-based).
///
/// # Errors
///
/// Fails with [`ApiError::NotAuthenticated`] before any network call when no
/// credential is present; otherwise propagates API failures unmodified.
pub async fn list_users(
    session: RwSignal<SessionState>,
    page: u32,
    size: u32,
    keyword: Option<&str>,
) -> Result<UserListResponse, ApiError> {
    http::ensure_authenticated(session)?;
    http::get_json(session, &admin_users_query(page, size, keyword)).await
}

/// Fetch a single user by id.
///
/// # Errors
///
/// Same contract as [`list_users`].
pub async fn get_user(session: RwSignal<SessionState>, id: i64) -> Result<UserProfile, ApiError> {
    http::ensure_authenticated(session)?;
    http::get_json(session, &admin_user_endpoint(id)).await
}

/// Update a user record as an administrator.
///
/// # Errors
///
/// Same contract as [`list_users`].
pub async fn update_user(
    session: RwSignal<SessionState>,
    id: i64,
    changes: &UserProfile,
) -> Result<UserProfile, ApiError> {
    http::ensure_authenticated(session)?;
    http::put_json(session, &admin_user_endpoint(id), &to_body(changes)?).await
}

/// Delete a user as an administrator.
///
/// # Errors
///
/// Same contract as [`list_users`].
pub async fn delete_user(session: RwSignal<SessionState>, id: i64) -> Result<(), ApiError> {
    http::ensure_authenticated(session)?;
    http::delete(session, &admin_user_endpoint(id)).await
}

/// Reset a user's password as an administrator.
///
/// # Errors
///
/// Same contract as [`list_users`].
pub async fn update_user_password(
    session: RwSignal<SessionState>,
    id: i64,
    new_password: &str,
) -> Result<(), ApiError> {
    http::ensure_authenticated(session)?;
    let body = serde_json::json!({ "newPassword": new_password });
    http::put_unit(session, &admin_user_password_endpoint(id), &body).await
}
