//! Wire DTOs for the client/server auth boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads (camelCase keys) so serde
//! round-trips stay lossless. Everything beyond `username` is optional: the
//! login response carries a slimmer record than the profile endpoint and both
//! must deserialize into the same type.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Role label for an unprivileged account. Also the default when a profile
/// omits its role field.
pub const ROLE_USER: &str = "ROLE_USER";
/// Role label for an administrator account.
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";

/// A user record as returned by the auth, profile, and admin endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Server-side identifier; absent on slim payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Login name; the only field every payload carries.
    pub username: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Privilege label (`ROLE_USER`, `ROLE_ADMIN`); absent means unprivileged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Whether the account is active; only admin payloads carry it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Credentials sent to `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login payload: the bearer token plus the user it identifies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

/// Registration payload for `POST /api/auth/register`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Body of the username/email availability checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub available: bool,
}

/// One page of the admin user listing (`GET /api/admin/users`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListResponse {
    #[serde(default)]
    pub users: Vec<UserProfile>,
    /// Total matching users across all pages.
    #[serde(default)]
    pub total: i64,
    /// 1-based page index echoed back by the server.
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub page_size: u32,
}
