//! Session store: the single source of truth for authentication state.
//!
//! DESIGN
//! ======
//! `SessionState` is a plain struct held in one `RwSignal` provided from
//! `App`. Fields are private so every externally visible transition goes
//! through a named mutation method, and each of those writes memory and
//! persisted storage together. Derived queries are computed from the raw
//! fields on every read, so they can never drift out of sync.
//!
//! Expiry is detected reactively: there is no TTL or timer here. The
//! interceptor in `net::http` calls [`SessionState::expire`] when the server
//! rejects a credential, which bumps a counter the router layer watches.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{LoginRequest, LoginResponse, RegisterRequest, ROLE_ADMIN, ROLE_USER, UserProfile};
use crate::util::persist;

/// localStorage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "pim_token";
/// localStorage key holding the serialized profile record.
pub const PROFILE_KEY: &str = "pim_profile";

/// Authentication state for the whole app: one credential, one profile.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    token: String,
    profile: Option<UserProfile>,
    expired_seq: u64,
}

impl SessionState {
    /// Rebuild the session from persisted storage. Called once at app start,
    /// so a page reload resumes the prior session.
    ///
    /// A profile record with no accompanying token violates the store
    /// invariant; hydration drops it instead of resurrecting it.
    #[must_use]
    pub fn hydrate() -> Self {
        let token = persist::load(TOKEN_KEY).unwrap_or_default();
        let profile = if token.is_empty() {
            persist::remove(PROFILE_KEY);
            None
        } else {
            persist::load_json(PROFILE_KEY)
        };
        Self { token, profile, expired_seq: 0 }
    }

    /// Store a bearer credential in memory and persisted storage. The token
    /// is opaque; no format validation is applied.
    pub fn set_credential(&mut self, token: &str) {
        self.token = token.to_owned();
        persist::store(TOKEN_KEY, token);
    }

    /// Store the user record in memory and persisted storage.
    pub fn set_profile(&mut self, profile: UserProfile) {
        persist::store_json(PROFILE_KEY, &profile);
        self.profile = Some(profile);
    }

    /// Commit a successful login. Credential and profile land in one
    /// mutation so no exit path can observe a token without its user record.
    pub fn commit_login(&mut self, token: &str, profile: UserProfile) {
        self.set_credential(token);
        self.set_profile(profile);
    }

    /// Log out: clear credential and profile from memory and persisted
    /// storage. Safe to call when already logged out.
    pub fn clear_session(&mut self) {
        self.token.clear();
        self.profile = None;
        persist::remove(TOKEN_KEY);
        persist::remove(PROFILE_KEY);
    }

    /// Logout triggered by the interceptor observing a rejected credential.
    /// Clears the session and raises the expiry signal the router layer
    /// subscribes to.
    pub fn expire(&mut self) {
        self.clear_session();
        self.expired_seq += 1;
    }

    /// The current bearer token; empty string means "no session".
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// True iff a credential is present.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        !self.token.is_empty()
    }

    /// The current privilege label, defaulting to [`ROLE_USER`] when the
    /// profile or its role field is absent.
    #[must_use]
    pub fn role(&self) -> &str {
        self.profile.as_ref().and_then(|p| p.role.as_deref()).unwrap_or(ROLE_USER)
    }

    /// True iff the current role is [`ROLE_ADMIN`].
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role() == ROLE_ADMIN
    }

    /// Login name of the current user, or `""` when logged out.
    #[must_use]
    pub fn username(&self) -> &str {
        self.profile.as_ref().map_or("", |p| p.username.as_str())
    }

    /// Display name of the current user, or `""` when absent.
    #[must_use]
    pub fn full_name(&self) -> &str {
        self.profile.as_ref().and_then(|p| p.full_name.as_deref()).unwrap_or("")
    }

    /// The full profile record, if one is loaded.
    #[must_use]
    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// Number of expiries the interceptor has detected so far.
    #[must_use]
    pub fn expired_seq(&self) -> u64 {
        self.expired_seq
    }
}

/// Send credentials to the auth endpoint; on success commit token and
/// profile together.
///
/// # Errors
///
/// Propagates any API failure unmodified. The store is untouched on every
/// failure path.
pub async fn login(
    session: RwSignal<SessionState>,
    credentials: LoginRequest,
) -> Result<LoginResponse, ApiError> {
    let response = api::login(session, &credentials).await?;
    session.update(|s| s.commit_login(&response.token, response.user.clone()));
    log::info!("session: logged in as {}", response.user.username);
    Ok(response)
}

/// Register a new account, then establish a session with the same
/// credentials. Registration failure short-circuits without attempting the
/// login; a login failure after successful registration propagates with no
/// retry.
///
/// # Errors
///
/// Propagates the registration or login failure unmodified.
pub async fn register(
    session: RwSignal<SessionState>,
    registration: RegisterRequest,
) -> Result<LoginResponse, ApiError> {
    api::register(session, &registration).await?;
    let credentials = LoginRequest {
        username: registration.username.clone(),
        password: registration.password.clone(),
    };
    login(session, credentials).await
}

/// Re-fetch the profile for the current credential. A no-op when logged
/// out; any failure is treated as a stale session and clears it. Errors
/// are absorbed here because this is a background consistency check, not
/// a user-initiated action.
pub async fn refresh_profile(session: RwSignal<SessionState>) {
    if !session.with_untracked(SessionState::is_logged_in) {
        return;
    }
    match api::fetch_profile(session).await {
        Ok(profile) => session.update(|s| s.set_profile(profile)),
        Err(err) => {
            log::warn!("session: profile refresh failed, clearing session: {err}");
            session.update(SessionState::clear_session);
        }
    }
}

/// Discard the current session.
pub fn logout(session: RwSignal<SessionState>) {
    session.update(SessionState::clear_session);
}

/// Persist profile changes remotely, then commit the server's record.
///
/// # Errors
///
/// Propagates any API failure unmodified; the store is untouched on failure.
pub async fn update_profile(
    session: RwSignal<SessionState>,
    changes: &UserProfile,
) -> Result<UserProfile, ApiError> {
    let updated = api::update_profile(session, changes).await?;
    session.update(|s| s.set_profile(updated.clone()));
    Ok(updated)
}

/// Change the current user's password. No store mutation; the credential
/// stays valid until the server says otherwise.
///
/// # Errors
///
/// Propagates any API failure unmodified.
pub async fn change_password(
    session: RwSignal<SessionState>,
    current: &str,
    new: &str,
) -> Result<(), ApiError> {
    api::change_password(session, current, new).await
}
