//! Route declarations and the pre-navigation guard.
//!
//! DESIGN
//! ======
//! Each route declares exactly two access flags; the guard is a pure
//! function of those flags and the current session snapshot. It performs no
//! I/O, so it is safe to evaluate synchronously on every transition,
//! including back/forward navigation and reloads. The session store is
//! hydrated from persisted storage before the first evaluation runs.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::session::SessionState;

/// Path of the login view, the redirect target for denied access.
pub const LOGIN_PATH: &str = "/login";
/// Path of the registration view.
pub const REGISTER_PATH: &str = "/register";
/// Path of the authenticated landing view.
pub const HOME_PATH: &str = "/";
/// Path of the admin user-management view.
pub const ADMIN_PATH: &str = "/admin";

/// Access requirements a route declares. The guard reads nothing else from
/// the route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub requires_admin: bool,
}

/// Look up the declared metadata for `path`. `None` means the route is
/// undeclared; access is denied toward the login view.
#[must_use]
pub fn route_meta(path: &str) -> Option<RouteMeta> {
    match path {
        LOGIN_PATH | REGISTER_PATH => {
            Some(RouteMeta { requires_auth: false, requires_admin: false })
        }
        HOME_PATH => Some(RouteMeta { requires_auth: true, requires_admin: false }),
        ADMIN_PATH => Some(RouteMeta { requires_auth: true, requires_admin: true }),
        _ => None,
    }
}

/// Warning surfaced when an authenticated non-admin hits an admin route.
pub const INSUFFICIENT_PRIVILEGE: &str = "Insufficient privileges for that page.";

/// Decision produced by the guard for one route transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the target view.
    Proceed,
    /// Send the visitor to the login view.
    RedirectLogin,
    /// Send the visitor home and surface a warning.
    RedirectHome { notice: String },
}

/// Evaluate the guard for a route declaring `meta` against the current
/// session snapshot. Pure; consults only already-materialized state.
#[must_use]
pub fn evaluate(meta: Option<RouteMeta>, session: &SessionState) -> GuardOutcome {
    let Some(meta) = meta else {
        return GuardOutcome::RedirectLogin;
    };
    if !meta.requires_auth {
        return GuardOutcome::Proceed;
    }
    if !session.is_logged_in() {
        return GuardOutcome::RedirectLogin;
    }
    if meta.requires_admin && !session.is_admin() {
        return GuardOutcome::RedirectHome { notice: INSUFFICIENT_PRIVILEGE.to_owned() };
    }
    GuardOutcome::Proceed
}
