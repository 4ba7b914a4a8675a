//! Shared guard installation for route components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical pre-render access decisions; this helper
//! wires the pure guard outcome from `routes::evaluate` to navigation and
//! the notice banner. Re-evaluates whenever the session changes, so a
//! mid-visit logout also redirects.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes::{self, GuardOutcome};
use crate::state::session::SessionState;
use crate::state::ui::UiState;

/// Evaluate the guard for `path` against the live session, navigating away
/// when access is denied.
pub fn install_route_guard<F>(
    path: &'static str,
    session: RwSignal<SessionState>,
    ui: RwSignal<UiState>,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let outcome = session.with(|s| routes::evaluate(routes::route_meta(path), s));
        match outcome {
            GuardOutcome::Proceed => {}
            GuardOutcome::RedirectLogin => {
                navigate(routes::LOGIN_PATH, NavigateOptions::default());
            }
            GuardOutcome::RedirectHome { notice } => {
                ui.update(|u| u.set_notice(notice));
                navigate(routes::HOME_PATH, NavigateOptions::default());
            }
        }
    });
}
