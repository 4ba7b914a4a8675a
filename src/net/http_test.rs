use super::*;
use crate::net::types::{ROLE_USER, UserProfile};

// =============================================================
// Outbound stage
// =============================================================

#[test]
fn authorization_header_absent_without_token() {
    assert_eq!(authorization_header(""), None);
}

#[test]
fn authorization_header_uses_bearer_scheme() {
    assert_eq!(authorization_header("t1").as_deref(), Some("Bearer t1"));
}

// =============================================================
// Inbound stage
// =============================================================

#[test]
fn unauthorized_status_expires_session() {
    assert_eq!(inbound_disposition(401), Disposition::ExpireSession);
}

#[test]
fn success_statuses_pass_through() {
    assert_eq!(inbound_disposition(200), Disposition::PassThrough);
    assert_eq!(inbound_disposition(201), Disposition::PassThrough);
    assert_eq!(inbound_disposition(204), Disposition::PassThrough);
}

#[test]
fn non_401_failures_pass_through_untouched() {
    for status in [400, 403, 404, 409, 500, 502, 503] {
        assert_eq!(inbound_disposition(status), Disposition::PassThrough, "status {status}");
    }
}

// =============================================================
// Inbound reaction against the store
// =============================================================

fn logged_in_session() -> RwSignal<SessionState> {
    let session = RwSignal::new(SessionState::default());
    session.update(|s| {
        s.commit_login(
            "t1",
            UserProfile {
                username: "al".to_owned(),
                role: Some(ROLE_USER.to_owned()),
                ..UserProfile::default()
            },
        );
    });
    session
}

#[test]
fn rejected_credential_logs_out_and_reraises() {
    let session = logged_in_session();

    let err = apply_inbound(session, 401);

    assert_eq!(err, Some(ApiError::Unauthorized));
    assert!(!session.with_untracked(SessionState::is_logged_in));
    assert_eq!(session.with_untracked(SessionState::expired_seq), 1);
}

#[test]
fn pass_through_statuses_leave_session_alone() {
    let session = logged_in_session();

    for status in [200, 204, 400, 403, 500] {
        assert_eq!(apply_inbound(session, status), None, "status {status}");
    }
    assert!(session.with_untracked(SessionState::is_logged_in));
    assert_eq!(session.with_untracked(SessionState::expired_seq), 0);
}

#[test]
fn logout_from_one_call_does_not_reclassify_another() {
    // Two racing calls: the first comes back 401 and logs the session out;
    // the second's 200 must still be delivered to its caller.
    let session = logged_in_session();

    assert_eq!(apply_inbound(session, 401), Some(ApiError::Unauthorized));
    assert!(!session.with_untracked(SessionState::is_logged_in));

    assert_eq!(apply_inbound(session, 200), None);
}

#[test]
fn second_rejection_while_logged_out_stays_idempotent() {
    let session = logged_in_session();

    assert_eq!(apply_inbound(session, 401), Some(ApiError::Unauthorized));
    assert_eq!(apply_inbound(session, 401), Some(ApiError::Unauthorized));

    assert!(!session.with_untracked(SessionState::is_logged_in));
    assert_eq!(session.with_untracked(SessionState::expired_seq), 2);
}

// =============================================================
// Local precondition
// =============================================================

#[test]
fn ensure_authenticated_rejects_empty_session() {
    let session = RwSignal::new(SessionState::default());
    assert_eq!(ensure_authenticated(session), Err(ApiError::NotAuthenticated));
}

#[test]
fn ensure_authenticated_accepts_logged_in_session() {
    let session = RwSignal::new(SessionState::default());
    session.update(|s| {
        s.commit_login(
            "t1",
            UserProfile {
                username: "al".to_owned(),
                role: Some(ROLE_USER.to_owned()),
                ..UserProfile::default()
            },
        );
    });
    assert_eq!(ensure_authenticated(session), Ok(()));
}
