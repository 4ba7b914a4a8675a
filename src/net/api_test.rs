use super::*;
use futures::executor::block_on;

// =============================================================
// Endpoint formatting
// =============================================================

#[test]
fn check_username_endpoint_formats_query() {
    assert_eq!(check_username_endpoint("al"), "/api/users/check-username?username=al");
}

#[test]
fn check_email_endpoint_formats_query() {
    assert_eq!(
        check_email_endpoint("al@example.com"),
        "/api/users/check-email?email=al@example.com"
    );
}

#[test]
fn admin_users_query_without_keyword() {
    assert_eq!(admin_users_query(1, 10, None), "/api/admin/users?page=1&size=10");
}

#[test]
fn admin_users_query_ignores_empty_keyword() {
    assert_eq!(admin_users_query(2, 25, Some("")), "/api/admin/users?page=2&size=25");
}

#[test]
fn admin_users_query_with_keyword() {
    assert_eq!(admin_users_query(1, 10, Some("al")), "/api/admin/users?page=1&size=10&keyword=al");
}

#[test]
fn admin_user_endpoint_formats_id() {
    assert_eq!(admin_user_endpoint(42), "/api/admin/users/42");
}

#[test]
fn admin_user_password_endpoint_formats_id() {
    assert_eq!(admin_user_password_endpoint(42), "/api/admin/users/42/password");
}

// =============================================================
// Admin precondition: no credential, no network
// =============================================================

#[test]
fn admin_calls_require_a_credential_before_any_network() {
    let session = RwSignal::new(SessionState::default());

    assert_eq!(
        block_on(list_users(session, 1, 10, None)).unwrap_err(),
        ApiError::NotAuthenticated
    );
    assert_eq!(block_on(get_user(session, 1)).unwrap_err(), ApiError::NotAuthenticated);
    assert_eq!(block_on(delete_user(session, 1)).unwrap_err(), ApiError::NotAuthenticated);
    assert_eq!(
        block_on(update_user_password(session, 1, "pw")).unwrap_err(),
        ApiError::NotAuthenticated
    );
    let changes = UserProfile { username: "al".to_owned(), ..UserProfile::default() };
    assert_eq!(
        block_on(update_user(session, 1, &changes)).unwrap_err(),
        ApiError::NotAuthenticated
    );
}
