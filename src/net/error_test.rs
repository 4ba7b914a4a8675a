use super::*;

#[test]
fn unauthorized_display() {
    assert_eq!(ApiError::Unauthorized.to_string(), "unauthorized");
}

#[test]
fn not_authenticated_display() {
    assert_eq!(ApiError::NotAuthenticated.to_string(), "not authenticated");
}

#[test]
fn status_display_includes_code_and_body() {
    let err = ApiError::Status { code: 500, message: "boom".to_owned() };
    assert_eq!(err.to_string(), "request failed with status 500: boom");
}

#[test]
fn unauthorized_is_distinct_from_other_statuses() {
    let err = ApiError::Status { code: 403, message: String::new() };
    assert_ne!(err, ApiError::Unauthorized);
}

#[test]
fn unavailable_display() {
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}
