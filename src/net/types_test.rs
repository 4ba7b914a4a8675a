use super::*;

// =============================================================
// UserProfile
// =============================================================

#[test]
fn user_profile_deserializes_slim_payload() {
    let json = r#"{"username":"al","role":"ROLE_USER"}"#;
    let profile: UserProfile = serde_json::from_str(json).expect("slim payload");
    assert_eq!(profile.username, "al");
    assert_eq!(profile.role.as_deref(), Some("ROLE_USER"));
    assert_eq!(profile.id, None);
    assert_eq!(profile.full_name, None);
    assert_eq!(profile.enabled, None);
}

#[test]
fn user_profile_uses_camel_case_keys() {
    let json = r#"{"username":"al","fullName":"Al Example","email":"al@example.com"}"#;
    let profile: UserProfile = serde_json::from_str(json).expect("camelCase payload");
    assert_eq!(profile.full_name.as_deref(), Some("Al Example"));

    let out = serde_json::to_value(&profile).expect("serialize");
    assert_eq!(out["fullName"], "Al Example");
    assert!(out.get("full_name").is_none());
}

#[test]
fn user_profile_skips_absent_fields_when_serialized() {
    let profile = UserProfile { username: "al".to_owned(), ..UserProfile::default() };
    let out = serde_json::to_value(&profile).expect("serialize");
    assert_eq!(out["username"], "al");
    assert!(out.get("role").is_none());
    assert!(out.get("email").is_none());
}

// =============================================================
// LoginResponse
// =============================================================

#[test]
fn login_response_parses_token_and_user() {
    let json = r#"{"token":"t1","user":{"username":"al","role":"ROLE_USER"}}"#;
    let response: LoginResponse = serde_json::from_str(json).expect("login payload");
    assert_eq!(response.token, "t1");
    assert_eq!(response.user.username, "al");
    assert_eq!(response.user.role.as_deref(), Some(ROLE_USER));
}

// =============================================================
// Role constants
// =============================================================

#[test]
fn role_constants_are_distinct() {
    assert_ne!(ROLE_USER, ROLE_ADMIN);
}

// =============================================================
// Admin listing
// =============================================================

#[test]
fn user_list_response_parses_page_envelope() {
    let json = r#"{
        "users":[{"username":"al"},{"username":"bo","role":"ROLE_ADMIN"}],
        "total":12,
        "currentPage":1,
        "totalPages":2,
        "pageSize":10
    }"#;
    let page: UserListResponse = serde_json::from_str(json).expect("page payload");
    assert_eq!(page.users.len(), 2);
    assert_eq!(page.users[1].role.as_deref(), Some(ROLE_ADMIN));
    assert_eq!(page.total, 12);
    assert_eq!(page.current_page, 1);
    assert_eq!(page.total_pages, 2);
}

#[test]
fn availability_parses_flag() {
    let body: Availability = serde_json::from_str(r#"{"available":false}"#).expect("flag");
    assert!(!body.available);
}
