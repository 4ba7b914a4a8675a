use super::*;

fn page(current: u32, total_pages: u32, count: usize) -> UserListResponse {
    UserListResponse {
        users: (0..count)
            .map(|i| UserProfile { username: format!("user{i}"), ..UserProfile::default() })
            .collect(),
        total: i64::try_from(count).unwrap_or(0),
        current_page: current,
        total_pages,
        page_size: PAGE_SIZE,
    }
}

#[test]
fn admin_state_default_is_empty() {
    let state = AdminState::default();
    assert!(state.users.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn apply_page_replaces_listing_and_clears_status() {
    let mut state = AdminState { loading: true, error: Some("old".to_owned()), ..AdminState::default() };
    state.apply_page(page(2, 3, 4));
    assert_eq!(state.users.len(), 4);
    assert_eq!(state.page, 2);
    assert_eq!(state.total_pages, 3);
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn apply_page_clamps_page_to_one() {
    let mut state = AdminState::default();
    state.apply_page(page(0, 0, 0));
    assert_eq!(state.page, 1);
}

#[test]
fn apply_error_keeps_previous_listing() {
    let mut state = AdminState::default();
    state.apply_page(page(1, 2, 3));
    state.loading = true;
    state.apply_error("boom".to_owned());
    assert_eq!(state.users.len(), 3);
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("boom"));
}

#[test]
fn paging_predicates_follow_bounds() {
    let mut state = AdminState::default();
    state.apply_page(page(1, 3, 1));
    assert!(state.has_next_page());
    assert!(!state.has_prev_page());

    state.apply_page(page(3, 3, 1));
    assert!(!state.has_next_page());
    assert!(state.has_prev_page());
}
