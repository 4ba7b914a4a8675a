//! Admin user-management view state.
//!
//! DESIGN
//! ======
//! Keeps the paged listing out of the session store: the admin table is
//! presentation data, not authentication state.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use crate::net::types::{UserListResponse, UserProfile};

/// Users shown per admin page.
pub const PAGE_SIZE: u32 = 10;

/// Paged user listing plus load status for the admin view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminState {
    pub users: Vec<UserProfile>,
    pub loading: bool,
    pub error: Option<String>,
    /// 1-based page currently displayed.
    pub page: u32,
    pub total_pages: u32,
    pub total: i64,
}

impl AdminState {
    /// Replace the listing with one fetched page.
    pub fn apply_page(&mut self, response: UserListResponse) {
        self.users = response.users;
        self.page = response.current_page.max(1);
        self.total_pages = response.total_pages;
        self.total = response.total;
        self.loading = false;
        self.error = None;
    }

    /// Record a failed fetch without discarding the last good listing.
    pub fn apply_error(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Whether a next page exists.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether a previous page exists.
    #[must_use]
    pub fn has_prev_page(&self) -> bool {
        self.page > 1
    }
}
