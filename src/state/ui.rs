//! Transient UI chrome state shared across pages.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Cross-page UI state: one-shot notices surfaced by the guard and actions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    /// Warning or info banner shown until dismissed.
    pub notice: Option<String>,
}

impl UiState {
    /// Replace the current notice.
    pub fn set_notice(&mut self, text: impl Into<String>) {
        self.notice = Some(text.into());
    }

    /// Clear the banner.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
