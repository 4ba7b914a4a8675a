//! Dismissible banner surfacing `UiState` notices.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Banner shown while a notice is set, e.g. the guard's
/// insufficient-privilege warning.
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <Show when=move || ui.with(|u| u.notice.is_some())>
            <div class="notice-banner">
                <span class="notice-banner__text">
                    {move || ui.with(|u| u.notice.clone().unwrap_or_default())}
                </span>
                <button
                    class="notice-banner__dismiss"
                    on:click=move |_| ui.update(UiState::dismiss_notice)
                >
                    "Dismiss"
                </button>
            </div>
        </Show>
    }
}
