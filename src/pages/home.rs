//! Authenticated landing page: profile card, profile edit, password change.
//!
//! SYSTEM CONTEXT
//! ==============
//! This route requires a session; the guard installed here redirects to the
//! login view otherwise. It also hosts the notice banner the admin guard
//! reports into.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::notice_banner::NoticeBanner;
#[cfg(feature = "hydrate")]
use crate::net::types::UserProfile;
use crate::state::session::{self, SessionState};
use crate::state::ui::UiState;
use crate::util::guard::install_route_guard;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    install_route_guard(crate::routes::HOME_PATH, session, ui, navigate.clone());

    let on_refresh = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            session::refresh_profile(session).await;
        });
    };

    let navigate_logout = navigate.clone();
    let on_logout = move |_| {
        session::logout(session);
        navigate_logout(crate::routes::LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="home-page">
            <NoticeBanner/>
            <header class="home-page__header toolbar">
                <span class="toolbar__title">"Personal Information Manager"</span>
                <span class="toolbar__spacer"></span>
                <Show when=move || session.with(SessionState::is_admin)>
                    <a class="btn toolbar__admin" href="/admin">
                        "User Management"
                    </a>
                </Show>
                <button class="btn toolbar__refresh" on:click=on_refresh title="Re-fetch profile">
                    "Refresh"
                </button>
                <button class="btn toolbar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </header>

            <section class="profile-card">
                <h2>{move || {
                    let name = session.with(|s| s.full_name().to_owned());
                    if name.is_empty() { session.with(|s| s.username().to_owned()) } else { name }
                }}</h2>
                <p class="profile-card__line">
                    "Username: " {move || session.with(|s| s.username().to_owned())}
                </p>
                <p class="profile-card__line">
                    "Role: " {move || session.with(|s| s.role().to_owned())}
                </p>
                <p class="profile-card__line">
                    "Email: "
                    {move || {
                        session.with(|s| {
                            s.profile().and_then(|p| p.email.clone()).unwrap_or_default()
                        })
                    }}
                </p>
            </section>

            <ProfileForm/>
            <PasswordForm/>
        </div>
    }
}

/// Inline editor for the mutable profile fields.
#[component]
fn ProfileForm() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let full_name = RwSignal::new(session.with_untracked(|s| s.full_name().to_owned()));
    let email = RwSignal::new(
        session.with_untracked(|s| s.profile().and_then(|p| p.email.clone()).unwrap_or_default()),
    );
    let phone = RwSignal::new(
        session.with_untracked(|s| s.profile().and_then(|p| p.phone.clone()).unwrap_or_default()),
    );
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let mut changes = session
                .with_untracked(|s| s.profile().cloned())
                .unwrap_or_else(|| UserProfile {
                    username: session.with_untracked(|s| s.username().to_owned()),
                    ..UserProfile::default()
                });
            changes.full_name = Some(full_name.get_untracked().trim().to_owned());
            changes.email = Some(email.get_untracked().trim().to_owned());
            changes.phone = Some(phone.get_untracked().trim().to_owned());

            match session::update_profile(session, &changes).await {
                Ok(_) => info.set("Profile saved.".to_owned()),
                Err(e) => info.set(format!("Save failed: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        busy.set(false);
    };

    view! {
        <section class="profile-form">
            <h3>"Edit Profile"</h3>
            <form on:submit=on_save>
                <label class="profile-form__label">
                    "Full name"
                    <input
                        class="profile-form__input"
                        type="text"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="profile-form__label">
                    "Email"
                    <input
                        class="profile-form__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="profile-form__label">
                    "Phone"
                    <input
                        class="profile-form__input"
                        type="tel"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Save"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="profile-form__message">{move || info.get()}</p>
            </Show>
        </section>
    }
}

/// Change-password form. The credential stays as-is; the server decides
/// when it stops being valid.
#[component]
fn PasswordForm() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let session = expect_context::<RwSignal<SessionState>>();
    let current = RwSignal::new(String::new());
    let new = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_change = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let current_value = current.get();
        let new_value = new.get();
        if current_value.is_empty() || new_value.is_empty() {
            info.set("Enter both the current and the new password.".to_owned());
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match session::change_password(session, &current_value, &new_value).await {
                Ok(()) => {
                    info.set("Password changed.".to_owned());
                    current.set(String::new());
                    new.set(String::new());
                }
                Err(e) => info.set(format!("Change failed: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        busy.set(false);
    };

    view! {
        <section class="password-form">
            <h3>"Change Password"</h3>
            <form on:submit=on_change>
                <input
                    class="profile-form__input"
                    type="password"
                    placeholder="Current password"
                    prop:value=move || current.get()
                    on:input=move |ev| current.set(event_target_value(&ev))
                />
                <input
                    class="profile-form__input"
                    type="password"
                    placeholder="New password"
                    prop:value=move || new.get()
                    on:input=move |ev| new.set(event_target_value(&ev))
                />
                <button class="btn" type="submit" disabled=move || busy.get()>
                    "Change"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="profile-form__message">{move || info.get()}</p>
            </Show>
        </section>
    }
}
