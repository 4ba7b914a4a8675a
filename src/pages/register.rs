//! Registration page. Successful registration logs straight in with the
//! same credentials.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::net::api;
#[cfg(feature = "hydrate")]
use crate::net::types::RegisterRequest;
#[cfg(feature = "hydrate")]
use crate::state::session;
use crate::state::session::SessionState;

#[cfg(feature = "hydrate")]
fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    // Availability hint, checked when the username field loses focus.
    let on_username_blur = move |_| {
        let username_value = username.get_untracked().trim().to_owned();
        if username_value.is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Ok(check) = api::check_username(session, &username_value).await {
                if !check.available {
                    info.set(format!("Username \"{username_value}\" is already taken."));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &session;
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let username_value = username.get().trim().to_owned();
        let password_value = password.get();
        if username_value.is_empty() || password_value.is_empty() {
            info.set("Username and password are required.".to_owned());
            return;
        }
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let full_name_value = optional(&full_name.get_untracked());
            let email_value = optional(&email.get_untracked());
            let phone_value = optional(&phone.get_untracked());
            leptos::task::spawn_local(async move {
                let registration = RegisterRequest {
                    username: username_value,
                    password: password_value,
                    full_name: full_name_value,
                    email: email_value,
                    phone: phone_value,
                };
                match session::register(session, registration).await {
                    Ok(_) => navigate(crate::routes::HOME_PATH, NavigateOptions::default()),
                    Err(e) => {
                        info.set(format!("Registration failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &navigate;
        }
    };

    view! {
        <div class="register-page">
            <div class="login-card">
                <h1>"Personal Information Manager"</h1>
                <p class="login-card__subtitle">"Create Account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                        on:blur=on_username_blur
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Full name (optional)"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Email (optional)"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="tel"
                        placeholder="Phone (optional)"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
