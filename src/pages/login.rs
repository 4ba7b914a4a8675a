//! Login page with username + password form.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::net::types::LoginRequest;
#[cfg(feature = "hydrate")]
use crate::state::session;
use crate::state::session::SessionState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let username_value = username.get().trim().to_owned();
        let password_value = password.get();
        if username_value.is_empty() || password_value.is_empty() {
            info.set("Enter both username and password.".to_owned());
            return;
        }
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let credentials =
                    LoginRequest { username: username_value, password: password_value };
                match session::login(session, credentials).await {
                    Ok(_) => navigate(crate::routes::HOME_PATH, NavigateOptions::default()),
                    Err(e) => {
                        info.set(format!("Login failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &navigate;
            let _ = &session;
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Personal Information Manager"</h1>
                <p class="login-card__subtitle">"Sign In"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "No account yet? "
                    <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
