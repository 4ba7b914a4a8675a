//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::pages::{admin::AdminPage, home::HomePage, login::LoginPage, register::RegisterPage};
use crate::state::session::SessionState;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Hydrates the session store from persisted storage before the router runs
/// its first guard evaluation, and subscribes navigation to the store's
/// expiry signal.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::hydrate());
    let ui = RwSignal::new(UiState::default());

    provide_context(session);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/pim-client.css"/>
        <Title text="Personal Information Manager"/>

        <Router>
            <ExpiryRedirect/>
            <Routes fallback=UnknownRoute>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
            </Routes>
        </Router>
    }
}

/// Watches the session-expiry signal raised by the interceptor and forces
/// navigation to the login view. Kept separate from the per-page guards so
/// the HTTP layer never touches the router directly.
#[component]
fn ExpiryRedirect() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if session.with(SessionState::expired_seq) > 0 {
            log::info!("session expired, redirecting to login");
            navigate(crate::routes::LOGIN_PATH, NavigateOptions::default());
        }
    });

    ()
}

/// Fallback for undeclared paths. Access is denied toward the login view.
#[component]
fn UnknownRoute() -> impl IntoView {
    let navigate = use_navigate();

    Effect::new(move || {
        navigate(crate::routes::LOGIN_PATH, NavigateOptions::default());
    });

    view! { <p class="unknown-route">"Redirecting to login..."</p> }
}
