//! Admin user-management page: paged listing, enable/disable, delete,
//! password reset.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded twice: the route guard sends non-admins away before rendering,
//! and every call below also flows through the interceptor pipeline, so a
//! revoked credential logs out mid-visit.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::notice_banner::NoticeBanner;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::UserProfile;
use crate::state::admin::{AdminState, PAGE_SIZE};
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::guard::install_route_guard;

#[component]
pub fn AdminPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    install_route_guard(crate::routes::ADMIN_PATH, session, ui, navigate.clone());

    let admin = RwSignal::new(AdminState::default());
    let reset_target = RwSignal::new(None::<UserProfile>);

    // Initial load once the guard has let an admin through.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        if !session.with(|s| s.is_logged_in() && s.is_admin()) {
            return;
        }
        requested.set(true);
        load_users(session, admin, 1);
    });

    let on_prev = move |_| {
        let page = admin.with_untracked(|a| a.page);
        if admin.with_untracked(AdminState::has_prev_page) {
            load_users(session, admin, page - 1);
        }
    };
    let on_next = move |_| {
        let page = admin.with_untracked(|a| a.page);
        if admin.with_untracked(AdminState::has_next_page) {
            load_users(session, admin, page + 1);
        }
    };

    let on_reset_cancel = Callback::new(move |()| reset_target.set(None));

    view! {
        <div class="admin-page">
            <NoticeBanner/>
            <header class="admin-page__header toolbar">
                <span class="toolbar__title">"User Management"</span>
                <span class="toolbar__spacer"></span>
                <a class="btn toolbar__back" href="/">
                    "Back"
                </a>
            </header>

            <Show when=move || admin.with(|a| a.error.is_some())>
                <p class="admin-page__error">
                    {move || admin.with(|a| a.error.clone().unwrap_or_default())}
                </p>
            </Show>

            <Show
                when=move || !admin.with(|a| a.loading)
                fallback=move || view! { <p>"Loading users..."</p> }
            >
                <table class="admin-table">
                    <thead>
                        <tr>
                            <th>"Username"</th>
                            <th>"Full name"</th>
                            <th>"Role"</th>
                            <th>"Enabled"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            admin
                                .with(|a| a.users.clone())
                                .into_iter()
                                .map(|user| {
                                    view! {
                                        <UserRow
                                            user=user
                                            session=session
                                            admin=admin
                                            reset_target=reset_target
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>

            <div class="admin-page__pager">
                <button class="btn" on:click=on_prev disabled=move || !admin.with(AdminState::has_prev_page)>
                    "Prev"
                </button>
                <span class="admin-page__pager-label">
                    {move || admin.with(|a| format!("Page {} of {} ({} users)", a.page, a.total_pages.max(1), a.total))}
                </span>
                <button class="btn" on:click=on_next disabled=move || !admin.with(AdminState::has_next_page)>
                    "Next"
                </button>
            </div>

            <Show when=move || reset_target.get().is_some()>
                <ResetPasswordDialog
                    target=reset_target
                    session=session
                    on_cancel=on_reset_cancel
                />
            </Show>
        </div>
    }
}

/// One listing row with enable/disable, reset, and delete actions.
#[component]
fn UserRow(
    user: UserProfile,
    session: RwSignal<SessionState>,
    admin: RwSignal<AdminState>,
    reset_target: RwSignal<Option<UserProfile>>,
) -> impl IntoView {
    let enabled = user.enabled.unwrap_or(true);
    let row = user.clone();

    let toggle_user = user.clone();
    let on_toggle = move |_| {
        let mut changes = toggle_user.clone();
        changes.enabled = Some(!enabled);
        save_user(session, admin, changes);
    };

    let delete_user = user.clone();
    let on_delete = move |_| {
        if let Some(id) = delete_user.id {
            remove_user(session, admin, id);
        }
    };

    let reset_user = user;
    let on_reset = move |_| reset_target.set(Some(reset_user.clone()));

    view! {
        <tr class="admin-table__row">
            <td>{row.username.clone()}</td>
            <td>{row.full_name.clone().unwrap_or_default()}</td>
            <td>{row.role.clone().unwrap_or_default()}</td>
            <td>{if enabled { "yes" } else { "no" }}</td>
            <td class="admin-table__actions">
                <button class="btn" on:click=on_toggle>
                    {if enabled { "Disable" } else { "Enable" }}
                </button>
                <button class="btn" on:click=on_reset>
                    "Reset password"
                </button>
                <button class="btn btn--danger" on:click=on_delete>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

/// Modal dialog entering a replacement password for one user.
#[component]
fn ResetPasswordDialog(
    target: RwSignal<Option<UserProfile>>,
    session: RwSignal<SessionState>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let password = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        let Some(user) = target.get_untracked() else {
            return;
        };
        let value = password.get_untracked();
        if value.trim().is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let value = value.trim().to_owned();
            leptos::task::spawn_local(async move {
                if let Some(id) = user.id {
                    let _ = api::update_user_password(session, id, &value).await;
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &user);
        }
        on_cancel.run(());
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Reset Password"</h2>
                <p class="dialog__subtitle">
                    {move || target.get().map(|u| u.username).unwrap_or_default()}
                </p>
                <label class="dialog__label">
                    "New password"
                    <input
                        class="dialog__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Reset"
                    </button>
                </div>
            </div>
        </div>
    }
}

fn load_users(session: RwSignal<SessionState>, admin: RwSignal<AdminState>, page: u32) {
    admin.update(|a| a.loading = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match api::list_users(session, page, PAGE_SIZE, None).await {
            Ok(listing) => admin.update(|a| a.apply_page(listing)),
            Err(e) => admin.update(|a| a.apply_error(e.to_string())),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, page, PAGE_SIZE);
        admin.update(|a| a.loading = false);
    }
}

fn save_user(session: RwSignal<SessionState>, admin: RwSignal<AdminState>, changes: UserProfile) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let Some(id) = changes.id else {
            return;
        };
        match api::update_user(session, id, &changes).await {
            Ok(_) => {
                let page = admin.with_untracked(|a| a.page);
                load_users(session, admin, page);
            }
            Err(e) => admin.update(|a| a.apply_error(e.to_string())),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, admin, changes);
    }
}

fn remove_user(session: RwSignal<SessionState>, admin: RwSignal<AdminState>, id: i64) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match api::delete_user(session, id).await {
            Ok(()) => {
                let page = admin.with_untracked(|a| a.page);
                load_users(session, admin, page);
            }
            Err(e) => admin.update(|a| a.apply_error(e.to_string())),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, admin, id);
    }
}
