//! Session Header Component
//!
//! Page title, greeting and the logout button.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SessionHeader() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();

    let name = move || {
        store.session().with(|session| {
            session
                .as_ref()
                .map(|s| s.user.display_name().to_string())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="session-header">
            <div>
                <h1>"My Tasks"</h1>
                <p class="welcome">"Welcome, " {name}</p>
            </div>
            <button class="logout-btn" on:click=move |_| ctx.logout(store)>
                "Logout"
            </button>
        </div>
    }
}
