//! Taskboard Frontend App
//!
//! Restores the session, provides context and switches between the auth
//! panel and the task board.

use leptos::prelude::*;
use reactive_stores::Store;
use taskboard_core::{ClientConfig, HttpApi, SessionManager};

use crate::components::{AuthPanel, SessionHeader, TaskBoard};
use crate::context::AppContext;
use crate::storage::BrowserStorage;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_override(option_env!("TASKBOARD_API_URL"));
    log::info!("[APP] API root {}", config.api_url);

    let sessions = SessionManager::restore(BrowserStorage);
    let store = Store::new(AppState::new(sessions.session().cloned()));

    // Provide context to all children
    provide_context(AppContext::new(HttpApi::new(&config), sessions));
    provide_context(store);

    let signed_in = Memo::new(move |_| store.session().with(Option::is_some));

    move || {
        if signed_in.get() {
            view! {
                <div class="page">
                    <div class="card">
                        <SessionHeader />
                        <TaskBoard />
                    </div>
                </div>
            }
            .into_any()
        } else {
            view! { <AuthPanel /> }.into_any()
        }
    }
}
