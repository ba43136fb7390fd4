//! Global Application State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity: session changes
//! and task-list changes notify independently.

use leptos::prelude::*;
use reactive_stores::Store;
use taskboard_core::{Session, TaskList};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Active session; `None` shows the auth panel
    pub session: Option<Session>,
    /// Tasks for the active filter plus the new-task draft
    pub board: TaskList,
}

impl AppState {
    pub fn new(session: Option<Session>) -> Self {
        Self {
            session,
            board: TaskList::new(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Bearer token of the active session, without subscribing
pub fn session_token(store: AppStore) -> Option<String> {
    store
        .session()
        .with_untracked(|session| session.as_ref().map(|s| s.token.clone()))
}
