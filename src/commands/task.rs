//! Task Commands
//!
//! Run task requests in the background and fold the responses into the
//! store. A response that arrives after the session changed is dropped.

use leptos::prelude::*;
use leptos::task::spawn_local;
use taskboard_core::{FetchTicket, StatusFilter, TaskApi, TaskId};

use crate::context::AppContext;
use crate::store::{session_token, AppStateStoreFields, AppStore};

/// Still signed in with the token the request was sent with
fn same_session(store: AppStore, token: &str) -> bool {
    let current = session_token(store);
    if current.as_deref() != Some(token) {
        log::debug!("[TASKS] Session changed, dropping response");
        return false;
    }
    true
}

fn spawn_fetch(ctx: AppContext, store: AppStore, token: String, ticket: FetchTicket) {
    let api = ctx.api();
    spawn_local(async move {
        let result = api.list_tasks(&token, ticket.filter()).await;
        if same_session(store, &token) {
            store.board().write().apply_fetch(ticket, result);
        }
    });
}

/// Reload the list for the current filter
pub fn refresh_tasks(ctx: AppContext, store: AppStore) {
    let Some(token) = session_token(store) else {
        return;
    };
    let ticket = store.board().write().begin_fetch();
    spawn_fetch(ctx, store, token, ticket);
}

/// Switch filter; fetches only if it changed
pub fn select_filter(ctx: AppContext, store: AppStore, filter: StatusFilter) {
    let Some(token) = session_token(store) else {
        return;
    };
    if let Some(ticket) = store.board().write().select_filter(filter) {
        spawn_fetch(ctx, store, token, ticket);
    }
}

/// Create a task from the draft inputs
pub fn create_task(ctx: AppContext, store: AppStore) {
    let Some(token) = session_token(store) else {
        return;
    };
    let Some(draft) = store.board().write().begin_create() else {
        return;
    };
    let api = ctx.api();
    spawn_local(async move {
        let result = api.create_task(&token, &draft.title, &draft.description).await;
        if same_session(store, &token) {
            store.board().write().apply_create(result);
        }
    });
}

/// Flip pending <-> completed
pub fn toggle_task(ctx: AppContext, store: AppStore, id: TaskId) {
    let Some(token) = session_token(store) else {
        return;
    };
    let Some(status) = store.board().write().begin_toggle(&id) else {
        return;
    };
    let api = ctx.api();
    spawn_local(async move {
        let result = api.update_status(&token, &id, status).await;
        if same_session(store, &token) {
            store.board().write().apply_update(&id, result);
        }
    });
}

pub fn delete_task(ctx: AppContext, store: AppStore, id: TaskId) {
    let Some(token) = session_token(store) else {
        return;
    };
    store.board().write().begin_delete();
    let api = ctx.api();
    spawn_local(async move {
        let result = api.delete_task(&token, &id).await;
        if same_session(store, &token) {
            store.board().write().apply_delete(&id, result);
        }
    });
}
