//! New Task Form Component
//!
//! Title and optional description; a blank title submits nothing.

use leptos::prelude::*;

use crate::commands;
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();
    let creating = Memo::new(move |_| store.board().with(|b| b.is_creating()));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        commands::create_task(ctx, store);
    };

    view! {
        <form class="new-task-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Task title..."
                prop:value=move || store.board().with(|b| b.draft().title.clone())
                on:input=move |ev| {
                    store.board().write().draft_mut().title = event_target_value(&ev);
                }
            />
            <textarea
                placeholder="Description (optional)"
                rows="2"
                prop:value=move || store.board().with(|b| b.draft().description.clone())
                on:input=move |ev| {
                    store.board().write().draft_mut().description = event_target_value(&ev);
                }
            ></textarea>
            <button type="submit" class="submit-btn" disabled=move || creating.get()>
                {move || if creating.get() { "Adding..." } else { "Add Task" }}
            </button>
        </form>
    }
}
