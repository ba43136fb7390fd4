//! Task Board Component
//!
//! Error banner, new-task form, filter bar and the list itself.

use leptos::prelude::*;
use taskboard_core::Task;

use crate::commands;
use crate::components::{ErrorBanner, FilterBar, NewTaskForm, TaskItem};
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

/// Any change to a task (not just its status) rebuilds its row
fn row_key(task: &Task) -> Task {
    task.clone()
}

#[component]
pub fn TaskBoard() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();

    let tasks = Memo::new(move |_| store.board().with(|b| b.tasks().to_vec()));
    let error = Signal::derive(move || store.board().with(|b| b.error().map(str::to_string)));

    // Load the list once on mount; later loads come from the filter bar
    Effect::new(move |_| {
        log::debug!("[APP] Loading tasks");
        commands::refresh_tasks(ctx, store);
    });

    view! {
        <div class="task-board">
            <ErrorBanner error=error />
            <NewTaskForm />
            <FilterBar />

            <div class="task-list">
                <Show
                    when=move || tasks.with(|t| !t.is_empty())
                    fallback=|| view! { <p class="empty-list">"No tasks yet!"</p> }
                >
                    <For
                        each=move || tasks.get()
                        key=row_key
                        children=move |task| view! { <TaskItem task=task /> }
                    />
                </Show>
            </div>
        </div>
    }
}
