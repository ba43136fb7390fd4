//! Task Item Component
//!
//! One row of the task list.

use leptos::prelude::*;
use taskboard_core::Task;

use crate::commands;
use crate::context::AppContext;
use crate::store::use_app_store;

#[component]
pub fn TaskItem(task: Task) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();

    let completed = task.is_completed();
    let toggle_id = task.id.clone();
    let delete_id = task.id.clone();
    let description = task.description_text().map(str::to_string);
    let created = task.created_label();
    let title_class = if completed { "task-title completed" } else { "task-title" };

    view! {
        <div class="task-row">
            // The row is rebuilt whenever the stored task changes; until then
            // the box keeps showing the stored status, even if the update fails.
            <input
                type="checkbox"
                class="task-check"
                prop:checked=completed
                on:click=move |ev| {
                    ev.prevent_default();
                    commands::toggle_task(ctx, store, toggle_id.clone());
                }
            />
            <div class="task-body">
                <p class=title_class>{task.title}</p>
                {description.map(|text| view! { <p class="task-description">{text}</p> })}
                {created.map(|label| view! { <p class="task-created">{label}</p> })}
            </div>
            <button
                class="delete-btn"
                on:click=move |_| commands::delete_task(ctx, store, delete_id.clone())
            >
                "Delete"
            </button>
        </div>
    }
}
