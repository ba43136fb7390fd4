//! Filter Bar Component
//!
//! All / Pending / Completed buttons; picking one refetches the list.

use leptos::prelude::*;
use taskboard_core::StatusFilter;

use crate::commands;
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();
    let active = Memo::new(move |_| store.board().with(|b| b.filter()));

    view! {
        <div class="filter-bar">
            {StatusFilter::ALL.into_iter().map(move |filter| {
                let tab_class = move || {
                    if active.get() == filter { "filter-btn active" } else { "filter-btn" }
                };
                view! {
                    <button
                        class=tab_class
                        on:click=move |_| commands::select_filter(ctx, store, filter)
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
