//! Error Banner Component

use leptos::prelude::*;

/// Latest error of a view, hidden when there is none
#[component]
pub fn ErrorBanner(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || error.get().map(|message| view! { <div class="error-banner">{message}</div> })
}
