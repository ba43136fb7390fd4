//! Auth Panel Component
//!
//! Login / Register form shown while there is no session.

use leptos::prelude::*;
use taskboard_core::AuthForm;

use crate::commands;
use crate::components::ErrorBanner;
use crate::context::AppContext;
use crate::store::use_app_store;

#[component]
pub fn AuthPanel() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();

    let form = RwSignal::new(AuthForm::new());
    // Memos so typing does not rebuild the inputs
    let mode = Memo::new(move |_| form.with(|f| f.mode()));
    let busy = Memo::new(move |_| form.with(|f| f.is_busy()));
    let error = Signal::derive(move || form.with(|f| f.error().map(str::to_string)));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        commands::submit_auth(ctx, store, form);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>{move || mode.get().title()}</h1>

                <ErrorBanner error=error />

                <form class="auth-form" on:submit=on_submit>
                    {move || mode.get().fields().iter().map(move |&field| view! {
                        <input
                            type=field.input_type()
                            name=field.name()
                            placeholder=field.placeholder()
                            prop:value=move || form.with(|f| f.credentials().get(field).to_string())
                            on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
                        />
                    }).collect_view()}

                    <button type="submit" class="submit-btn" disabled=move || busy.get()>
                        {move || if busy.get() { "Loading..." } else { mode.get().title() }}
                    </button>
                </form>

                <p class="auth-switch">
                    {move || mode.get().switch_prompt()}
                    <button class="link-btn" on:click=move |_| form.update(|f| f.toggle_mode())>
                        {move || mode.get().toggled().title()}
                    </button>
                </p>
            </div>
        </div>
    }
}
