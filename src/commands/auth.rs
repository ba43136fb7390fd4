//! Auth Commands
//!
//! Submit the login/register form and hand the session to the context.

use leptos::prelude::*;
use leptos::task::spawn_local;
use taskboard_core::{AuthApi, AuthForm};

use crate::context::AppContext;
use crate::store::AppStore;

/// Submit `form`; ignored while a submit is already in flight
pub fn submit_auth(ctx: AppContext, store: AppStore, form: RwSignal<AuthForm>) {
    let Some(request) = form.try_update(|f| f.begin_submit()).flatten() else {
        return;
    };
    let api = ctx.api();

    spawn_local(async move {
        let result = api.authenticate(&request).await;
        // The form is disposed once the task view replaces it
        let Some(session) = form.try_update(|f| f.finish_submit(result)).flatten() else {
            return;
        };
        if let Err(err) = ctx.login(store, session) {
            form.try_update(|f| f.fail(err));
        }
    });
}
