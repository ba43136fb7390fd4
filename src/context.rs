//! Application Context
//!
//! Services provided via the Leptos Context API: the REST client and the
//! session manager. Both live in `StoredValue`s so the context stays `Copy`.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use taskboard_core::{ClientError, ClientResult, HttpApi, Session, SessionManager};

use crate::storage::BrowserStorage;
use crate::store::{AppStateStoreFields, AppStore};

/// Outcome of a session-manager update; a disposed manager persisted nothing
fn persisted(outcome: Option<ClientResult<()>>) -> ClientResult<()> {
    outcome.unwrap_or_else(|| Err(ClientError::Storage("session manager disposed".to_string())))
}

/// App-wide services provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    api: StoredValue<HttpApi, LocalStorage>,
    sessions: StoredValue<SessionManager<BrowserStorage>, LocalStorage>,
}

impl AppContext {
    pub fn new(api: HttpApi, sessions: SessionManager<BrowserStorage>) -> Self {
        Self {
            api: StoredValue::new_local(api),
            sessions: StoredValue::new_local(sessions),
        }
    }

    /// Handle to the REST client (cheap clone)
    pub fn api(&self) -> HttpApi {
        self.api.get_value()
    }

    /// Persist `session` and switch the UI to the task view
    pub fn login(&self, store: AppStore, session: Session) -> ClientResult<()> {
        let (token, user) = (session.token.clone(), session.user.clone());
        persisted(self.sessions.try_update_value(|m| m.login(token, user)))?;
        *store.session().write() = Some(session);
        Ok(())
    }

    /// Drop the session and everything loaded under it
    pub fn logout(&self, store: AppStore) {
        self.sessions.update_value(|m| m.logout());
        store.board().write().reset();
        *store.session().write() = None;
    }
}
