//! Authenticator
//!
//! Login/register form state. [`AuthForm`] is the synchronous half the views
//! bind to; [`Authenticator`] drives a full submit against an [`AuthApi`] and
//! a [`SessionManager`].

use crate::api::{AuthApi, AuthRequest};
use crate::domain::{AuthMode, ClientError, ClientResult, CredentialField, Credentials, Session};
use crate::session::SessionManager;
use crate::storage::KeyValueStore;

pub const PASSWORD_MISMATCH: &str = "Passwords do not match";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthForm {
    mode: AuthMode,
    credentials: Credentials,
    busy: bool,
    error: Option<String>,
}

impl AuthForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// A submit is in flight; the submit button stays disabled
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_field(&mut self, field: CredentialField, value: String) {
        self.credentials.set(field, value);
    }

    /// Switch Login <-> Register, wiping every field and the error
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.credentials = Credentials::default();
        self.error = None;
    }

    /// Start a submit
    ///
    /// Returns the request to send, or `None` when a submit is already in
    /// flight or the form was rejected locally (the error is set then).
    pub fn begin_submit(&mut self) -> Option<AuthRequest> {
        if self.busy {
            return None;
        }
        self.error = None;

        let request = match self.mode {
            AuthMode::Login => AuthRequest::Login {
                email: self.credentials.email.clone(),
                password: self.credentials.password.clone(),
            },
            AuthMode::Register => {
                if self.credentials.password != self.credentials.confirm_password {
                    self.fail(ClientError::Validation(PASSWORD_MISMATCH.to_string()));
                    return None;
                }
                AuthRequest::Register(self.credentials.clone())
            }
        };
        self.busy = true;
        Some(request)
    }

    /// Finish a submit; the busy flag is cleared whatever the outcome
    pub fn finish_submit(&mut self, result: ClientResult<Session>) -> Option<Session> {
        self.busy = false;
        match result {
            Ok(session) => Some(session),
            Err(err) => {
                self.fail(err);
                None
            }
        }
    }

    /// Show `err` as the form error
    pub fn fail(&mut self, err: ClientError) {
        log::warn!("[AUTH] {} failed: {}", self.mode.title(), err);
        self.error = Some(err.to_string());
    }
}

/// Form plus the API it submits to
pub struct Authenticator<A> {
    api: A,
    form: AuthForm,
}

impl<A: AuthApi> Authenticator<A> {
    pub fn new(api: A) -> Self {
        Self { api, form: AuthForm::new() }
    }

    pub fn form(&self) -> &AuthForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut AuthForm {
        &mut self.form
    }

    /// Submit the form; on success the session is handed to `sessions`
    ///
    /// Returns whether the user is now logged in.
    pub async fn submit<S: KeyValueStore>(&mut self, sessions: &mut SessionManager<S>) -> bool {
        let Some(request) = self.form.begin_submit() else {
            return false;
        };
        let result = self.api.authenticate(&request).await;
        let Some(session) = self.form.finish_submit(result) else {
            return false;
        };
        match sessions.login(session.token, session.user) {
            Ok(()) => true,
            Err(err) => {
                self.form.fail(err);
                false
            }
        }
    }
}
