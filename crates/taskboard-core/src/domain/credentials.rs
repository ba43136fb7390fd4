//! Credentials
//!
//! Transient form data for the login/register screen. Never persisted.

use serde::{Deserialize, Serialize};

/// Which auth endpoint the form targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }

    /// Path relative to the API root
    pub fn endpoint(&self) -> &'static str {
        match self {
            AuthMode::Login => "auth/login",
            AuthMode::Register => "auth/register",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Register => "Register",
        }
    }

    /// Question shown next to the mode switch
    pub fn switch_prompt(&self) -> &'static str {
        match self {
            AuthMode::Login => "Don't have an account?",
            AuthMode::Register => "Already have an account?",
        }
    }

    /// Inputs rendered for this mode, in order
    pub fn fields(&self) -> &'static [CredentialField] {
        match self {
            AuthMode::Login => &[CredentialField::Email, CredentialField::Password],
            AuthMode::Register => &[
                CredentialField::Name,
                CredentialField::Email,
                CredentialField::Password,
                CredentialField::ConfirmPassword,
            ],
        }
    }
}

/// One input of the auth form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialField {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl CredentialField {
    pub fn name(&self) -> &'static str {
        match self {
            CredentialField::Name => "name",
            CredentialField::Email => "email",
            CredentialField::Password => "password",
            CredentialField::ConfirmPassword => "confirmPassword",
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            CredentialField::Name => "text",
            CredentialField::Email => "email",
            CredentialField::Password | CredentialField::ConfirmPassword => "password",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            CredentialField::Name => "Full Name",
            CredentialField::Email => "Email",
            CredentialField::Password => "Password",
            CredentialField::ConfirmPassword => "Confirm Password",
        }
    }
}

/// Form values; the register payload serializes this as-is
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl Credentials {
    pub fn get(&self, field: CredentialField) -> &str {
        match field {
            CredentialField::Name => &self.name,
            CredentialField::Email => &self.email,
            CredentialField::Password => &self.password,
            CredentialField::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: CredentialField, value: String) {
        match field {
            CredentialField::Name => self.name = value,
            CredentialField::Email => self.email = value,
            CredentialField::Password => self.password = value,
            CredentialField::ConfirmPassword => self.confirm_password = value,
        }
    }
}
