//! User and Session
//!
//! The profile is whatever the server sends; only `name` and `email` are read
//! by the client, the rest is carried along so a stored profile round-trips.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// User profile returned by the auth endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            extra: Map::new(),
        }
    }

    /// Name for the greeting line, empty when unknown
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

/// An authenticated session: bearer token plus profile
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl Session {
    pub fn new(token: impl Into<String>, user: User) -> Self {
        Self { token: token.into(), user }
    }
}
