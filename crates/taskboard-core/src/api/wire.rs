//! Request and response bodies of the REST API.

use serde::{Deserialize, Serialize};

use crate::domain::{AuthMode, Credentials, Task, TaskStatus, User};

// ========================
// Requests
// ========================

/// Body of `POST /auth/login` or `POST /auth/register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AuthRequest {
    Login { email: String, password: String },
    Register(Credentials),
}

impl AuthRequest {
    pub fn mode(&self) -> AuthMode {
        match self {
            AuthRequest::Login { .. } => AuthMode::Login,
            AuthRequest::Register(_) => AuthMode::Register,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            AuthRequest::Login { email, .. } => email,
            AuthRequest::Register(creds) => &creds.email,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateTaskRequest<'a> {
    pub title: &'a str,
    pub description: &'a str,
}

#[derive(Debug, Serialize)]
pub struct UpdateStatusRequest {
    pub status: TaskStatus,
}

// ========================
// Responses
// ========================

#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Deserialize)]
pub struct TaskListResponse {
    #[serde(default)]
    pub tasks: Option<Vec<Task>>,
}

#[derive(Debug, Deserialize)]
pub struct TaskResponse {
    pub task: Task,
}

/// Error body of a non-2xx response
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Server message, or `fallback` when missing or empty
    pub fn message_or(self, fallback: &str) -> String {
        self.message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_string())
    }
}
