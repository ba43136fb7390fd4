//! API Layer - Core Traits
//!
//! Abstract interfaces for the remote task service. [`HttpApi`] talks to
//! the real REST endpoints; tests substitute in-memory fakes.
//!
//! Futures are not `Send`: on wasm they wrap browser `fetch` promises.

mod http;
mod wire;

#[cfg(test)]
pub(crate) mod fake;

pub use http::HttpApi;
pub use wire::{
    AuthRequest, AuthResponse, CreateTaskRequest, ErrorBody, TaskListResponse, TaskResponse,
    UpdateStatusRequest,
};

use async_trait::async_trait;

use crate::domain::{ClientResult, Session, StatusFilter, Task, TaskStatus};

/// Fallback messages used when the server gives none
pub const AUTH_FAILED: &str = "Authentication failed";
pub const FETCH_FAILED: &str = "Failed to fetch tasks";
pub const CREATE_FAILED: &str = "Failed to create task";
pub const UPDATE_FAILED: &str = "Failed to update task";
pub const DELETE_FAILED: &str = "Failed to delete task";

/// `/auth/*` endpoints
#[async_trait(?Send)]
pub trait AuthApi {
    /// Exchange credentials for a session
    async fn authenticate(&self, request: &AuthRequest) -> ClientResult<Session>;
}

/// `/tasks` endpoints; every call carries the bearer token
#[async_trait(?Send)]
pub trait TaskApi {
    async fn list_tasks(&self, token: &str, filter: StatusFilter) -> ClientResult<Vec<Task>>;

    async fn create_task(&self, token: &str, title: &str, description: &str) -> ClientResult<Task>;

    async fn update_status(&self, token: &str, id: &str, status: TaskStatus) -> ClientResult<Task>;

    async fn delete_task(&self, token: &str, id: &str) -> ClientResult<()>;
}
