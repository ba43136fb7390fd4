//! Taskboard Client Core
//!
//! Layered architecture:
//! - domain: wire entities and the error type
//! - storage: key-value persistence for the session
//! - api: REST bindings (traits + `reqwest` implementation)
//! - session / auth / tasks: the state machines the views drive

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod session;
pub mod storage;
pub mod tasks;

pub use api::{AuthApi, HttpApi, TaskApi};
pub use auth::{AuthForm, Authenticator};
pub use config::ClientConfig;
pub use domain::{
    AuthMode, ClientError, ClientResult, CredentialField, Credentials, Session, StatusFilter, Task,
    TaskId, TaskStatus, Timestamp, User,
};
pub use session::SessionManager;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use tasks::{FetchTicket, TaskDraft, TaskList, TaskListController};
