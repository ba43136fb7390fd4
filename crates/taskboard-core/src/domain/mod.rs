//! Domain Layer
//!
//! Wire entities shared by the API bindings, the state machines and the views.
//! This layer has no I/O.

mod credentials;
mod error;
mod task;
mod user;

pub use credentials::{AuthMode, CredentialField, Credentials};
pub use error::{ClientError, ClientResult};
pub use task::{StatusFilter, Task, TaskId, TaskStatus, Timestamp};
pub use user::{Session, User};
