//! Scripted in-memory API for state-machine tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;

use super::{AuthApi, AuthRequest, TaskApi};
use crate::domain::{ClientError, ClientResult, Session, StatusFilter, Task, TaskStatus, Timestamp};

/// A request the fake received
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Authenticate(AuthRequest),
    List { token: String, filter: StatusFilter },
    Create { title: String, description: String },
    Update { id: String, status: TaskStatus },
    Delete { id: String },
}

/// Replies are consumed in order; an unscripted call fails as a network error
#[derive(Default)]
pub(crate) struct FakeApi {
    pub calls: RefCell<Vec<Call>>,
    pub auth: RefCell<VecDeque<ClientResult<Session>>>,
    pub lists: RefCell<VecDeque<ClientResult<Vec<Task>>>>,
    pub tasks: RefCell<VecDeque<ClientResult<Task>>>,
    pub deletes: RefCell<VecDeque<ClientResult<()>>>,
}

fn next<T>(queue: &RefCell<VecDeque<ClientResult<T>>>) -> ClientResult<T> {
    queue
        .borrow_mut()
        .pop_front()
        .unwrap_or_else(|| Err(ClientError::Network("no scripted reply".to_string())))
}

impl FakeApi {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl AuthApi for FakeApi {
    async fn authenticate(&self, request: &AuthRequest) -> ClientResult<Session> {
        self.record(Call::Authenticate(request.clone()));
        next(&self.auth)
    }
}

#[async_trait(?Send)]
impl TaskApi for FakeApi {
    async fn list_tasks(&self, token: &str, filter: StatusFilter) -> ClientResult<Vec<Task>> {
        self.record(Call::List { token: token.to_string(), filter });
        next(&self.lists)
    }

    async fn create_task(&self, _token: &str, title: &str, description: &str) -> ClientResult<Task> {
        self.record(Call::Create { title: title.to_string(), description: description.to_string() });
        next(&self.tasks)
    }

    async fn update_status(&self, _token: &str, id: &str, status: TaskStatus) -> ClientResult<Task> {
        self.record(Call::Update { id: id.to_string(), status });
        next(&self.tasks)
    }

    async fn delete_task(&self, _token: &str, id: &str) -> ClientResult<()> {
        self.record(Call::Delete { id: id.to_string() });
        next(&self.deletes)
    }
}

/// Task fixture
pub(crate) fn task(id: &str, title: &str, status: TaskStatus) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        status,
        created_at: Some(Timestamp::from("2024-01-01")),
    }
}
