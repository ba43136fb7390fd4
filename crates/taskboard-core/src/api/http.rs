//! REST bindings over `reqwest`
//!
//! On wasm `reqwest` rides on the browser `fetch`; natively it uses hyper,
//! which is what the integration tests exercise.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;

use super::wire::{
    AuthRequest, AuthResponse, CreateTaskRequest, ErrorBody, TaskListResponse, TaskResponse,
    UpdateStatusRequest,
};
use super::{AuthApi, TaskApi, AUTH_FAILED, CREATE_FAILED, DELETE_FAILED, FETCH_FAILED, UPDATE_FAILED};
use crate::config::ClientConfig;
use crate::domain::{ClientError, ClientResult, Session, StatusFilter, Task, TaskStatus};

/// Bytes escaped when a task id becomes one path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Client for the task REST API
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// `{API}/tasks/{id}` with the id escaped
    pub fn task_url(&self, id: &str) -> String {
        format!("{}/tasks/{}", self.base_url, utf8_percent_encode(id, PATH_SEGMENT))
    }
}

/// Decode a JSON body, turning non-2xx into [`ClientError::Api`]
async fn read_json<T: DeserializeOwned>(response: reqwest::Response, fallback: &str) -> ClientResult<T> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&body)
            .unwrap_or_default()
            .message_or(fallback);
        log::warn!("[API] {} -> {}", status, message);
        return Err(ClientError::Api { status: status.as_u16(), message });
    }
    Ok(serde_json::from_str(&body)?)
}

#[async_trait(?Send)]
impl AuthApi for HttpApi {
    async fn authenticate(&self, request: &AuthRequest) -> ClientResult<Session> {
        let endpoint = request.mode().endpoint();
        log::debug!("[API] POST /{} for {}", endpoint, request.email());

        let response = self.client.post(self.url(endpoint)).json(request).send().await?;
        let body: AuthResponse = read_json(response, AUTH_FAILED).await?;

        let token = body
            .token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ClientError::Decode(AUTH_FAILED.to_string()))?;
        Ok(Session::new(token, body.user.unwrap_or_default()))
    }
}

#[async_trait(?Send)]
impl TaskApi for HttpApi {
    async fn list_tasks(&self, token: &str, filter: StatusFilter) -> ClientResult<Vec<Task>> {
        log::debug!("[API] GET /tasks filter={}", filter.as_str());
        let mut request = self.client.get(self.url("tasks")).bearer_auth(token);
        if let Some(status) = filter.status() {
            request = request.query(&[("status", status.as_str())]);
        }
        let body: TaskListResponse = read_json(request.send().await?, FETCH_FAILED).await?;
        Ok(body.tasks.unwrap_or_default())
    }

    async fn create_task(&self, token: &str, title: &str, description: &str) -> ClientResult<Task> {
        log::debug!("[API] POST /tasks");
        let response = self
            .client
            .post(self.url("tasks"))
            .bearer_auth(token)
            .json(&CreateTaskRequest { title, description })
            .send()
            .await?;
        let body: TaskResponse = read_json(response, CREATE_FAILED).await?;
        Ok(body.task)
    }

    async fn update_status(&self, token: &str, id: &str, status: TaskStatus) -> ClientResult<Task> {
        log::debug!("[API] PUT /tasks/{} status={}", id, status.as_str());
        let response = self
            .client
            .put(self.task_url(id))
            .bearer_auth(token)
            .json(&UpdateStatusRequest { status })
            .send()
            .await?;
        let body: TaskResponse = read_json(response, UPDATE_FAILED).await?;
        Ok(body.task)
    }

    async fn delete_task(&self, token: &str, id: &str) -> ClientResult<()> {
        log::debug!("[API] DELETE /tasks/{}", id);
        let response = self.client.delete(self.task_url(id)).bearer_auth(token).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            // The delete endpoint's body is never consulted.
            log::warn!("[API] delete {} -> {}", id, status);
            Err(ClientError::Api { status: status.as_u16(), message: DELETE_FAILED.to_string() })
        }
    }
}
