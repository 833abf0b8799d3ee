use crate::{ClientError, ClientResult, Operation, PROJECTS_PATH, ProjectGateway};

use async_trait::async_trait;
use kb_config::ApiConfig;
use kb_core::{Project, ProjectInput};
use log::debug;
use reqwest::{Client as ReqwestClient, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP client for the project REST API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "http://127.0.0.1:8000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.base_url.trim())
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Send the request, reject non-2xx statuses, and decode the body as `T`.
    async fn execute<T: DeserializeOwned>(
        &self,
        operation: Operation,
        req: reqwest::RequestBuilder,
    ) -> ClientResult<T> {
        let response = req
            .send()
            .await
            .map_err(|e| ClientError::network(operation, e))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::network(operation, e))?;

        debug!("{} {} -> {}", operation, self.base_url, status);

        if !status.is_success() {
            return Err(ClientError::api(
                operation,
                status.as_u16(),
                error_detail(&body),
            ));
        }

        serde_json::from_str(&body).map_err(|e| ClientError::decode(operation, e))
    }

    // =========================================================================
    // Project Operations
    // =========================================================================

    /// List all projects
    pub async fn list_projects(&self) -> ClientResult<Vec<Project>> {
        let req = self.request(Method::GET, PROJECTS_PATH);
        self.execute(Operation::List, req).await
    }

    /// Create a new project
    pub async fn create_project(&self, input: &ProjectInput) -> ClientResult<Project> {
        let req = self.request(Method::POST, PROJECTS_PATH).json(input);
        self.execute(Operation::Create, req).await
    }

    /// Get a project by ID
    pub async fn get_project(&self, id: i64) -> ClientResult<Project> {
        let req = self.request(Method::GET, &format!("{}{}", PROJECTS_PATH, id));
        self.execute(Operation::Get, req).await
    }
}

#[async_trait]
impl ProjectGateway for Client {
    async fn list(&self) -> ClientResult<Vec<Project>> {
        self.list_projects().await
    }

    async fn create(&self, input: &ProjectInput) -> ClientResult<Project> {
        self.create_project(input).await
    }
}

/// Pull a human-readable message out of an error body.
///
/// The API reports `{"detail": "..."}` for business errors and
/// `{"detail": [{"msg": "...", ...}]}` for request validation errors.
pub(crate) fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;

    match value.get("detail")? {
        Value::String(message) => Some(message.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();

            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}
