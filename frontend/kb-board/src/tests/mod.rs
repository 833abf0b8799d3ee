
use crate::Notifier;

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use kb_client::{ClientError, ClientResult, Operation, ProjectGateway};
use kb_core::{Project, ProjectInput};

/// Canned gateway. `Err(status)` entries become API errors with that status.
#[derive(Default)]
pub(crate) struct FakeGateway {
    list_response: Mutex<Option<Result<Vec<Project>, u16>>>,
    create_responses: Mutex<VecDeque<Result<Project, u16>>>,
    created: Mutex<Vec<ProjectInput>>,
    list_calls: AtomicUsize,
}

impl FakeGateway {
    pub(crate) fn listing(projects: Vec<Project>) -> Self {
        let gateway = Self::default();
        *gateway.list_response.lock().unwrap() = Some(Ok(projects));
        gateway
    }

    pub(crate) fn failing_list(status: u16) -> Self {
        let gateway = Self::default();
        *gateway.list_response.lock().unwrap() = Some(Err(status));
        gateway
    }

    pub(crate) fn then_create(self, response: Result<Project, u16>) -> Self {
        self.create_responses.lock().unwrap().push_back(response);
        self
    }

    pub(crate) fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn created(&self) -> Vec<ProjectInput> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProjectGateway for FakeGateway {
    async fn list(&self) -> ClientResult<Vec<Project>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        match self.list_response.lock().unwrap().clone() {
            Some(Ok(projects)) => Ok(projects),
            Some(Err(status)) => Err(ClientError::api(Operation::List, status, None)),
            None => Ok(Vec::new()),
        }
    }

    async fn create(&self, input: &ProjectInput) -> ClientResult<Project> {
        self.created.lock().unwrap().push(input.clone());
        match self.create_responses.lock().unwrap().pop_front() {
            Some(Ok(project)) => Ok(project),
            Some(Err(status)) => Err(ClientError::api(Operation::Create, status, None)),
            None => Err(ClientError::api(Operation::Create, 500, None)),
        }
    }
}

/// Gateway whose create never returns a result.
pub(crate) struct PanickingGateway;

#[async_trait]
impl ProjectGateway for PanickingGateway {
    async fn list(&self) -> ClientResult<Vec<Project>> {
        Ok(vec![Project::new(1, "A", "d")])
    }

    async fn create(&self, _input: &ProjectInput) -> ClientResult<Project> {
        panic!("gateway crashed mid-request");
    }
}

#[derive(Default)]
pub(crate) struct RecordingNotifier {
    alerts: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub(crate) fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}
