//! Board view state and the event loop that feeds it.
//!
//! All mutation happens in [`ProjectBoard::apply`], called by whoever drives
//! the board once an API call has completed. Create requests run as spawned
//! tasks and report back over an unbounded channel, so several may be in
//! flight at once; results are appended in the order they complete.

use crate::Notifier;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use kb_client::{ClientResult, Operation, ProjectGateway};
use kb_core::{Project, ProjectInput};
use log::{debug, error, info, warn};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// What the view currently believes the server holds.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardState {
    pub loading: bool,
    pub projects: Vec<Project>,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            loading: true,
            projects: Vec::new(),
        }
    }
}

/// A completed API call, waiting to be applied to the board.
#[derive(Debug)]
pub enum BoardEvent {
    Loaded(ClientResult<Vec<Project>>),
    Created(ClientResult<Project>),
    /// A create task ended without a result (it panicked or was cancelled)
    CreateAborted,
}

/// Cloneable handle for starting create requests on behalf of a board.
#[derive(Clone)]
pub struct Submitter {
    gateway: Arc<dyn ProjectGateway>,
    events: UnboundedSender<BoardEvent>,
    pending: Arc<AtomicUsize>,
}

impl Submitter {
    /// Start a create request without waiting for it. The outcome arrives at
    /// the board as a [`BoardEvent::Created`].
    pub fn submit(&self, input: ProjectInput) {
        self.pending.fetch_add(1, Ordering::SeqCst);

        let gateway = Arc::clone(&self.gateway);
        let report = CreateReport::new(self.events.clone());

        tokio::spawn(async move {
            let result = gateway.create(&input).await;
            report.send(BoardEvent::Created(result));
        });
    }
}

/// Sends exactly one event per submitted create. Dropping it unsent reports
/// [`BoardEvent::CreateAborted`], so the pending count always drains.
struct CreateReport {
    events: Option<UnboundedSender<BoardEvent>>,
}

impl CreateReport {
    fn new(events: UnboundedSender<BoardEvent>) -> Self {
        Self {
            events: Some(events),
        }
    }

    fn send(mut self, event: BoardEvent) {
        if let Some(events) = self.events.take() {
            deliver(&events, event);
        }
    }
}

impl Drop for CreateReport {
    fn drop(&mut self) {
        if let Some(events) = self.events.take() {
            deliver(&events, BoardEvent::CreateAborted);
        }
    }
}

fn deliver(events: &UnboundedSender<BoardEvent>, event: BoardEvent) {
    if events.send(event).is_err() {
        debug!("Board dropped before create request completed");
    }
}

pub struct ProjectBoard<N: Notifier> {
    state: BoardState,
    gateway: Arc<dyn ProjectGateway>,
    notifier: N,
    events_tx: UnboundedSender<BoardEvent>,
    events_rx: UnboundedReceiver<BoardEvent>,
    pending: Arc<AtomicUsize>,
    load_started: bool,
}

impl<N: Notifier> ProjectBoard<N> {
    pub fn new(gateway: Arc<dyn ProjectGateway>, notifier: N) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        Self {
            state: BoardState::default(),
            gateway,
            notifier,
            events_tx,
            events_rx,
            pending: Arc::new(AtomicUsize::new(0)),
            load_started: false,
        }
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn projects(&self) -> &[Project] {
        &self.state.projects
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Create requests submitted but not yet applied
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }

    /// Startup fetch. Only the first call reaches the API.
    pub async fn load(&mut self) {
        if self.load_started {
            warn!("Project list already requested, ignoring repeated load");
            return;
        }
        self.load_started = true;

        let result = self.gateway.list().await;
        self.apply(BoardEvent::Loaded(result));
    }

    pub fn submitter(&self) -> Submitter {
        Submitter {
            gateway: Arc::clone(&self.gateway),
            events: self.events_tx.clone(),
            pending: Arc::clone(&self.pending),
        }
    }

    /// Wait for the next completed request. The board keeps a sender of its
    /// own, so this only resolves when there is something to apply.
    pub async fn next_event(&mut self) -> Option<BoardEvent> {
        self.events_rx.recv().await
    }

    pub fn apply(&mut self, event: BoardEvent) {
        match event {
            BoardEvent::Loaded(Ok(projects)) => {
                info!("Loaded {} projects", projects.len());
                self.state.projects = projects;
                self.state.loading = false;
            }
            BoardEvent::Loaded(Err(e)) => {
                error!("Error loading projects: {}", e);
                self.state.loading = false;
            }
            BoardEvent::Created(result) => {
                self.finish_create();

                match result {
                    Ok(project) => {
                        info!("Created project {} ({})", project.id, project.name);
                        self.state.projects.push(project);
                    }
                    Err(e) => {
                        error!("Error creating project: {}", e);
                        self.notifier.alert(e.failure_message());
                    }
                }
            }
            BoardEvent::CreateAborted => {
                self.finish_create();
                error!("Create request ended without a response");
                self.notifier.alert(Operation::Create.failure_message());
            }
        }
    }

    // Events applied without a matching submit leave the counter at zero
    fn finish_create(&self) {
        let _ = self
            .pending
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
    }

    /// Apply events until every submitted create has been accounted for.
    pub async fn settle(&mut self) {
        while self.pending() > 0 {
            match self.events_rx.recv().await {
                Some(event) => self.apply(event),
                None => break,
            }
        }
    }

    /// Submit and wait for this (and any other in-flight) create to land.
    pub async fn create(&mut self, input: ProjectInput) {
        self.submitter().submit(input);
        self.settle().await;
    }
}
