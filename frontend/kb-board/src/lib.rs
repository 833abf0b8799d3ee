//! kb-board
//!
//! The project board view: in-memory store, creation form, terminal
//! renderer and the interactive session that ties them to the API client.

pub mod board;
pub mod error;
pub mod form;
pub mod logger;
pub mod notifier;
pub mod render;
pub mod session;

#[cfg(test)]
mod tests;

pub use board::{BoardEvent, BoardState, ProjectBoard, Submitter};
pub use error::{BoardError, Result as BoardResult};
pub use form::ProjectForm;
pub use notifier::{Notifier, TerminalNotifier};
pub use render::render;
