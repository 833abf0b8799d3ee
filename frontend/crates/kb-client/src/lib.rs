//! kb-client
//!
//! HTTP gateway to the project API, plus the [`ProjectGateway`] seam the
//! board view is written against.

pub(crate) mod client;
pub(crate) mod gateway;

#[cfg(test)]
mod tests;

pub use client::{Client, ClientError, ClientResult, Operation};
pub use gateway::ProjectGateway;

/// Collection endpoint, relative to the base URL
pub const PROJECTS_PATH: &str = "/projects/";
