//! Payload for creating a project.

use crate::{CoreError, CoreResult};

use serde::{Deserialize, Serialize};

/// Fields collected by the creation form and sent to the API.
///
/// Only exists for the duration of a submission; the server responds with a
/// full [`crate::Project`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInput {
    pub name: String,
    pub description: String,
}

impl ProjectInput {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Presence check on both fields. Whitespace counts as content.
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.is_empty() {
            return Err(CoreError::missing_field("name"));
        }
        if self.description.is_empty() {
            return Err(CoreError::missing_field("description"));
        }
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.description.is_empty()
    }
}
