use crate::ClientResult;

use async_trait::async_trait;
use kb_core::{Project, ProjectInput};

/// The two calls the board view makes against the project API.
///
/// [`crate::Client`] is the HTTP implementation; tests substitute their own.
#[async_trait]
pub trait ProjectGateway: Send + Sync {
    /// Fetch every project, in server order.
    async fn list(&self) -> ClientResult<Vec<Project>>;

    /// Create a project and return the stored record.
    async fn create(&self, input: &ProjectInput) -> ClientResult<Project>;
}
