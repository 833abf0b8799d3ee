pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::project::Project;
pub use models::project_input::ProjectInput;
