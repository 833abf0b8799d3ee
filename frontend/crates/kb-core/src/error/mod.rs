use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {field} {message} {location}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error for a required field that was left empty
    #[track_caller]
    pub fn missing_field(field: &'static str) -> Self {
        CoreError::Validation {
            field,
            message: String::from("must not be empty"),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            CoreError::Validation { field, .. } => field,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
