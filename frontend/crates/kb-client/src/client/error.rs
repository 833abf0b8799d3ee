use crate::Operation;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum ClientError {
    /// The server could not be reached, or the body could not be read
    #[error("{}: network error: {message} {location}", .operation.failure_message())]
    Network {
        operation: Operation,
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status
    #[error("{}: HTTP {status}: {} {location}", .operation.failure_message(), .detail.as_deref().unwrap_or("no detail"))]
    Api {
        operation: Operation,
        status: u16,
        detail: Option<String>,
        location: ErrorLocation,
    },

    /// 2xx response whose body is not the expected JSON shape
    #[error("{}: invalid response body: {message} {location}", .operation.failure_message())]
    Decode {
        operation: Operation,
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn network(operation: Operation, err: reqwest::Error) -> Self {
        ClientError::Network {
            operation,
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api(operation: Operation, status: u16, detail: Option<String>) -> Self {
        ClientError::Api {
            operation,
            status,
            detail,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn decode(operation: Operation, err: serde_json::Error) -> Self {
        ClientError::Decode {
            operation,
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            Self::Network { operation, .. }
            | Self::Api { operation, .. }
            | Self::Decode { operation, .. } => *operation,
        }
    }

    /// The static message shown to users for this failure
    pub fn failure_message(&self) -> &'static str {
        self.operation().failure_message()
    }

    /// HTTP status, for API errors
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
