use std::panic::Location;

use error_location::ErrorLocation;
use kb_client::ClientError;
use kb_config::ConfigError;
use kb_core::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Invalid project: {source}")]
    Input {
        #[source]
        source: CoreError,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error: {source} {location}")]
    Io {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to serialize output: {source} {location}")]
    Output {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl BoardError {
    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for BoardError {
    fn from(source: CoreError) -> Self {
        Self::Input { source }
    }
}

impl From<std::io::Error> for BoardError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for BoardError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Output {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;
