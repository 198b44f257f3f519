use sf_auth::{AuthError, Route};
use sf_config::ConfigError;
use sf_core::CoreError;
use sf_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Db(#[from] DbError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("{message} (redirect to {destination}) {location}")]
    AccessDenied {
        destination: Route,
        message: String,
        location: ErrorLocation,
    },

    #[error("Operation cancelled {location}")]
    Cancelled { location: ErrorLocation },

    #[error("IO error: {message} {location}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("JSON error: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn access_denied<M: Into<String>>(destination: Route, message: M) -> Self {
        Self::AccessDenied {
            destination,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn cancelled() -> Self {
        Self::Cancelled {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io<M: Into<String>>(message: M, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger<M: Into<String>>(message: M) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
