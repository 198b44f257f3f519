use crate::Role;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        field: Option<String>,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid role transition: {message} (current role: {current}) {location}")]
    InvalidTransition {
        current: Role,
        message: String,
        location: ErrorLocation,
    },

    #[error("Document serialization error: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Validation failure tied to a specific document field
    #[track_caller]
    pub fn field<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        CoreError::Validation {
            field: Some(field.into()),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Validation failure not tied to a single field
    #[track_caller]
    pub fn validation<M: Into<String>>(message: M) -> Self {
        CoreError::Validation {
            field: None,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
