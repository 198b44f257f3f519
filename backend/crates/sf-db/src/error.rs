use sf_core::{CoreError, Role};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Document not found: {collection}/{id} {location}")]
    NotFound {
        collection: String,
        id: String,
        location: ErrorLocation,
    },

    #[error("Validation error: {message} {location}")]
    Validation {
        field: Option<String>,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid role transition: {message} (current role: {current}) {location}")]
    InvalidTransition {
        current: Role,
        message: String,
        location: ErrorLocation,
    },

    #[error("Document store transport error: {source} {location}")]
    Transport {
        #[source]
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Corrupt document {collection}/{id}: {message} {location}")]
    Corrupt {
        collection: String,
        id: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub fn not_found(collection: &str, id: &str) -> Self {
        Self::NotFound {
            collection: collection.to_string(),
            id: id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn field<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self::Validation {
            field: Some(field.into()),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation<M: Into<String>>(message: M) -> Self {
        Self::Validation {
            field: None,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn corrupt<M: Into<String>>(collection: &str, id: &str, message: M) -> Self {
        Self::Corrupt {
            collection: collection.to_string(),
            id: id.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl DbError {
    /// Stable code for machine-readable output
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation { .. } => "VALIDATION",
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::Transport { .. } => "TRANSPORT",
            Self::Corrupt { .. } => "CORRUPT_DOCUMENT",
            Self::Initialization { .. } | Self::Migration { .. } => "STORE_INITIALIZATION",
        }
    }

    pub fn field_name(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Transport {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    #[track_caller]
    fn from(source: sqlx::migrate::MigrateError) -> Self {
        Self::Migration {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for DbError {
    #[track_caller]
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation {
                field,
                message,
                location,
            } => Self::Validation {
                field,
                message,
                location,
            },
            CoreError::InvalidRole { value, location } => Self::Validation {
                field: Some("category".to_string()),
                message: format!("Invalid role: {value}"),
                location,
            },
            CoreError::InvalidTransition {
                current,
                message,
                location,
            } => Self::InvalidTransition {
                current,
                message,
                location,
            },
            CoreError::Serialization { source, location } => Self::Validation {
                field: None,
                message: format!("Document serialization error: {source}"),
                location,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
