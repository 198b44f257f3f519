use sf_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User not found: {email} {location}")]
    NotFound {
        email: String,
        location: ErrorLocation,
    },

    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Session storage error: {message} {location}")]
    Storage {
        message: String,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {source} {location}")]
    Password {
        #[source]
        source: bcrypt::BcryptError,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Db(#[from] DbError),
}

impl AuthError {
    #[track_caller]
    pub fn not_found<E: Into<String>>(email: E) -> Self {
        Self::NotFound {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn storage<M: Into<String>>(message: M) -> Self {
        Self::Storage {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Stable code for machine-readable output
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::Storage { .. } => "SESSION_STORAGE",
            Self::Password { .. } => "PASSWORD_HASH",
            Self::Db(e) => e.error_code(),
        }
    }
}

impl From<bcrypt::BcryptError> for AuthError {
    #[track_caller]
    fn from(source: bcrypt::BcryptError) -> Self {
        Self::Password {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
