mod session_context;

use crate::{AuthError, Result as AuthErrorResult, SessionStorage};

/// Storage whose every access fails
pub(crate) struct FailingStorage;

impl SessionStorage for FailingStorage {
    fn get(&self, _key: &str) -> AuthErrorResult<Option<String>> {
        Err(AuthError::storage("storage unavailable"))
    }

    fn set(&self, _key: &str, _value: &str) -> AuthErrorResult<()> {
        Err(AuthError::storage("storage unavailable"))
    }

    fn remove(&self, _key: &str) -> AuthErrorResult<()> {
        Err(AuthError::storage("storage unavailable"))
    }

    fn clear(&self) -> AuthErrorResult<()> {
        Err(AuthError::storage("storage unavailable"))
    }
}
