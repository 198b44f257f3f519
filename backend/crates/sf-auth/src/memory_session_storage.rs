use crate::{AuthError, Result as AuthErrorResult, SessionStorage};

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> AuthErrorResult<MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| AuthError::storage("session storage lock poisoned"))
    }
}

impl SessionStorage for MemorySessionStorage {
    fn get(&self, key: &str) -> AuthErrorResult<Option<String>> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AuthErrorResult<()> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AuthErrorResult<()> {
        self.entries()?.remove(key);
        Ok(())
    }

    fn clear(&self) -> AuthErrorResult<()> {
        self.entries()?.clear();
        Ok(())
    }
}
