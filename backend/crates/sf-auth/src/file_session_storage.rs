//! Session storage persisted as a flat JSON object on disk.
//!
//! Every operation re-reads the file, so separate processes sharing the
//! file see each other's writes (last writer wins). A missing file is an
//! empty session.

use crate::{AuthError, Result as AuthErrorResult, SessionStorage};

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

type Entries = BTreeMap<String, String>;

#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    path: PathBuf,
}

impl FileSessionStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> AuthErrorResult<Entries> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => {
                return Err(AuthError::storage(format!(
                    "failed to read {}: {e}",
                    self.path.display()
                )));
            }
        };

        serde_json::from_str(&contents).map_err(|e| {
            AuthError::storage(format!("failed to parse {}: {e}", self.path.display()))
        })
    }

    fn write(&self, entries: &Entries) -> AuthErrorResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AuthError::storage(format!("failed to create {}: {e}", parent.display()))
            })?;
        }

        let contents = serde_json::to_string_pretty(entries)
            .map_err(|e| AuthError::storage(format!("failed to encode session: {e}")))?;

        std::fs::write(&self.path, contents).map_err(|e| {
            AuthError::storage(format!("failed to write {}: {e}", self.path.display()))
        })
    }
}

impl SessionStorage for FileSessionStorage {
    fn get(&self, key: &str) -> AuthErrorResult<Option<String>> {
        Ok(self.read()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> AuthErrorResult<()> {
        let mut entries = self.read()?;
        entries.insert(key.to_string(), value.to_string());
        self.write(&entries)
    }

    fn remove(&self, key: &str) -> AuthErrorResult<()> {
        let mut entries = self.read()?;
        if entries.remove(key).is_some() {
            self.write(&entries)?;
        }
        Ok(())
    }

    fn clear(&self) -> AuthErrorResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AuthError::storage(format!(
                "failed to remove {}: {e}",
                self.path.display()
            ))),
        }
    }
}
