//! The authenticated identity as persisted in session storage.

use crate::{Result as AuthErrorResult, SessionStorage};

use sf_core::{Identity, Role};

use std::str::FromStr;
use std::sync::Arc;

use log::{error, warn};

pub mod keys {
    pub const SESSION_EMAIL: &str = "sessionEmail";
    pub const USER_ROLE: &str = "userRole";
    pub const USER_ID: &str = "userId";
    /// Duplicate of `userRole` still read by older pages.
    pub const LEGACY_CATEGORY: &str = "category";
}

#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// Identity from the three session keys, or `None`.
    ///
    /// Never fails: a storage error is logged and treated as no session, and
    /// a role outside the known set counts as a corrupt session.
    pub fn restore(&self) -> Option<Identity> {
        let read = || -> AuthErrorResult<Option<(String, String, String)>> {
            let email = self.storage.get(keys::SESSION_EMAIL)?;
            let role = self.storage.get(keys::USER_ROLE)?;
            let id = self.storage.get(keys::USER_ID)?;
            Ok(match (email, role, id) {
                (Some(email), Some(role), Some(id))
                    if !email.is_empty() && !role.is_empty() && !id.is_empty() =>
                {
                    Some((email, role, id))
                }
                _ => None,
            })
        };

        let (email, role, id) = match read() {
            Ok(Some(values)) => values,
            Ok(None) => return None,
            Err(e) => {
                error!("Session storage error: {e}");
                return None;
            }
        };

        match Role::from_str(&role) {
            Ok(category) => Some(Identity::new(id, email, category)),
            Err(_) => {
                warn!("Ignoring session with unknown role '{role}'");
                None
            }
        }
    }

    pub fn persist(&self, identity: &Identity) -> AuthErrorResult<()> {
        let role = identity.category.as_str();
        self.storage.set(keys::USER_ROLE, role)?;
        self.storage.set(keys::SESSION_EMAIL, &identity.email)?;
        self.storage.set(keys::USER_ID, &identity.id)?;
        self.storage.set(keys::LEGACY_CATEGORY, role)?;
        Ok(())
    }

    pub fn clear(&self) -> AuthErrorResult<()> {
        self.storage.clear()
    }
}
