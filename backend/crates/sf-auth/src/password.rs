use crate::Result as AuthErrorResult;

use bcrypt::{BcryptError, hash, verify};
use log::warn;

/// bcrypt hashing with an opt-in fallback for legacy plaintext records.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
    allow_plaintext: bool,
}

impl PasswordHasher {
    pub fn new(cost: u32, allow_plaintext: bool) -> Self {
        Self {
            cost,
            allow_plaintext,
        }
    }

    pub fn hash(&self, password: &str) -> AuthErrorResult<String> {
        Ok(hash(password, self.cost)?)
    }

    pub fn verify(&self, password: &str, stored: &str) -> AuthErrorResult<bool> {
        if is_bcrypt_hash(stored) {
            return match verify(password, stored) {
                Ok(matches) => Ok(matches),
                Err(
                    e @ (BcryptError::InvalidHash(_)
                    | BcryptError::InvalidPrefix(_)
                    | BcryptError::InvalidCost(_)
                    | BcryptError::InvalidSaltLen(_)
                    | BcryptError::InvalidBase64(_)),
                ) => {
                    warn!("Stored password hash is malformed: {e}");
                    Ok(false)
                }
                Err(e) => Err(e.into()),
            };
        }

        if !self.allow_plaintext {
            warn!("Stored password is not a bcrypt hash and plaintext passwords are disabled");
            return Ok(false);
        }

        warn!("Comparing against a legacy plaintext password");
        Ok(!stored.is_empty() && password == stored)
    }
}

fn is_bcrypt_hash(stored: &str) -> bool {
    ["$2a$", "$2b$", "$2x$", "$2y$"]
        .iter()
        .any(|prefix| stored.starts_with(prefix))
}
