use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ALLOW_PLAINTEXT_PASSWORDS, DEFAULT_BCRYPT_COST,
    MAX_BCRYPT_COST, MIN_BCRYPT_COST,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// bcrypt work factor for newly hashed passwords
    pub bcrypt_cost: u32,
    /// Accept stored passwords that are not bcrypt hashes (legacy imports).
    pub allow_plaintext_passwords: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            allow_plaintext_passwords: DEFAULT_ALLOW_PLAINTEXT_PASSWORDS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::auth(format!(
                "auth.bcrypt_cost must be {}-{}, got {}",
                MIN_BCRYPT_COST, MAX_BCRYPT_COST, self.bcrypt_cost
            )));
        }

        Ok(())
    }
}
