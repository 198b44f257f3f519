use crate::Role;

use serde::{Deserialize, Serialize};

/// The logged-in actor, as held by the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub category: Role,
    pub is_active: bool,
}

impl Identity {
    pub fn new(id: impl Into<String>, email: impl Into<String>, category: Role) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            category,
            is_active: true,
        }
    }
}
