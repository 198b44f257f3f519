use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// User category. Stored verbatim in the `category` field of user documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Customer,
    Franchise,
    /// Privileged back-office operator
    Webmaster,
    /// Non-production accounts exercising customer-like flows
    Test,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Customer, Role::Franchise, Role::Webmaster, Role::Test];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Franchise => "franchise",
            Self::Webmaster => "webmaster",
            Self::Test => "test",
        }
    }

    /// Only the webmaster may use the privileged login path.
    pub fn is_privileged(&self) -> bool {
        matches!(self, Self::Webmaster)
    }

    /// Every role except customer must carry a unique username.
    pub fn requires_username(&self) -> bool {
        !matches!(self, Self::Customer)
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "customer" => Ok(Self::Customer),
            "franchise" => Ok(Self::Franchise),
            "webmaster" => Ok(Self::Webmaster),
            "test" => Ok(Self::Test),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
