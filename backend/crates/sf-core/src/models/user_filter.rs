use crate::{CoreError, Result as CoreErrorResult, Role, UserRecord};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl FromStr for StatusFilter {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(CoreError::Validation {
                field: Some("status".to_string()),
                message: format!("unknown status filter '{s}', expected all|active|inactive"),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

/// Console list filter: free-text search plus category and status facets.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub search: Option<String>,
    pub category: Option<Role>,
    pub status: StatusFilter,
}

impl UserFilter {
    pub fn matches(&self, user: &UserRecord) -> bool {
        self.matches_search(user) && self.matches_category(user) && self.matches_status(user)
    }

    /// Case-insensitive substring match over names, email and phone.
    fn matches_search(&self, user: &UserRecord) -> bool {
        let Some(needle) = self.search.as_deref().filter(|s| !s.is_empty()) else {
            return true;
        };
        let needle = needle.to_lowercase();

        [
            Some(user.first_name.as_str()),
            Some(user.last_name.as_str()),
            Some(user.email.as_str()),
            user.phone(),
        ]
        .into_iter()
        .flatten()
        .any(|haystack| haystack.to_lowercase().contains(&needle))
    }

    fn matches_category(&self, user: &UserRecord) -> bool {
        self.category.is_none_or(|category| user.category == category)
    }

    fn matches_status(&self, user: &UserRecord) -> bool {
        match self.status {
            StatusFilter::All => true,
            StatusFilter::Active => user.active(),
            StatusFilter::Inactive => !user.active(),
        }
    }
}
