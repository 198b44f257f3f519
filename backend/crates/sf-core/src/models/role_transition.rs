use crate::{CoreError, Result as CoreErrorResult, Role};

use std::panic::Location;

use error_location::ErrorLocation;

/// Guarded category changes available from the back-office console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleTransition {
    PromoteToFranchise,
    DemoteToCustomer,
}

impl RoleTransition {
    pub fn source(&self) -> Role {
        match self {
            Self::PromoteToFranchise => Role::Customer,
            Self::DemoteToCustomer => Role::Franchise,
        }
    }

    pub fn target(&self) -> Role {
        match self {
            Self::PromoteToFranchise => Role::Franchise,
            Self::DemoteToCustomer => Role::Customer,
        }
    }

    /// Target role if `current` is the one this transition starts from.
    #[track_caller]
    pub fn apply(&self, current: Role) -> CoreErrorResult<Role> {
        if current != self.source() {
            let message = match self {
                Self::PromoteToFranchise => "Only customers can be upgraded to franchise",
                Self::DemoteToCustomer => "Only franchise users can be reverted to customer",
            };
            return Err(CoreError::InvalidTransition {
                current,
                message: message.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(self.target())
    }
}
