//! Per-navigation access decision.
//!
//! [`evaluate`] is pure; performing the redirect is the caller's job via
//! [`GuardDecision::apply`]. Every denial produces exactly one navigation,
//! `Allow` and `Pending` produce none.

use crate::{Area, Navigator, Redirect, Route};

use sf_core::{Identity, Role};

use log::warn;
use serde::Serialize;

pub const ACCESS_DENIED_MESSAGE: &str = "Access denied: Insufficient permissions";

/// Roles a protected route admits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequiredRole {
    /// Any authenticated identity.
    Any,
    One(Role),
    AnyOf(Vec<Role>),
}

impl RequiredRole {
    pub fn permits(&self, role: Role) -> bool {
        match self {
            Self::Any => true,
            Self::One(required) => *required == role,
            Self::AnyOf(roles) => roles.contains(&role),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum GuardDecision {
    Allow,
    /// Session not restored yet; render nothing and wait.
    Pending,
    DenyRedirect {
        destination: Route,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Perform the navigation a denial calls for.
    pub fn apply(&self, navigator: &mut dyn Navigator) {
        if let Self::DenyRedirect {
            destination,
            message,
        } = self
        {
            navigator.navigate(Redirect {
                destination: destination.clone(),
                message: message.clone(),
                email: None,
            });
        }
    }
}

pub fn evaluate(
    identity: Option<&Identity>,
    loading: bool,
    required: &RequiredRole,
    area: Area,
) -> GuardDecision {
    if loading {
        return GuardDecision::Pending;
    }

    let Some(identity) = identity else {
        return GuardDecision::DenyRedirect {
            destination: Route::login_for(area),
            message: None,
        };
    };

    if !required.permits(identity.category) {
        warn!(
            "Denied {} ({}) for required role {required:?}",
            identity.email, identity.category
        );
        return GuardDecision::DenyRedirect {
            destination: Route::landing_for(identity.category),
            message: Some(ACCESS_DENIED_MESSAGE.to_string()),
        };
    }

    GuardDecision::Allow
}

/// Guard a concrete route. Public routes always allow.
pub fn evaluate_route(identity: Option<&Identity>, loading: bool, route: &Route) -> GuardDecision {
    match route.required_role() {
        None => GuardDecision::Allow,
        Some(required) => evaluate(identity, loading, &required, route.area()),
    }
}
