//! Client-side route table.
//!
//! | route              | path                                               | access                         |
//! |--------------------|----------------------------------------------------|--------------------------------|
//! | Home               | `/`                                                | public                         |
//! | Catalog            | `/products`                                        | public                         |
//! | OrderTracking      | `/order/:customerUserId/:orderCodeWithFranchise`   | public                         |
//! | Login              | `/login`                                           | public                         |
//! | AdminLogin         | `/admin/login`                                     | public (admin area)            |
//! | CustomerDashboard  | `/customer-dashboard`                              | customer                       |
//! | FranchiseDashboard | `/franchise-dashboard`                             | franchise                      |
//! | Checkout           | `/checkout`                                        | customer, webmaster, test      |
//! | AdminConsole       | `/admin/users`                                     | webmaster (admin area)         |
//!
//! Any other path resolves to Home.

use crate::RequiredRole;

use sf_core::Role;

use std::fmt;

use serde::{Serialize, Serializer};

/// Which login page an unauthenticated visitor is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Area {
    General,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Catalog,
    OrderTracking {
        customer_user_id: String,
        order_code_with_franchise: String,
    },
    Login,
    AdminLogin,
    CustomerDashboard,
    FranchiseDashboard,
    Checkout,
    AdminConsole,
}

impl Route {
    /// Resolve a path. Query strings, fragments and trailing slashes are
    /// ignored; unknown paths fall through to Home.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["products"] => Self::Catalog,
            ["order", customer, code] => Self::OrderTracking {
                customer_user_id: (*customer).to_string(),
                order_code_with_franchise: (*code).to_string(),
            },
            ["login"] => Self::Login,
            ["admin", "login"] => Self::AdminLogin,
            ["customer-dashboard"] => Self::CustomerDashboard,
            ["franchise-dashboard"] => Self::FranchiseDashboard,
            ["checkout"] => Self::Checkout,
            ["admin", "users"] => Self::AdminConsole,
            _ => Self::Home,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Catalog => "/products".to_string(),
            Self::OrderTracking {
                customer_user_id,
                order_code_with_franchise,
            } => format!("/order/{customer_user_id}/{order_code_with_franchise}"),
            Self::Login => "/login".to_string(),
            Self::AdminLogin => "/admin/login".to_string(),
            Self::CustomerDashboard => "/customer-dashboard".to_string(),
            Self::FranchiseDashboard => "/franchise-dashboard".to_string(),
            Self::Checkout => "/checkout".to_string(),
            Self::AdminConsole => "/admin/users".to_string(),
        }
    }

    /// `None` for public routes.
    pub fn required_role(&self) -> Option<RequiredRole> {
        match self {
            Self::Home
            | Self::Catalog
            | Self::OrderTracking { .. }
            | Self::Login
            | Self::AdminLogin => None,
            Self::CustomerDashboard => Some(RequiredRole::One(Role::Customer)),
            Self::FranchiseDashboard => Some(RequiredRole::One(Role::Franchise)),
            Self::Checkout => Some(RequiredRole::AnyOf(vec![
                Role::Customer,
                Role::Webmaster,
                Role::Test,
            ])),
            Self::AdminConsole => Some(RequiredRole::One(Role::Webmaster)),
        }
    }

    pub fn area(&self) -> Area {
        match self {
            Self::AdminLogin | Self::AdminConsole => Area::Admin,
            _ => Area::General,
        }
    }

    /// Where a freshly authenticated identity of `role` lands.
    pub fn landing_for(role: Role) -> Self {
        match role {
            Role::Customer => Self::CustomerDashboard,
            Role::Franchise => Self::FranchiseDashboard,
            Role::Webmaster => Self::AdminConsole,
            Role::Test => Self::Home,
        }
    }

    pub fn login_for(area: Area) -> Self {
        match area {
            Area::General => Self::Login,
            Area::Admin => Self::AdminLogin,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
