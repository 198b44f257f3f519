pub mod document;
pub mod error;
pub mod models;
pub mod schema;

pub use document::{Document, fields};
pub use error::{CoreError, Result};
pub use models::contact_details::ContactDetails;
pub use models::identity::Identity;
pub use models::new_user::NewUser;
pub use models::role::Role;
pub use models::role_transition::RoleTransition;
pub use models::user_filter::{StatusFilter, UserFilter};
pub use models::user_record::UserRecord;
pub use schema::attribute_set::AttributeSet;
pub use schema::migration::{CURRENT_SCHEMA_VERSION, MIGRATIONS, SchemaMigration};
pub use schema::reconcile::{
    Reconciliation, SchemaGap, SchemaStatus, inspect, needs_update, reconcile_document,
};

#[cfg(test)]
mod tests;
