//! User management over the `users` collection.
//!
//! All reads and writes go through [`DocumentStore`]; role checks, schema
//! drift detection and role transitions come from `sf-core`. The repository
//! owns the rules that need more than one document: id, email and username
//! uniqueness, and the read-modify-write steps of update and reconcile.

use crate::{DbError, DocumentStore, Result as DbErrorResult, StoredDocument};

use sf_core::document::{fields, str_field};
use sf_core::schema::timestamp::timestamp_value;
use sf_core::{
    AttributeSet, Document, NewUser, Role, RoleTransition, SchemaGap, SchemaStatus, UserFilter, UserRecord,
    inspect, reconcile_document,
};

use std::sync::Arc;

use chrono::Utc;
use log::{info, warn};
use serde::Serialize;
use serde_json::Value;

pub const USERS_COLLECTION: &str = "users";

/// Drift report for one stored user document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSchemaReport {
    pub id: String,
    pub email: Option<String>,
    pub category: Option<String>,
    pub status: SchemaStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileOutcome {
    pub id: String,
    pub changed: bool,
    pub gaps: Vec<SchemaGap>,
    #[serde(skip)]
    pub document: Document,
}

#[derive(Clone)]
pub struct UserRepository {
    store: Arc<dyn DocumentStore>,
}

impl UserRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, new_user: NewUser) -> DbErrorResult<UserRecord> {
        new_user.validate()?;

        if self.store.get(USERS_COLLECTION, &new_user.id).await?.is_some() {
            return Err(DbError::field(fields::ID, "User ID already exists"));
        }
        self.ensure_email_available(new_user.email.trim(), None)
            .await?;
        if let Some(username) = new_user.username() {
            self.ensure_username_available(username, None).await?;
        }

        let id = new_user.id.clone();
        let document = new_user.into_document(Utc::now())?;
        self.store
            .set(USERS_COLLECTION, &id, document.clone())
            .await?;

        let record = UserRecord::from_document(&id, document)?;
        info!("Created {} user {}", record.category, record.id);
        Ok(record)
    }

    pub async fn find_by_id(&self, id: &str) -> DbErrorResult<UserRecord> {
        let document = self.get_document(id).await?;
        Ok(UserRecord::from_document(id, document)?)
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<UserRecord>> {
        self.find_one(&[(fields::EMAIL, Value::from(email))]).await
    }

    pub async fn find_by_username(&self, username: &str) -> DbErrorResult<Option<UserRecord>> {
        self.find_one(&[(fields::USERNAME, Value::from(username))])
            .await
    }

    pub async fn find_by_email_and_category(
        &self,
        email: &str,
        category: Role,
    ) -> DbErrorResult<Option<UserRecord>> {
        self.find_one(&[
            (fields::EMAIL, Value::from(email)),
            (fields::CATEGORY, Value::from(category.as_str())),
        ])
        .await
    }

    /// Merge `patch` over the stored record.
    ///
    /// Null and empty-string values are dropped. `id`/`userId` are never
    /// rewritten, and a category change is rejected: role changes go through
    /// [`Self::promote_to_franchise`] and [`Self::demote_to_customer`].
    /// Keys outside the role's attribute set are rejected; email and
    /// username stay unique.
    pub async fn update(&self, id: &str, patch: Document) -> DbErrorResult<UserRecord> {
        let current = self.find_by_id(id).await?;

        let mut patch: Document = patch
            .into_iter()
            .filter(|(key, value)| {
                key != fields::ID && key != fields::USER_ID && !is_blank(value)
            })
            .collect();

        if let Some(category) = patch.get(fields::CATEGORY)
            && category.as_str() != Some(current.category.as_str())
        {
            return Err(DbError::field(
                fields::CATEGORY,
                "Category changes must go through promote or demote",
            ));
        }

        let attributes = AttributeSet::for_role(current.category);
        if let Some(key) = patch.keys().find(|key| !attributes.allows(key)) {
            return Err(DbError::field(
                key.clone(),
                format!("{key} is not allowed for {} accounts", current.category),
            ));
        }

        if let Some(email) = patch.get(fields::EMAIL) {
            let email = email
                .as_str()
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .ok_or_else(|| DbError::field(fields::EMAIL, "email must be a non-empty string"))?
                .to_string();
            if email != current.email {
                self.ensure_email_available(&email, Some(id)).await?;
            }
            patch.insert(fields::EMAIL.to_string(), Value::String(email));
        }

        if let Some(username) = patch.get(fields::USERNAME) {
            let username = clean_username(username.as_str())?;
            self.ensure_username_available(&username, Some(id)).await?;
            patch.insert(fields::USERNAME.to_string(), Value::String(username));
        }

        patch.insert(fields::UPDATED_AT.to_string(), timestamp_value(Utc::now()));
        let document = self.store.update(USERS_COLLECTION, id, patch).await?;

        info!("Updated user {id}");
        Ok(UserRecord::from_document(id, document)?)
    }

    pub async fn delete(&self, id: &str) -> DbErrorResult<()> {
        self.get_document(id).await?;
        self.store.delete(USERS_COLLECTION, id).await?;
        info!("Deleted user {id}");
        Ok(())
    }

    /// Flip `isActive`. Returns the new state.
    pub async fn toggle_status(&self, id: &str) -> DbErrorResult<bool> {
        let current = self.find_by_id(id).await?;
        let is_active = !current.active();

        let mut patch = Document::new();
        patch.insert(fields::IS_ACTIVE.to_string(), Value::Bool(is_active));
        patch.insert(fields::UPDATED_AT.to_string(), timestamp_value(Utc::now()));
        self.store.update(USERS_COLLECTION, id, patch).await?;

        info!(
            "User {id} is now {}",
            if is_active { "active" } else { "inactive" }
        );
        Ok(is_active)
    }

    /// False when the user does not exist.
    pub async fn has_role(&self, id: &str, role: Role) -> DbErrorResult<bool> {
        let Some(document) = self.store.get(USERS_COLLECTION, id).await? else {
            return Ok(false);
        };
        Ok(str_field(&document, fields::CATEGORY) == Some(role.as_str()))
    }

    /// Every readable user. Documents that cannot be read as a user (e.g. an
    /// unknown category) are skipped with a warning.
    pub async fn list(&self) -> DbErrorResult<Vec<UserRecord>> {
        let documents = self.store.list(USERS_COLLECTION).await?;
        Ok(documents.into_iter().filter_map(to_record).collect())
    }

    pub async fn list_filtered(&self, filter: &UserFilter) -> DbErrorResult<Vec<UserRecord>> {
        let users = self.list().await?;
        Ok(users.into_iter().filter(|user| filter.matches(user)).collect())
    }

    /// Schema drift report for every stored document, readable or not.
    pub async fn list_with_status(&self) -> DbErrorResult<Vec<UserSchemaReport>> {
        let documents = self.store.list(USERS_COLLECTION).await?;
        Ok(documents
            .into_iter()
            .map(|StoredDocument { id, data }| UserSchemaReport {
                status: inspect(&data),
                email: str_field(&data, fields::EMAIL).map(str::to_string),
                category: str_field(&data, fields::CATEGORY).map(str::to_string),
                id,
            })
            .collect())
    }

    /// Customer to franchise. A franchise needs a unique username: `username`
    /// when given, else the one already stored.
    pub async fn promote_to_franchise(
        &self,
        id: &str,
        username: Option<&str>,
    ) -> DbErrorResult<UserRecord> {
        self.transition(id, RoleTransition::PromoteToFranchise, username)
            .await
    }

    pub async fn demote_to_customer(&self, id: &str) -> DbErrorResult<UserRecord> {
        self.transition(id, RoleTransition::DemoteToCustomer, None)
            .await
    }

    async fn transition(
        &self,
        id: &str,
        transition: RoleTransition,
        username: Option<&str>,
    ) -> DbErrorResult<UserRecord> {
        let current = self.find_by_id(id).await?;
        let target = transition.apply(current.category)?;

        let mut patch = Document::new();
        if target.requires_username() {
            let username = clean_username(username.or(current.username.as_deref()))
                .map_err(|_| {
                    DbError::field(
                        fields::USERNAME,
                        format!("A username is required to become {target}"),
                    )
                })?;
            self.ensure_username_available(&username, Some(id)).await?;
            patch.insert(fields::USERNAME.to_string(), Value::String(username));
        }
        patch.insert(
            fields::CATEGORY.to_string(),
            Value::from(target.as_str()),
        );
        patch.insert(fields::PERMISSIONS.to_string(), Value::Bool(false));
        patch.insert(fields::UPDATED_AT.to_string(), timestamp_value(Utc::now()));
        let document = self.store.update(USERS_COLLECTION, id, patch).await?;

        info!("User {id} moved from {} to {target}", current.category);
        Ok(UserRecord::from_document(id, document)?)
    }

    /// Bring one stored document up to the current schema, merging `patch`
    /// first. The document is only rewritten when something changed.
    pub async fn reconcile(
        &self,
        id: &str,
        mut patch: Document,
    ) -> DbErrorResult<ReconcileOutcome> {
        let stored = self.get_document(id).await?;

        if let Some(username) = patch.get(fields::USERNAME).filter(|v| !v.is_null()) {
            let username = clean_username(username.as_str())?;
            self.ensure_username_available(&username, Some(id)).await?;
            patch.insert(fields::USERNAME.to_string(), Value::String(username));
        }

        let reconciliation = reconcile_document(id, &stored, &patch, Utc::now());
        if reconciliation.changed {
            self.store
                .set(USERS_COLLECTION, id, reconciliation.document.clone())
                .await?;
            info!("Reconciled user {id}");
        }
        for gap in &reconciliation.gaps {
            warn!("User {id} still has schema gap {gap:?}");
        }

        Ok(ReconcileOutcome {
            id: id.to_string(),
            changed: reconciliation.changed,
            gaps: reconciliation.gaps,
            document: reconciliation.document,
        })
    }

    /// Reconcile every document flagged by [`Self::list_with_status`].
    pub async fn reconcile_stale(&self) -> DbErrorResult<Vec<ReconcileOutcome>> {
        let mut outcomes = Vec::new();
        for report in self.list_with_status().await? {
            if report.status.needs_update() {
                outcomes.push(self.reconcile(&report.id, Document::new()).await?);
            }
        }
        info!("Reconciled {} stale user document(s)", outcomes.len());
        Ok(outcomes)
    }

    /// Stamp `lastLoginAt` and `lastActiveAt` with the current time.
    pub async fn touch_login(&self, id: &str) -> DbErrorResult<()> {
        let now = timestamp_value(Utc::now());
        let mut patch = Document::new();
        patch.insert(fields::LAST_LOGIN_AT.to_string(), now.clone());
        patch.insert(fields::LAST_ACTIVE_AT.to_string(), now);
        self.store.update(USERS_COLLECTION, id, patch).await?;
        Ok(())
    }

    async fn get_document(&self, id: &str) -> DbErrorResult<Document> {
        self.store
            .get(USERS_COLLECTION, id)
            .await?
            .ok_or_else(|| DbError::not_found(USERS_COLLECTION, id))
    }

    async fn find_one(&self, conditions: &[(&str, Value)]) -> DbErrorResult<Option<UserRecord>> {
        let documents = self.store.query_eq(USERS_COLLECTION, conditions).await?;
        Ok(documents.into_iter().find_map(to_record))
    }

    async fn ensure_email_available(
        &self,
        email: &str,
        except_id: Option<&str>,
    ) -> DbErrorResult<()> {
        let holders = self
            .store
            .query_eq(USERS_COLLECTION, &[(fields::EMAIL, Value::from(email))])
            .await?;

        if holders.iter().any(|doc| Some(doc.id.as_str()) != except_id) {
            return Err(DbError::field(
                fields::EMAIL,
                format!("Email '{email}' is already registered"),
            ));
        }
        Ok(())
    }

    async fn ensure_username_available(
        &self,
        username: &str,
        except_id: Option<&str>,
    ) -> DbErrorResult<()> {
        let holders = self
            .store
            .query_eq(USERS_COLLECTION, &[(fields::USERNAME, Value::from(username))])
            .await?;

        if holders.iter().any(|doc| Some(doc.id.as_str()) != except_id) {
            return Err(DbError::field(
                fields::USERNAME,
                format!("Username '{username}' is already taken"),
            ));
        }
        Ok(())
    }
}

fn to_record(StoredDocument { id, data }: StoredDocument) -> Option<UserRecord> {
    match UserRecord::from_document(&id, data) {
        Ok(record) => Some(record),
        Err(e) => {
            warn!("Skipping unreadable user document {id}: {e}");
            None
        }
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

#[track_caller]
fn clean_username(value: Option<&str>) -> DbErrorResult<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| DbError::field(fields::USERNAME, "username must be a non-empty string"))
}
