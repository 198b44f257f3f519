//! Command dispatch for the `sf` binary.
//!
//! A `Console` owns one session plus the user repository it acts on. Every
//! `users` subcommand is gated by the admin console route, exactly as the
//! back-office page is.

use crate::commands::Commands;
use crate::user_commands::{ContactArgs, UserCommands};
use crate::{CliError, Confirmer, Result as CliErrorResult};

use sf_auth::{
    Authenticator, FileSessionStorage, GuardDecision, PasswordHasher, RecordingNavigator, Route,
    SessionContext, SessionStorage,
};
use sf_config::Config;
use sf_core::{ContactDetails, Document, NewUser, Role, StatusFilter, UserFilter, fields};
use sf_db::{DocumentStore, SqliteDocumentStore, UserRepository};

use std::io::{BufRead, Write};
use std::str::FromStr;
use std::sync::Arc;

use log::info;
use serde_json::{Value, json};
use uuid::Uuid;

pub struct Console {
    session: SessionContext,
    auth: Authenticator,
    users: UserRepository,
    passwords: PasswordHasher,
}

impl Console {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        storage: Arc<dyn SessionStorage>,
        passwords: PasswordHasher,
    ) -> Self {
        let users = UserRepository::new(store);
        let mut session = SessionContext::new(storage);
        session.initialize();

        Self {
            session,
            auth: Authenticator::new(users.clone(), passwords),
            users,
            passwords,
        }
    }

    /// Console over the configured SQLite database and session file.
    pub async fn open(config: &Config) -> CliErrorResult<Self> {
        let store = SqliteDocumentStore::connect(&config.database_path()?).await?;
        let storage = FileSessionStorage::new(config.session_path()?);
        let passwords =
            PasswordHasher::new(config.auth.bcrypt_cost, config.auth.allow_plaintext_passwords);

        Ok(Self::new(Arc::new(store), Arc::new(storage), passwords))
    }

    pub async fn execute<R: BufRead, W: Write>(
        &mut self,
        command: Commands,
        confirmer: &mut Confirmer<R, W>,
    ) -> CliErrorResult<Value> {
        match command {
            Commands::Login { email, password } => {
                let outcome = self.auth.login(&mut self.session, &email, &password).await?;
                Ok(serde_json::to_value(outcome)?)
            }
            Commands::AdminLogin { email, password } => {
                let outcome = self
                    .auth
                    .admin_login(&mut self.session, &email, &password)
                    .await?;
                Ok(serde_json::to_value(outcome)?)
            }
            Commands::Logout => {
                self.auth.logout(&mut self.session);
                Ok(json!({ "loggedOut": true }))
            }
            Commands::Whoami => Ok(serde_json::to_value(self.session.identity())?),
            Commands::Guard { path } => self.guard(&path),
            Commands::Users { action } => {
                self.require_admin()?;
                self.users_command(action, confirmer).await
            }
        }
    }

    fn guard(&self, path: &str) -> CliErrorResult<Value> {
        let route = Route::parse(path);
        let mut navigator = RecordingNavigator::new();
        let decision = self.session.navigate_to(&route, &mut navigator);

        Ok(json!({
            "route": route,
            "decision": decision,
            "redirects": navigator.redirects,
        }))
    }

    fn require_admin(&self) -> CliErrorResult<()> {
        match self.session.guard(&Route::AdminConsole) {
            GuardDecision::Allow => Ok(()),
            GuardDecision::Pending => Err(CliError::access_denied(
                Route::AdminLogin,
                "Session not initialized",
            )),
            GuardDecision::DenyRedirect {
                destination,
                message,
            } => Err(CliError::access_denied(
                destination,
                message.unwrap_or_else(|| "Please log in as a webmaster".to_string()),
            )),
        }
    }

    async fn users_command<R: BufRead, W: Write>(
        &self,
        action: UserCommands,
        confirmer: &mut Confirmer<R, W>,
    ) -> CliErrorResult<Value> {
        match action {
            UserCommands::List {
                search,
                category,
                status,
                stale,
            } => {
                if stale {
                    let reports: Vec<_> = self
                        .users
                        .list_with_status()
                        .await?
                        .into_iter()
                        .filter(|r| r.status.needs_update())
                        .collect();
                    return Ok(serde_json::to_value(reports)?);
                }

                let filter = UserFilter {
                    search,
                    category: category.as_deref().map(Role::from_str).transpose()?,
                    status: StatusFilter::from_str(&status)?,
                };
                Ok(serde_json::to_value(self.users.list_filtered(&filter).await?)?)
            }
            UserCommands::Get { id } => Ok(serde_json::to_value(self.users.find_by_id(&id).await?)?),
            UserCommands::Create {
                id,
                email,
                first_name,
                last_name,
                category,
                password,
                username,
                permissions,
                contact,
            } => {
                let new_user = NewUser {
                    id: id.unwrap_or_else(|| Uuid::new_v4().to_string()),
                    email,
                    first_name,
                    last_name,
                    category: Role::from_str(&category)?,
                    password_hash: self.passwords.hash(&password)?,
                    username,
                    permissions,
                    contact: contact_details(contact),
                };
                Ok(serde_json::to_value(self.users.create(new_user).await?)?)
            }
            UserCommands::Update {
                id,
                email,
                first_name,
                last_name,
                username,
                password,
                permissions,
                contact,
            } => {
                let mut patch = contact_document(contact)?;
                for (key, value) in [
                    (fields::EMAIL, email),
                    (fields::FIRST_NAME, first_name),
                    (fields::LAST_NAME, last_name),
                    (fields::USERNAME, username),
                ] {
                    if let Some(value) = value {
                        patch.insert(key.to_string(), Value::String(value));
                    }
                }
                if let Some(password) = password {
                    patch.insert(
                        fields::PASSWORD.to_string(),
                        Value::String(self.passwords.hash(&password)?),
                    );
                }
                if let Some(permissions) = permissions {
                    patch.insert(fields::PERMISSIONS.to_string(), Value::Bool(permissions));
                }
                Ok(serde_json::to_value(self.users.update(&id, patch).await?)?)
            }
            UserCommands::Delete { id } => {
                confirmer.require(&format!("Delete user {id}? This cannot be undone."))?;
                self.users.delete(&id).await?;
                Ok(json!({ "deleted": id }))
            }
            UserCommands::Promote { id, username } => {
                confirmer.require(&format!("Upgrade user {id} to franchise?"))?;
                Ok(serde_json::to_value(
                    self.users
                        .promote_to_franchise(&id, username.as_deref())
                        .await?,
                )?)
            }
            UserCommands::Demote { id } => {
                confirmer.require(&format!("Revert user {id} to customer?"))?;
                Ok(serde_json::to_value(self.users.demote_to_customer(&id).await?)?)
            }
            UserCommands::ToggleStatus { id } => {
                let is_active = self.users.toggle_status(&id).await?;
                Ok(json!({ "id": id, "isActive": is_active }))
            }
            UserCommands::Reconcile { id: Some(id), username } => {
                let mut patch = Document::new();
                if let Some(username) = username {
                    patch.insert(fields::USERNAME.to_string(), Value::String(username));
                }
                Ok(serde_json::to_value(vec![self.users.reconcile(&id, patch).await?])?)
            }
            UserCommands::Reconcile { id: None, .. } => {
                let outcomes = self.users.reconcile_stale().await?;
                info!("Reconcile pass finished: {} record(s) touched", outcomes.len());
                Ok(serde_json::to_value(outcomes)?)
            }
        }
    }
}

fn contact_details(args: ContactArgs) -> ContactDetails {
    ContactDetails {
        phone: args.phone,
        address: args.address,
        city: args.city,
        state: args.state,
        country: args.country,
        country_code: args.country_code,
        zip_code: args.zip_code,
        ..ContactDetails::default()
    }
}

fn contact_document(args: ContactArgs) -> CliErrorResult<Document> {
    match serde_json::to_value(contact_details(args))? {
        Value::Object(map) => Ok(map),
        _ => Ok(Document::new()),
    }
}
