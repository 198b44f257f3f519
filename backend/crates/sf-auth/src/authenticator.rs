//! Login and logout against the `users` collection.
//!
//! General login refuses webmasters before ever comparing a password and
//! sends them to the admin login page with their email carried forward.
//! Admin login only considers webmaster records.

use crate::{AuthError, PasswordHasher, Redirect, Result as AuthErrorResult, Route, SessionContext};

use sf_core::{Identity, Role, UserRecord};
use sf_db::UserRepository;

use log::{info, warn};
use serde::Serialize;

pub const USE_ADMIN_LOGIN_MESSAGE: &str = "Please use the admin login page";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LoginOutcome {
    Authenticated { identity: Identity, landing: Route },
    RedirectToPrivileged(Redirect),
}

pub struct Authenticator {
    users: UserRepository,
    passwords: PasswordHasher,
}

impl Authenticator {
    pub fn new(users: UserRepository, passwords: PasswordHasher) -> Self {
        Self { users, passwords }
    }

    pub async fn login(
        &self,
        session: &mut SessionContext,
        email: &str,
        password: &str,
    ) -> AuthErrorResult<LoginOutcome> {
        let Some(record) = self.users.find_by_email(email).await? else {
            warn!("Login failed: no user with email {email}");
            return Err(AuthError::not_found(email));
        };

        if record.category == Role::Webmaster {
            info!("Redirecting webmaster {email} to the admin login");
            return Ok(LoginOutcome::RedirectToPrivileged(
                Redirect::to(Route::AdminLogin)
                    .with_message(USE_ADMIN_LOGIN_MESSAGE)
                    .with_email(email),
            ));
        }

        self.complete(session, record, password).await
    }

    pub async fn admin_login(
        &self,
        session: &mut SessionContext,
        email: &str,
        password: &str,
    ) -> AuthErrorResult<LoginOutcome> {
        let Some(record) = self
            .users
            .find_by_email_and_category(email, Role::Webmaster)
            .await?
        else {
            warn!("Admin login failed: no webmaster with email {email}");
            return Err(AuthError::not_found(email));
        };

        self.complete(session, record, password).await
    }

    /// Always succeeds; calling it without a session is a no-op.
    pub fn logout(&self, session: &mut SessionContext) {
        if let Some(identity) = session.identity() {
            info!("Logged out {}", identity.email);
        }
        session.sign_out();
    }

    async fn complete(
        &self,
        session: &mut SessionContext,
        record: UserRecord,
        password: &str,
    ) -> AuthErrorResult<LoginOutcome> {
        if !self.passwords.verify(password, &record.password)? {
            warn!("Login failed: invalid credentials for {}", record.email);
            return Err(AuthError::invalid_credentials());
        }

        let identity = record.to_identity();
        session.sign_in(identity.clone())?;

        if let Err(e) = self.users.touch_login(&record.id).await {
            warn!("Could not record login time for {}: {e}", record.id);
        }

        info!("Logged in {} as {}", identity.email, identity.category);
        Ok(LoginOutcome::Authenticated {
            landing: Route::landing_for(identity.category),
            identity,
        })
    }
}
