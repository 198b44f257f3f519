use crate::route_guard::evaluate_route;
use crate::{GuardDecision, Navigator, Result as AuthErrorResult, Route, SessionStorage, SessionStore};

use sf_core::Identity;

use std::sync::Arc;

use log::error;

/// The one identity of a session, passed down to whatever needs it.
///
/// Starts in the loading state; [`SessionContext::initialize`] restores the
/// persisted identity and ends loading.
pub struct SessionContext {
    store: SessionStore,
    identity: Option<Identity>,
    loading: bool,
}

impl SessionContext {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            store: SessionStore::new(storage),
            identity: None,
            loading: true,
        }
    }

    /// Restore from storage. Safe to call again to pick up another writer.
    pub fn initialize(&mut self) {
        self.identity = self.store.restore();
        self.loading = false;
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn guard(&self, route: &Route) -> GuardDecision {
        evaluate_route(self.identity(), self.loading, route)
    }

    /// Guard `route` and perform the redirect a denial calls for.
    pub fn navigate_to(&self, route: &Route, navigator: &mut dyn Navigator) -> GuardDecision {
        let decision = self.guard(route);
        decision.apply(navigator);
        decision
    }

    pub(crate) fn sign_in(&mut self, identity: Identity) -> AuthErrorResult<()> {
        self.store.persist(&identity)?;
        self.identity = Some(identity);
        self.loading = false;
        Ok(())
    }

    pub(crate) fn sign_out(&mut self) {
        if let Err(e) = self.store.clear() {
            error!("Failed to clear session storage: {e}");
        }
        self.identity = None;
    }
}
