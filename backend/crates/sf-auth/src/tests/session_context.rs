use crate::session_store::keys;
use crate::{GuardDecision, MemorySessionStorage, RecordingNavigator, Route, SessionContext, SessionStorage};

use std::sync::Arc;

#[test]
fn given_new_context_when_guarding_then_pending_until_initialized() {
    let mut session = SessionContext::new(Arc::new(MemorySessionStorage::new()));

    assert!(session.is_loading());
    assert_eq!(session.guard(&Route::Checkout), GuardDecision::Pending);

    session.initialize();

    assert!(!session.is_loading());
    assert_eq!(
        session.guard(&Route::Checkout),
        GuardDecision::DenyRedirect {
            destination: Route::Login,
            message: None,
        }
    );
}

#[test]
fn given_stored_session_when_initialized_then_identity_restored() {
    let storage = Arc::new(MemorySessionStorage::new());
    storage.set(keys::SESSION_EMAIL, "c@shop.test").unwrap();
    storage.set(keys::USER_ROLE, "customer").unwrap();
    storage.set(keys::USER_ID, "c1").unwrap();
    let mut session = SessionContext::new(storage);

    session.initialize();

    assert_eq!(session.identity().map(|i| i.id.as_str()), Some("c1"));
    assert!(session.guard(&Route::CustomerDashboard).is_allowed());
}

#[test]
fn given_denied_route_when_navigate_to_then_navigator_invoked_once() {
    let mut session = SessionContext::new(Arc::new(MemorySessionStorage::new()));
    session.initialize();
    let mut navigator = RecordingNavigator::new();

    let decision = session.navigate_to(&Route::AdminConsole, &mut navigator);

    assert!(!decision.is_allowed());
    assert_eq!(navigator.redirects.len(), 1);
    assert_eq!(navigator.redirects[0].destination, Route::AdminLogin);
}
