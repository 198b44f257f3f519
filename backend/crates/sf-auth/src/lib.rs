pub mod authenticator;
pub mod error;
pub mod file_session_storage;
pub mod memory_session_storage;
pub mod navigation;
pub mod password;
pub mod route;
pub mod route_guard;
pub mod session_context;
pub mod session_storage;
pub mod session_store;

pub use authenticator::{Authenticator, LoginOutcome};
pub use error::{AuthError, Result};
pub use file_session_storage::FileSessionStorage;
pub use memory_session_storage::MemorySessionStorage;
pub use navigation::{Navigator, RecordingNavigator, Redirect};
pub use password::PasswordHasher;
pub use route::{Area, Route};
pub use route_guard::{ACCESS_DENIED_MESSAGE, GuardDecision, RequiredRole, evaluate, evaluate_route};
pub use session_context::SessionContext;
pub use session_storage::SessionStorage;
pub use session_store::SessionStore;

#[cfg(test)]
mod tests;
