use crate::Result as AuthErrorResult;

/// Durable per-session key/value storage.
///
/// Values are plain strings. Implementations must make a completed `set`
/// visible to every later `get` on the same storage.
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> AuthErrorResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> AuthErrorResult<()>;

    fn remove(&self, key: &str) -> AuthErrorResult<()>;

    /// Erase every key.
    fn clear(&self) -> AuthErrorResult<()>;
}
