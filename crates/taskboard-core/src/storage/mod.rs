//! Storage Layer
//!
//! Durable key-value storage for the session. Implementations can use
//! browser localStorage, a file, an in-memory map, etc.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::domain::ClientResult;

/// Minimal string key-value store
///
/// Methods take `&self`; implementations use interior mutability the way
/// `window.localStorage` does.
pub trait KeyValueStore {
    /// Value for `key`, `None` when absent
    fn get(&self, key: &str) -> ClientResult<Option<String>>;

    /// Insert or overwrite `key`
    fn set(&self, key: &str, value: &str) -> ClientResult<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> ClientResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> ClientResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> ClientResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> ClientResult<()> {
        (**self).remove(key)
    }
}
