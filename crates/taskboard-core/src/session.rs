//! Session Manager
//!
//! Owns the authenticated session and mirrors it into a [`KeyValueStore`].
//! Restoring never touches the network; any non-empty stored token counts as
//! logged in.

use crate::domain::{ClientResult, Session, User};
use crate::storage::KeyValueStore;

/// Storage key of the bearer token
pub const TOKEN_KEY: &str = "token";
/// Storage key of the JSON user profile
pub const USER_KEY: &str = "user";

pub struct SessionManager<S> {
    storage: S,
    session: Option<Session>,
}

impl<S: KeyValueStore> SessionManager<S> {
    /// Rebuild the session from storage
    ///
    /// Storage failures and an unreadable profile are logged; the former
    /// yield no session, the latter an empty profile.
    pub fn restore(storage: S) -> Self {
        let token = match storage.get(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                log::warn!("[SESSION] Could not read token: {}", e);
                None
            }
        };
        let session = token.map(|token| Session::new(token, load_user(&storage)));
        log::debug!("[SESSION] Restored, authenticated={}", session.is_some());
        Self { storage, session }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Persist and adopt a new session
    ///
    /// Memory is only updated once both keys are written.
    pub fn login(&mut self, token: String, user: User) -> ClientResult<()> {
        let profile = serde_json::to_string(&user)?;
        self.storage.set(TOKEN_KEY, &token)?;
        self.storage.set(USER_KEY, &profile)?;
        log::info!("[SESSION] Logged in as {}", user.email.as_deref().unwrap_or("<unknown>"));
        self.session = Some(Session::new(token, user));
        Ok(())
    }

    /// Forget the session in storage and memory
    ///
    /// The in-memory reset happens even when storage refuses the removal.
    pub fn logout(&mut self) {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.storage.remove(key) {
                log::warn!("[SESSION] Could not remove {}: {}", key, e);
            }
        }
        self.session = None;
        log::info!("[SESSION] Logged out");
    }
}

fn load_user<S: KeyValueStore>(storage: &S) -> User {
    match storage.get(USER_KEY) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("[SESSION] Stored profile unreadable: {}", e);
            User::default()
        }),
        Ok(None) => User::default(),
        Err(e) => {
            log::warn!("[SESSION] Could not read profile: {}", e);
            User::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ClientError;
    use crate::storage::MemoryStore;

    /// Store whose writes and removals always fail
    struct BrokenStore(MemoryStore);

    impl KeyValueStore for BrokenStore {
        fn get(&self, key: &str) -> ClientResult<Option<String>> {
            self.0.get(key)
        }

        fn set(&self, _key: &str, _value: &str) -> ClientResult<()> {
            Err(ClientError::Storage("quota exceeded".to_string()))
        }

        fn remove(&self, _key: &str) -> ClientResult<()> {
            Err(ClientError::Storage("read-only".to_string()))
        }
    }

    #[test]
    fn test_restore_reads_token_and_profile() {
        let store = MemoryStore::with_entries([
            (TOKEN_KEY, "tok-1"),
            (USER_KEY, r#"{"name":"Ada","email":"ada@example.com"}"#),
        ]);
        let manager = SessionManager::restore(store);

        assert!(manager.is_authenticated());
        assert_eq!(manager.token(), Some("tok-1"));
        assert_eq!(manager.user().map(User::display_name), Some("Ada"));
    }

    #[test]
    fn test_restore_without_token_is_logged_out() {
        let store = MemoryStore::with_entries([(USER_KEY, r#"{"name":"Ada"}"#)]);
        let manager = SessionManager::restore(store);
        assert!(!manager.is_authenticated());
        assert_eq!(manager.user(), None);
    }

    #[test]
    fn test_empty_token_counts_as_absent() {
        let manager = SessionManager::restore(MemoryStore::with_entries([(TOKEN_KEY, "")]));
        assert!(!manager.is_authenticated());
    }

    #[test]
    fn test_unreadable_profile_restores_empty_user() {
        let store = MemoryStore::with_entries([(TOKEN_KEY, "tok"), (USER_KEY, "{broken")]);
        let manager = SessionManager::restore(store);
        assert_eq!(manager.token(), Some("tok"));
        assert_eq!(manager.user(), Some(&User::default()));
    }

    #[test]
    fn test_login_persists_both_keys() {
        let mut manager = SessionManager::restore(MemoryStore::new());
        manager.login("tok-2".to_string(), User::new("Ada", "ada@example.com")).unwrap();

        assert_eq!(manager.token(), Some("tok-2"));
        assert_eq!(manager.storage().get(TOKEN_KEY).unwrap().as_deref(), Some("tok-2"));
        let stored = manager.storage().get(USER_KEY).unwrap().unwrap();
        let user: User = serde_json::from_str(&stored).unwrap();
        assert_eq!(user.email.as_deref(), Some("ada@example.com"));

        // A fresh manager over the same storage sees the same session
        let again = SessionManager::restore(manager.storage());
        assert_eq!(again.session(), manager.session());
    }

    #[test]
    fn test_failed_login_write_leaves_memory_untouched() {
        let mut manager = SessionManager::restore(BrokenStore(MemoryStore::new()));
        let err = manager.login("tok".to_string(), User::default()).unwrap_err();
        assert!(matches!(err, ClientError::Storage(_)));
        assert!(!manager.is_authenticated());
    }

    #[test]
    fn test_logout_clears_storage_and_memory() {
        let store = MemoryStore::with_entries([(TOKEN_KEY, "tok"), (USER_KEY, "{}"), ("theme", "dark")]);
        let mut manager = SessionManager::restore(store);
        manager.logout();

        assert!(!manager.is_authenticated());
        assert_eq!(manager.user(), None);
        assert_eq!(manager.storage().get(TOKEN_KEY).unwrap(), None);
        assert_eq!(manager.storage().get(USER_KEY).unwrap(), None);
        assert_eq!(manager.storage().len(), 1);
    }

    #[test]
    fn test_logout_when_logged_out_is_harmless() {
        let mut manager = SessionManager::restore(MemoryStore::new());
        manager.logout();
        assert!(!manager.is_authenticated());
        assert!(manager.storage().is_empty());
    }

    #[test]
    fn test_logout_resets_memory_even_if_storage_fails() {
        let store = BrokenStore(MemoryStore::with_entries([(TOKEN_KEY, "tok")]));
        let mut manager = SessionManager::restore(store);
        assert!(manager.is_authenticated());
        manager.logout();
        assert!(!manager.is_authenticated());
    }
}
