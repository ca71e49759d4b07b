//! Process-wide session storage.
//!
//! Suitable for single-instance deployments; sessions are lost when the
//! process restarts.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use ladle_postgres::model::Chef;

/// Process-wide mapping from session token to authenticated chef.
///
/// Stores sessions in a `HashMap` protected by an `RwLock`; all operations
/// are safe under concurrent invocation, and operations on the same token
/// are linearizable. Cloning is cheap and shares the underlying map.
///
/// The store is owned by the application state and constructed exactly once
/// at startup; nothing resets it implicitly.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Chef>>>,
}

impl SessionStore {
    /// Creates a new empty session store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a session, replacing any previous principal for the token.
    pub fn insert(&self, token: impl Into<String>, chef: Chef) {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.into(), chef);
    }

    /// Resolves a token to its chef, if the session is live.
    pub fn get(&self, token: &str) -> Option<Chef> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
            .cloned()
    }

    /// Removes a session.
    ///
    /// Returns whether the token was present; removing an absent token is a
    /// no-op, so logout stays idempotent.
    pub fn remove(&self, token: &str) -> bool {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(token)
            .is_some()
    }

    /// Returns the number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns whether there are no live sessions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chef(id: i32, username: &str) -> Chef {
        let epoch = jiff_diesel::Timestamp::from(jiff::Timestamp::UNIX_EPOCH);
        Chef {
            id,
            username: username.to_owned(),
            email: format!("{username}@example.com"),
            password: "secret".to_owned(),
            is_admin: false,
            created_at: epoch,
            updated_at: epoch,
        }
    }

    #[test]
    fn insert_then_get_resolves_principal() {
        let store = SessionStore::new();
        store.insert("token-1", chef(1, "chef1"));

        let resolved = store.get("token-1").expect("session is live");
        assert_eq!(resolved.id, 1);
        assert_eq!(resolved.username, "chef1");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn get_unknown_token_is_absent() {
        let store = SessionStore::new();
        assert!(store.get("never-issued").is_none());
    }

    #[test]
    fn remove_is_idempotent() {
        let store = SessionStore::new();
        store.insert("token-1", chef(1, "chef1"));

        assert!(store.remove("token-1"));
        assert!(!store.remove("token-1"));
        assert!(store.get("token-1").is_none());
    }

    #[test]
    fn removed_session_never_reappears() {
        let store = SessionStore::new();
        store.insert("token-1", chef(1, "chef1"));
        store.remove("token-1");

        assert!(store.get("token-1").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn concurrent_sessions_do_not_interfere() {
        let store = SessionStore::new();
        let mut handles = Vec::new();

        for worker in 0..8 {
            let store = store.clone();
            handles.push(std::thread::spawn(move || {
                for round in 0..50 {
                    let token = format!("token-{worker}-{round}");
                    store.insert(token.clone(), chef(worker, "chef"));
                    assert!(store.get(&token).is_some());
                    assert!(store.remove(&token));
                }
            }));
        }

        for handle in handles {
            handle.join().expect("worker completes");
        }

        assert!(store.is_empty());
    }
}
