//! In-memory session store for the backend session API
//!
//! Holds at most one signed-in user. Real credential handling lives behind
//! the identity provider; this store is the seam the frontend talks to.

use parking_lot::RwLock;
use vitalboard_types::CurrentUser;

/// Backend session state shared across request handlers
#[derive(Debug, Default)]
pub struct SessionStore {
    user: RwLock<Option<CurrentUser>>,
}

impl SessionStore {
    /// Empty store: nobody signed in
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a signed-in user
    pub fn signed_in(user: CurrentUser) -> Self {
        Self {
            user: RwLock::new(Some(user)),
        }
    }

    /// Currently signed-in user, if any
    pub fn current(&self) -> Option<CurrentUser> {
        self.user.read().clone()
    }

    pub fn sign_in(&self, user: CurrentUser) {
        *self.user.write() = Some(user);
    }

    /// Clear the session; idempotent
    pub fn sign_out(&self) {
        *self.user.write() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_out_is_idempotent() {
        let store = SessionStore::signed_in(CurrentUser {
            display_name: Some("Asha".to_string()),
            email: None,
        });
        assert!(store.current().is_some());

        store.sign_out();
        assert!(store.current().is_none());

        store.sign_out();
        assert!(store.current().is_none());
    }

    #[test]
    fn test_sign_in_replaces_user() {
        let store = SessionStore::new();
        assert!(store.current().is_none());

        store.sign_in(CurrentUser {
            display_name: Some("Ben".to_string()),
            email: Some("ben@example.com".to_string()),
        });
        assert_eq!(
            store.current().and_then(|u| u.display_name).as_deref(),
            Some("Ben")
        );
    }
}
