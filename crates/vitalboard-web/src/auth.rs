//! Authentication context
//!
//! Provides the current user to any component in the tree and exposes the
//! sign-out capability. The context is hydrated once from `/api/session`;
//! everything else reads the signal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use vitalboard_types::CurrentUser;

use crate::api;

/// Auth context for the signed-in user state
#[derive(Clone, Copy)]
pub struct AuthContext {
    user: RwSignal<Option<CurrentUser>>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            user: RwSignal::new(None),
        }
    }

    /// Currently signed-in user, if any
    pub fn user(&self) -> Option<CurrentUser> {
        self.user.get()
    }

    /// Replace the signed-in user (session hydration)
    pub fn set_user(&self, user: Option<CurrentUser>) {
        self.user.set(user);
    }

    /// Clear the session and notify the backend.
    ///
    /// Fire-and-forget: the UI state flips immediately and the backend
    /// response is ignored. No retry, no confirmation.
    pub fn logout(&self) {
        self.user.set(None);
        spawn_local(async move {
            let _ = api::post_logout().await;
        });
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Auth provider component (wraps app root)
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::new();

    provide_context(auth);

    // Hydrate the user from the backend session once on mount
    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(user) = api::fetch_session().await {
                auth.set_user(user);
            }
        });
    });

    children()
}

/// Hook to access the auth context
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
