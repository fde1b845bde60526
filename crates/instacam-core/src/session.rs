#![forbid(unsafe_code)]

//! Authentication gate.
//!
//! Two states: anonymous (showing one of two forms) and authenticated.
//! Credentials are never validated; any submission succeeds immediately.
//! That mirrors the mock UI this reproduces and is a known gap for anything
//! resembling a real product.
//!
//! Persistence is wired into the transitions: signing in or up writes the
//! durable marker, signing out removes it. The marker is read exactly once,
//! at startup, by [`Session::load`]; nothing else reads ambient storage.

use crate::storage::{KEY_AUTHENTICATED, KeyValueStore, StorageResult};

/// Which auth form is being shown while anonymous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthForm {
    #[default]
    SignIn,
    SignUp,
}

/// The auth gate state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Session {
    Anonymous { showing: AuthForm },
    Authenticated,
}

impl Default for Session {
    fn default() -> Self {
        Session::Anonymous {
            showing: AuthForm::SignIn,
        }
    }
}

impl Session {
    /// Load the initial session from the durable marker.
    ///
    /// Called once at startup; the result is injected into the top-level
    /// model.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        if store.get(KEY_AUTHENTICATED) == Some("true") {
            Session::Authenticated
        } else {
            Session::default()
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated)
    }

    /// Submit the sign-in form. Always succeeds; persists the marker.
    ///
    /// The state transition happens even if persistence fails; the error is
    /// returned so the caller can log it.
    pub fn submit_sign_in(&mut self, store: &mut dyn KeyValueStore) -> StorageResult<()> {
        *self = Session::Authenticated;
        store.set(KEY_AUTHENTICATED, "true")
    }

    /// Submit the sign-up form. Identical to sign-in in effect.
    pub fn submit_sign_up(&mut self, store: &mut dyn KeyValueStore) -> StorageResult<()> {
        self.submit_sign_in(store)
    }

    /// Switch the anonymous sub-state to the sign-up form. No-op while
    /// authenticated.
    pub fn switch_to_sign_up(&mut self) {
        if let Session::Anonymous { showing } = self {
            *showing = AuthForm::SignUp;
        }
    }

    /// Switch the anonymous sub-state to the sign-in form. No-op while
    /// authenticated.
    pub fn switch_to_sign_in(&mut self) {
        if let Session::Anonymous { showing } = self {
            *showing = AuthForm::SignIn;
        }
    }

    /// Sign out: clear the marker and return to the sign-in form.
    pub fn sign_out(&mut self, store: &mut dyn KeyValueStore) -> StorageResult<()> {
        *self = Session::default();
        store.remove(KEY_AUTHENTICATED)
    }
}
