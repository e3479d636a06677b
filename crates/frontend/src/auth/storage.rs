//! Browser-backed implementations of the guard traits

use super::context::{AuthAction, AuthContext};
use super::session::SessionStore;
use gloo::storage::{LocalStorage, Storage};
use quizy_core::{AuthModule, TokenStorage};
use tracing::warn;

/// `localStorage` access for the session token
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn set_item(&self, key: &str, value: &str) {
        if let Err(err) = LocalStorage::raw().set_item(key, value) {
            warn!(key, error = ?err, "Failed to persist item");
        }
    }

    pub fn remove_item(&self, key: &str) {
        if let Err(err) = LocalStorage::raw().remove_item(key) {
            warn!(key, error = ?err, "Failed to remove item");
        }
    }
}

impl TokenStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }
}

impl SessionStore for BrowserStorage {
    fn set_item(&mut self, key: &str, value: &str) {
        BrowserStorage::set_item(self, key, value);
    }

    fn remove_item(&mut self, key: &str) {
        BrowserStorage::remove_item(self, key);
    }
}

/// Adapts the auth reducer to the guard's auth module
pub struct ContextAuth {
    handle: AuthContext,
    logged_in: bool,
}

impl ContextAuth {
    pub fn new(handle: AuthContext) -> Self {
        let logged_in = handle.is_logged_in;
        Self { handle, logged_in }
    }
}

impl AuthModule for ContextAuth {
    fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    fn logout(&mut self) {
        // The dispatched state is only visible after the next render
        self.logged_in = false;
        self.handle.dispatch(AuthAction::Logout);
    }
}
