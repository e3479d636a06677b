//! In-memory implementations of the guard traits for tests

use crate::guard::{AuthModule, TokenStorage};
use crate::token::Claims;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Auth module that only tracks the session flag
#[derive(Debug, Clone, Default)]
pub struct MemoryAuth {
    pub logged_in: bool,
    pub logouts: usize,
}

impl MemoryAuth {
    pub fn logged_in() -> Self {
        Self {
            logged_in: true,
            logouts: 0,
        }
    }
}

impl AuthModule for MemoryAuth {
    fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    fn logout(&mut self) {
        self.logged_in = false;
        self.logouts += 1;
    }
}

/// Key-value storage backed by a map
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    /// Storage holding a token under `key` that expires at `exp`
    pub fn with_token(key: &str, exp: DateTime<Utc>) -> Self {
        let mut storage = Self::default();
        storage.set_item(
            key,
            &unsigned_token(&Claims {
                exp: exp.timestamp_millis() as f64 / 1000.0,
                iat: None,
                user_id: Some(1),
                email: Some("player@example.com".to_string()),
            }),
        );
        storage
    }

    pub fn set_item(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
    }

    pub fn remove_item(&mut self, key: &str) {
        self.items.remove(key);
    }
}

impl TokenStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }
}

/// Encode claims as a JWT with a placeholder signature
pub fn unsigned_token(claims: &Claims) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(claims).unwrap_or_default());
    format!("{header}.{payload}.signature")
}
