//! Session decisions shared by the auth reducer

use chrono::{DateTime, Utc};
use quizy_core::{Claims, TokenError, TokenStorage};
use thiserror::Error;
use tracing::{info, warn};

/// Storage the session can write the token to
pub trait SessionStore: TokenStorage {
    fn set_item(&mut self, key: &str, value: &str);
    fn remove_item(&mut self, key: &str);
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoginError {
    #[error("This credential has already expired.")]
    Expired,

    #[error("Invalid credential: {0}")]
    Invalid(#[from] TokenError),
}

/// Accept a freshly issued token and persist it under `key`
pub fn login(
    store: &mut dyn SessionStore,
    key: &str,
    token: &str,
    now: DateTime<Utc>,
) -> Result<Claims, LoginError> {
    let claims = Claims::decode(token).inspect_err(|err| {
        warn!(error = %err, "Rejected credential");
    })?;

    if claims.is_expired_at(now) {
        warn!(exp = claims.exp, "Rejected expired credential");
        return Err(LoginError::Expired);
    }

    store.set_item(key, token.trim());
    info!(user_id = ?claims.user_id, "Logged in");
    Ok(claims)
}

/// Claims of the stored token when it is present, decodable and unexpired.
/// Anything else is removed from the store.
pub fn restore(store: &mut dyn SessionStore, key: &str, now: DateTime<Utc>) -> Option<Claims> {
    let restored = store
        .get_item(key)
        .and_then(|token| Claims::decode(&token).ok())
        .filter(|claims| !claims.is_expired_at(now));

    if restored.is_none() {
        store.remove_item(key);
    }
    restored
}

/// End the session and drop the stored token
pub fn logout(store: &mut dyn SessionStore, key: &str) {
    store.remove_item(key);
    info!("Logged out");
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use quizy_core::testing::{MemoryStorage, unsigned_token};

    impl SessionStore for MemoryStorage {
        fn set_item(&mut self, key: &str, value: &str) {
            MemoryStorage::set_item(self, key, value);
        }

        fn remove_item(&mut self, key: &str) {
            MemoryStorage::remove_item(self, key);
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    }

    fn token_expiring_at(exp: DateTime<Utc>) -> String {
        unsigned_token(&Claims {
            exp: exp.timestamp() as f64,
            iat: None,
            user_id: Some(9),
            email: None,
        })
    }

    #[test]
    fn test_restore_keeps_valid_token() {
        let mut store = MemoryStorage::with_token("token", now() + Duration::hours(1));

        let claims = restore(&mut store, "token", now()).unwrap();

        assert_eq!(claims.user_id, Some(1));
        assert!(store.get_item("token").is_some());
    }

    #[test]
    fn test_restore_removes_expired_token() {
        let mut store = MemoryStorage::with_token("token", now() - Duration::seconds(1));

        assert_eq!(restore(&mut store, "token", now()), None);
        assert_eq!(store.get_item("token"), None);
    }

    #[test]
    fn test_restore_removes_unreadable_token() {
        let mut store = MemoryStorage::default();
        store.set_item("token", "garbage");

        assert_eq!(restore(&mut store, "token", now()), None);
        assert_eq!(store.get_item("token"), None);
    }

    #[test]
    fn test_restore_without_token() {
        let mut store = MemoryStorage::default();

        assert_eq!(restore(&mut store, "token", now()), None);
    }

    #[test]
    fn test_login_persists_trimmed_token() {
        let mut store = MemoryStorage::default();
        let token = token_expiring_at(now() + Duration::minutes(30));

        let claims = login(&mut store, "session", &format!(" {token}\n"), now()).unwrap();

        assert_eq!(claims.user_id, Some(9));
        assert_eq!(store.get_item("session"), Some(token));
    }

    #[test]
    fn test_login_rejects_expired_token() {
        let mut store = MemoryStorage::default();
        let token = token_expiring_at(now() - Duration::minutes(1));

        assert_eq!(
            login(&mut store, "token", &token, now()),
            Err(LoginError::Expired)
        );
        assert_eq!(store.get_item("token"), None);
    }

    #[test]
    fn test_login_rejects_undecodable_token() {
        let mut store = MemoryStorage::default();

        let err = login(&mut store, "token", "not.a.jwt", now()).unwrap_err();

        assert!(matches!(err, LoginError::Invalid(_)));
        assert!(err.to_string().starts_with("Invalid credential"));
        assert_eq!(store.get_item("token"), None);
    }

    #[test]
    fn test_logout_drops_token() {
        let mut store = MemoryStorage::with_token("token", now() + Duration::hours(1));

        logout(&mut store, "token");

        assert_eq!(store.get_item("token"), None);
    }
}
