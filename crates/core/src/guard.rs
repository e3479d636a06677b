//! Navigation guard evaluated before every route transition

use crate::table::Location;
use crate::token::Claims;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

/// The authentication module owning the session flag
#[cfg_attr(test, mockall::automock)]
pub trait AuthModule {
    fn is_logged_in(&self) -> bool;

    /// End the current session
    fn logout(&mut self);
}

/// Persistent key-value storage holding the credential
pub trait TokenStorage {
    fn get_item(&self, key: &str) -> Option<String>;
}

/// Everything the guard reads or mutates during a single navigation
pub struct GuardContext<'a> {
    pub auth: &'a mut dyn AuthModule,
    pub storage: &'a dyn TokenStorage,
    pub now: DateTime<Utc>,
}

impl<'a> GuardContext<'a> {
    pub fn new(auth: &'a mut dyn AuthModule, storage: &'a dyn TokenStorage) -> Self {
        Self {
            auth,
            storage,
            now: Utc::now(),
        }
    }

    /// Evaluate the guard at a fixed instant
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }
}

/// What the host router should do with a navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    Proceed,
    Redirect(String),
}

impl NavigationDecision {
    pub fn is_proceed(&self) -> bool {
        matches!(self, NavigationDecision::Proceed)
    }
}

/// State of the stored credential at navigation time
#[derive(Debug, Clone, PartialEq, Eq)]
enum CredentialState {
    Absent,
    Valid,
    Expired,
    Malformed,
}

/// Authentication gate for protected routes
#[derive(Debug, Clone)]
pub struct NavigationGuard {
    login_path: String,
    token_key: String,
}

impl NavigationGuard {
    pub fn new(login_path: impl Into<String>, token_key: impl Into<String>) -> Self {
        Self {
            login_path: login_path.into(),
            token_key: token_key.into(),
        }
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn token_key(&self) -> &str {
        &self.token_key
    }

    /// Decide whether navigation to `to` may proceed.
    ///
    /// Routes explicitly marked public always proceed. Anything else needs
    /// the session flag set. A stored credential that is expired or cannot be
    /// decoded ends the session and sends the user to the login view.
    pub fn check(&self, to: &Location, ctx: &mut GuardContext<'_>) -> NavigationDecision {
        if to.is_public() {
            debug!(path = %to.path, "Public route, proceeding");
            return NavigationDecision::Proceed;
        }

        if !ctx.auth.is_logged_in() {
            info!(path = %to.path, login = %self.login_path, "Not logged in, redirecting");
            return self.redirect();
        }

        match self.credential_state(ctx) {
            CredentialState::Expired | CredentialState::Malformed => {
                ctx.auth.logout();
                info!(path = %to.path, login = %self.login_path, "Session ended, redirecting");
                self.redirect()
            }
            CredentialState::Absent | CredentialState::Valid => {
                debug!(path = %to.path, "Session valid, proceeding");
                NavigationDecision::Proceed
            }
        }
    }

    fn credential_state(&self, ctx: &GuardContext<'_>) -> CredentialState {
        let Some(token) = ctx.storage.get_item(&self.token_key) else {
            return CredentialState::Absent;
        };

        match Claims::decode(&token) {
            Ok(claims) if claims.is_expired_at(ctx.now) => {
                warn!(exp = claims.exp, "Token has expired");
                CredentialState::Expired
            }
            Ok(_) => CredentialState::Valid,
            Err(err) => {
                warn!(error = %err, "Stored token could not be decoded");
                CredentialState::Malformed
            }
        }
    }

    fn redirect(&self) -> NavigationDecision {
        NavigationDecision::Redirect(self.login_path.clone())
    }
}

impl Default for NavigationGuard {
    fn default() -> Self {
        Self::new("/auth", "token")
    }
}
