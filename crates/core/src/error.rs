//! Error types shared by the navigation crates

use thiserror::Error;

/// Failures while decoding a stored credential
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Token is empty")]
    Empty,

    #[error("Token must have 3 segments, found {0}")]
    Segments(usize),

    #[error("Invalid token payload encoding: {0}")]
    Encoding(String),

    #[error("Invalid token claims: {0}")]
    Claims(String),
}

impl From<base64::DecodeError> for TokenError {
    fn from(err: base64::DecodeError) -> Self {
        Self::Encoding(err.to_string())
    }
}

impl From<serde_json::Error> for TokenError {
    fn from(err: serde_json::Error) -> Self {
        Self::Claims(err.to_string())
    }
}

/// Navigation errors surfaced by the router driver
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("Route not found: {0}")]
    UnknownRoute(String),

    #[error("Missing param '{param}' for route '{route}'")]
    MissingParam { route: String, param: String },

    #[error("Redirect loop detected while navigating to {path} ({hops} redirects)")]
    RedirectLoop { path: String, hops: usize },

    #[error("No previous location in history")]
    HistoryEmpty,
}

impl NavigationError {
    /// Create a missing param error
    pub fn missing_param(route: impl Into<String>, param: impl Into<String>) -> Self {
        Self::MissingParam {
            route: route.into(),
            param: param.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NavigationError>;
