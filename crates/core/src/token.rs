//! Decoding of the stored credential.
//!
//! The browser only reads the claims of the JWT issued by the auth service.
//! Signatures are not verified here since the signing secret never leaves
//! the backend.

use crate::error::TokenError;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, general_purpose};
use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// URL-safe base64 that accepts payloads with or without padding
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    general_purpose::NO_PAD.with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Claims carried by a quiz session token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Expiration time (seconds since epoch, may carry a fraction)
    pub exp: f64,
    /// Issued at (seconds since epoch)
    #[serde(default)]
    pub iat: Option<i64>,
    #[serde(default)]
    pub user_id: Option<u64>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Claims {
    /// Decode the payload segment of a JWT
    pub fn decode(token: &str) -> Result<Self, TokenError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(TokenError::Empty);
        }

        let segments: Vec<&str> = token.split('.').collect();
        if segments.len() != 3 {
            return Err(TokenError::Segments(segments.len()));
        }

        let payload = URL_SAFE_LENIENT.decode(segments[1])?;
        Ok(serde_json::from_slice(&payload)?)
    }

    /// A token is expired once its expiry lies strictly before `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.exp * 1000.0 < now.timestamp_millis() as f64
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        if !self.exp.is_finite() {
            return None;
        }
        DateTime::from_timestamp_millis((self.exp * 1000.0).round() as i64)
    }
}
