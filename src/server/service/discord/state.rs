//! Signed OAuth state tokens.
//!
//! The `state` value sent to Discord is an opaque HS256-signed token carrying
//! the initiating user's id and a random nonce. Verifying it on callback both
//! rejects forged callbacks and recovers which user started the flow, without
//! any server-side session storage.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::{distr::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::server::error::auth::AuthError;

/// How long a state token stays valid after issuance.
const STATE_TTL_SECS: u64 = 600;

#[derive(Debug, Serialize, Deserialize)]
pub struct StateClaims {
    /// Auth provider user id that started the flow
    pub sub: String,
    /// Random nonce, makes each token unique
    pub nonce: String,
    /// Issued at (Unix timestamp)
    pub iat: u64,
    /// Expiration (Unix timestamp)
    pub exp: u64,
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_secs())
        .unwrap_or(0)
}

/// Issues a signed state token binding the OAuth flow to `user_id`.
pub fn sign_state(user_id: &str, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let now = unix_now();
    let nonce: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect();

    let claims = StateClaims {
        sub: user_id.to_string(),
        nonce,
        iat: now,
        exp: now + STATE_TTL_SECS,
    };

    let key = EncodingKey::from_secret(secret.as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verifies a callback state token and recovers its claims.
///
/// Rejects tampered, mis-signed, and expired tokens alike; callers only see
/// `AuthError::InvalidStateToken` with the underlying reason.
pub fn verify_state(token: &str, secret: &str) -> Result<StateClaims, AuthError> {
    let key = DecodingKey::from_secret(secret.as_ref());
    let validation = Validation::default();

    let token_data = decode::<StateClaims>(token, &key, &validation)
        .map_err(|error| AuthError::InvalidStateToken(error.to_string()))?;
    Ok(token_data.claims)
}
