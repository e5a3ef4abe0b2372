use serde::Deserialize;

/// Identity returned by the hosted auth provider for a verified bearer token.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AuthUser {
    /// Auth provider user id (UUID string).
    pub id: String,
    pub email: String,
}
