use serde::Deserialize;
use serde::Serialize;

use crate::identity::Identity;
use crate::token::errors::TokenError;

/// Claims carried by a bearer token.
///
/// Deliberately minimal: the subject (a stringified credential id, per the
/// wire format shared by all services) and an absolute expiry in UTC epoch
/// seconds. Both are required; a token missing either is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the credential id as a string.
    pub sub: String,

    /// Expiration time (Unix timestamp, seconds).
    pub exp: i64,
}

impl Claims {
    /// Build claims for a subject expiring at the given timestamp.
    pub fn new(subject: Identity, expires_at: i64) -> Self {
        Self {
            sub: subject.to_string(),
            exp: expires_at,
        }
    }

    /// Parse the subject claim as an integer identity.
    pub fn subject(&self) -> Result<Identity, TokenError> {
        self.sub
            .parse::<i64>()
            .map(Identity)
            .map_err(|_| TokenError::InvalidToken)
    }
}
