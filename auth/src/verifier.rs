use thiserror::Error;

use crate::identity::Identity;
use crate::token::TokenCodec;

/// Single outcome for every authentication failure.
///
/// Missing, malformed, mis-signed, wrong-algorithm and expired tokens all
/// surface as this one value; the boundary maps it to a 401 response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Could not validate credentials")]
pub struct Unauthenticated;

/// Stateless token verification for resource services.
///
/// Pure computation over the shared signing secret: no storage access and no
/// dependency on the issuing service being reachable.
pub struct TokenVerifier {
    codec: TokenCodec,
}

impl TokenVerifier {
    /// Create a verifier around a configured codec.
    pub fn new(codec: TokenCodec) -> Self {
        Self { codec }
    }

    /// Recover the caller's identity from a bearer token.
    ///
    /// # Errors
    /// * `Unauthenticated` - the token failed any validation check
    pub fn authenticate(&self, token: &str) -> Result<Identity, Unauthenticated> {
        self.codec.decode(token).map_err(|_| Unauthenticated)
    }
}
