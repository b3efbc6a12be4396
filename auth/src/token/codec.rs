use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;
use crate::identity::Identity;

/// Encoder/decoder for signed, self-contained bearer tokens.
///
/// Holds the symmetric secret every service is provisioned with and exactly
/// one HMAC algorithm. Tokens whose header declares any other algorithm are
/// rejected at decode time. The codec is immutable after construction and
/// safe to share across requests.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenCodec {
    /// Create a codec from the shared secret and configured algorithm.
    ///
    /// # Errors
    /// * `Configuration` - empty secret, or an algorithm outside the HMAC
    ///   family (a symmetric secret cannot back RSA/EC algorithms, and
    ///   accepting them would reintroduce algorithm confusion)
    pub fn new(secret: &[u8], algorithm: Algorithm) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::Configuration(
                "signing secret must not be empty".to_string(),
            ));
        }
        if !matches!(
            algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(TokenError::Configuration(format!(
                "unsupported signing algorithm: {:?}",
                algorithm
            )));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm,
        })
    }

    /// Encode a subject into a signed token expiring after `ttl`.
    ///
    /// # Errors
    /// * `EncodingFailed` - serialization or signing failed
    pub fn encode(&self, subject: Identity, ttl: Duration) -> Result<String, TokenError> {
        let expires_at = (Utc::now() + ttl).timestamp();
        let claims = Claims::new(subject, expires_at);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a token, recovering the subject identity.
    ///
    /// Checks signature, algorithm, and expiry (no leeway), then parses the
    /// subject claim. Every failure collapses to `InvalidToken`.
    pub fn decode(&self, token: &str) -> Result<Identity, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|_| TokenError::InvalidToken)?;

        token_data.claims.subject()
    }
}
