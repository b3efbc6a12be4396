use std::sync::Arc;

use async_trait::async_trait;
use auth::Identity;
use auth::PasswordHasher;
use auth::TokenCodec;
use chrono::Duration;

use crate::credential::errors::CredentialError;
use crate::credential::models::Credential;
use crate::credential::models::EmailAddress;
use crate::credential::models::RegisterCommand;
use crate::credential::ports::CredentialIssuerPort;
use crate::credential::ports::CredentialRepository;

/// Well-formed bcrypt hash verified on login misses so an unknown email
/// costs the same as a wrong password.
const PHANTOM_HASH: &str = "$2b$12$uQUJAVVP2aj4GbUhZo8rUOFAqujOLYxRkiFtqhGnrHAtYV1AGmWvW";

/// Domain service owning the registration and login flows.
///
/// Delegates hashing to [`PasswordHasher`] and token minting to
/// [`TokenCodec`]; holds no mutable state beyond the injected configuration.
pub struct CredentialIssuer<R>
where
    R: CredentialRepository,
{
    repository: Arc<R>,
    password_hasher: PasswordHasher,
    token_codec: Arc<TokenCodec>,
    token_ttl: Duration,
}

impl<R> CredentialIssuer<R>
where
    R: CredentialRepository,
{
    /// Create a new issuer with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential persistence implementation
    /// * `password_hasher` - Configured password hasher
    /// * `token_codec` - Codec holding the shared signing secret
    /// * `token_ttl` - Lifetime of minted tokens
    pub fn new(
        repository: Arc<R>,
        password_hasher: PasswordHasher,
        token_codec: Arc<TokenCodec>,
        token_ttl: Duration,
    ) -> Self {
        Self {
            repository,
            password_hasher,
            token_codec,
            token_ttl,
        }
    }
}

#[async_trait]
impl<R> CredentialIssuerPort for CredentialIssuer<R>
where
    R: CredentialRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<Credential, CredentialError> {
        if self
            .repository
            .find_by_email(&command.email)
            .await?
            .is_some()
        {
            return Err(CredentialError::DuplicateEmail(command.email.to_string()));
        }

        let password_hash = self.password_hasher.hash(&command.password)?;
        self.repository.create(&command.email, &password_hash).await
    }

    async fn login(
        &self,
        email: &EmailAddress,
        password: &str,
    ) -> Result<String, CredentialError> {
        let credential = match self.repository.find_by_email(email).await? {
            Some(credential) => credential,
            None => {
                let _ = self.password_hasher.verify(password, PHANTOM_HASH);
                return Err(CredentialError::InvalidCredentials);
            }
        };

        if !self
            .password_hasher
            .verify(password, &credential.password_hash)
        {
            return Err(CredentialError::InvalidCredentials);
        }

        let token = self
            .token_codec
            .encode(Identity(credential.id.0), self.token_ttl)?;

        Ok(token)
    }
}
