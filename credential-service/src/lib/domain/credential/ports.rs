use async_trait::async_trait;

use crate::credential::errors::CredentialError;
use crate::credential::models::Credential;
use crate::credential::models::EmailAddress;
use crate::credential::models::RegisterCommand;

/// Port for credential issuance operations.
#[async_trait]
pub trait CredentialIssuerPort: Send + Sync + 'static {
    /// Register a new credential.
    ///
    /// # Errors
    /// * `DuplicateEmail` - Email is already registered
    /// * `DatabaseError` - Store operation failed
    async fn register(&self, command: RegisterCommand) -> Result<Credential, CredentialError>;

    /// Exchange credentials for a signed bearer token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password, indistinguishably
    /// * `DatabaseError` - Store operation failed
    async fn login(&self, email: &EmailAddress, password: &str)
        -> Result<String, CredentialError>;
}

/// Persistence operations for the credential aggregate.
#[async_trait]
pub trait CredentialRepository: Send + Sync + 'static {
    /// Persist a new credential.
    ///
    /// # Errors
    /// * `DuplicateEmail` - Unique constraint on email violated
    /// * `DatabaseError` - Store operation failed
    async fn create(
        &self,
        email: &EmailAddress,
        password_hash: &str,
    ) -> Result<Credential, CredentialError>;

    /// Retrieve a credential by its exact stored email.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Credential>, CredentialError>;
}
