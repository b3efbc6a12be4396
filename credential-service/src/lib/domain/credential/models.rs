use std::fmt;
use std::str::FromStr;

use crate::credential::errors::EmailError;

/// Credential aggregate entity.
///
/// The stored secret record for one registered identity. The id doubles as
/// the subject every minted token asserts; resource services never see
/// anything else of this record.
#[derive(Debug, Clone)]
pub struct Credential {
    pub id: CredentialId,
    pub email: EmailAddress,
    pub password_hash: String,
}

/// Credential unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CredentialId(pub i64);

impl fmt::Display for CredentialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser. Stored and
/// compared case-sensitively, exactly as supplied at registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new credential
#[derive(Debug)]
pub struct RegisterCommand {
    pub email: EmailAddress,
    pub password: String,
}

impl RegisterCommand {
    pub fn new(email: EmailAddress, password: String) -> Self {
        Self { email, password }
    }
}
