use std::fmt;
use std::str::FromStr;

use auth::Identity;

use crate::profile::errors::DisplayNameError;
use crate::profile::errors::EmailError;

/// Profile aggregate entity.
///
/// A profile's id is the owning user's identity, assigned at creation from
/// the authenticated caller. One profile per user.
#[derive(Debug, Clone)]
pub struct Profile {
    pub id: Identity,
    pub email: EmailAddress,
    pub display_name: DisplayName,
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser. Compared
/// case-sensitively, exactly as supplied.
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

/// Human-readable name shown alongside the profile, at most 120 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    const MAX_LENGTH: usize = 120;

    /// # Errors
    /// * `Empty` - Blank name
    /// * `TooLong` - More than 120 characters
    pub fn new(display_name: String) -> Result<Self, DisplayNameError> {
        if display_name.trim().is_empty() {
            Err(DisplayNameError::Empty)
        } else if display_name.len() > Self::MAX_LENGTH {
            Err(DisplayNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: display_name.len(),
            })
        } else {
            Ok(Self(display_name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to create the caller's profile.
///
/// Carries no id: the profile id is always the authenticated caller's
/// identity, never client input.
#[derive(Debug)]
pub struct CreateProfileCommand {
    pub email: EmailAddress,
    pub display_name: DisplayName,
}

impl CreateProfileCommand {
    pub fn new(email: EmailAddress, display_name: DisplayName) -> Self {
        Self {
            email,
            display_name,
        }
    }
}

/// Command to update an existing profile; only provided fields change.
#[derive(Debug)]
pub struct UpdateProfileCommand {
    pub email: Option<EmailAddress>,
    pub display_name: Option<DisplayName>,
}
