use async_trait::async_trait;
use auth::Identity;

use crate::profile::errors::ProfileError;
use crate::profile::models::CreateProfileCommand;
use crate::profile::models::EmailAddress;
use crate::profile::models::Profile;
use crate::profile::models::UpdateProfileCommand;

/// Port for profile domain service operations.
///
/// Every operation takes the authenticated caller. Profile routes are
/// addressed by user id in the path, so a mismatch is always reported as
/// forbidden; nothing about the named user's profile is disclosed.
#[async_trait]
pub trait ProfileServicePort: Send + Sync + 'static {
    /// Create the caller's profile.
    ///
    /// # Errors
    /// * `DuplicateProfile` - The caller already has a profile
    /// * `DuplicateEmail` - The email belongs to another profile
    async fn create_profile(
        &self,
        caller: Identity,
        command: CreateProfileCommand,
    ) -> Result<Profile, ProfileError>;

    /// List the caller's own profile, zero-or-one element.
    async fn list_profiles(&self, caller: Identity) -> Result<Vec<Profile>, ProfileError>;

    /// Retrieve the named user's profile.
    ///
    /// # Errors
    /// * `Forbidden` - `user` is not the caller
    /// * `NotFound` - The caller has no profile
    async fn get_profile(&self, caller: Identity, user: Identity)
        -> Result<Profile, ProfileError>;

    /// Update the named user's profile with optional fields.
    ///
    /// # Errors
    /// * `Forbidden` - `user` is not the caller
    /// * `NotFound` - The caller has no profile
    /// * `DuplicateEmail` - The new email belongs to another profile
    async fn update_profile(
        &self,
        caller: Identity,
        user: Identity,
        command: UpdateProfileCommand,
    ) -> Result<Profile, ProfileError>;

    /// Delete the named user's profile.
    ///
    /// # Errors
    /// * `Forbidden` - `user` is not the caller
    /// * `NotFound` - The caller has no profile
    async fn delete_profile(&self, caller: Identity, user: Identity) -> Result<(), ProfileError>;
}

/// Persistence operations for the profile aggregate.
#[async_trait]
pub trait ProfileRepository: Send + Sync + 'static {
    /// Persist a new profile under its owner's id.
    async fn create(&self, profile: Profile) -> Result<Profile, ProfileError>;

    /// Retrieve a profile by its owner's identity.
    async fn find_by_id(&self, id: Identity) -> Result<Option<Profile>, ProfileError>;

    /// Retrieve a profile by email, regardless of owner.
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Profile>, ProfileError>;

    /// Update an existing profile in storage.
    async fn update(&self, profile: Profile) -> Result<Profile, ProfileError>;

    /// Remove a profile from storage.
    async fn delete(&self, id: Identity) -> Result<(), ProfileError>;
}
