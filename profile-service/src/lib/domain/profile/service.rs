use std::sync::Arc;

use async_trait::async_trait;
use auth::ownership;
use auth::Identity;

use crate::profile::errors::ProfileError;
use crate::profile::models::CreateProfileCommand;
use crate::profile::models::Profile;
use crate::profile::models::UpdateProfileCommand;
use crate::profile::ports::ProfileRepository;
use crate::profile::ports::ProfileServicePort;

/// Domain service implementation for profile operations.
///
/// Profiles are addressed by user id in the path, so every mismatch is
/// reported as `Forbidden` before storage is consulted.
pub struct ProfileService<R>
where
    R: ProfileRepository,
{
    repository: Arc<R>,
}

impl<R> ProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    async fn find_own(&self, caller: Identity) -> Result<Profile, ProfileError> {
        self.repository
            .find_by_id(caller)
            .await?
            .ok_or(ProfileError::NotFound(caller.to_string()))
    }
}

#[async_trait]
impl<R> ProfileServicePort for ProfileService<R>
where
    R: ProfileRepository,
{
    async fn create_profile(
        &self,
        caller: Identity,
        command: CreateProfileCommand,
    ) -> Result<Profile, ProfileError> {
        if self.repository.find_by_id(caller).await?.is_some() {
            return Err(ProfileError::DuplicateProfile);
        }
        if self.repository.find_by_email(&command.email).await?.is_some() {
            return Err(ProfileError::DuplicateEmail(command.email.to_string()));
        }

        self.repository
            .create(Profile {
                id: caller,
                email: command.email,
                display_name: command.display_name,
            })
            .await
    }

    async fn list_profiles(&self, caller: Identity) -> Result<Vec<Profile>, ProfileError> {
        let profile = self.repository.find_by_id(caller).await?;
        Ok(profile.into_iter().collect())
    }

    async fn get_profile(
        &self,
        caller: Identity,
        user: Identity,
    ) -> Result<Profile, ProfileError> {
        ownership::authorize(caller, user).map_err(|_| ProfileError::Forbidden)?;
        self.find_own(caller).await
    }

    async fn update_profile(
        &self,
        caller: Identity,
        user: Identity,
        command: UpdateProfileCommand,
    ) -> Result<Profile, ProfileError> {
        ownership::authorize(caller, user).map_err(|_| ProfileError::Forbidden)?;
        let mut profile = self.find_own(caller).await?;

        if let Some(email) = command.email {
            if email != profile.email {
                if let Some(existing) = self.repository.find_by_email(&email).await? {
                    if existing.id != caller {
                        return Err(ProfileError::DuplicateEmail(email.to_string()));
                    }
                }
                profile.email = email;
            }
        }
        if let Some(display_name) = command.display_name {
            profile.display_name = display_name;
        }

        self.repository.update(profile).await
    }

    async fn delete_profile(&self, caller: Identity, user: Identity) -> Result<(), ProfileError> {
        ownership::authorize(caller, user).map_err(|_| ProfileError::Forbidden)?;
        let profile = self.find_own(caller).await?;
        self.repository.delete(profile.id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::profile::models::DisplayName;
    use crate::profile::models::EmailAddress;

    mock! {
        pub TestProfileRepository {}

        #[async_trait]
        impl ProfileRepository for TestProfileRepository {
            async fn create(&self, profile: Profile) -> Result<Profile, ProfileError>;
            async fn find_by_id(&self, id: Identity) -> Result<Option<Profile>, ProfileError>;
            async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Profile>, ProfileError>;
            async fn update(&self, profile: Profile) -> Result<Profile, ProfileError>;
            async fn delete(&self, id: Identity) -> Result<(), ProfileError>;
        }
    }

    fn profile(id: i64, email: &str) -> Profile {
        Profile {
            id: Identity(id),
            email: EmailAddress::new(email.to_string()).unwrap(),
            display_name: DisplayName::new("Alice".to_string()).unwrap(),
        }
    }

    fn command(email: &str) -> CreateProfileCommand {
        CreateProfileCommand::new(
            EmailAddress::new(email.to_string()).unwrap(),
            DisplayName::new("Alice".to_string()).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_create_assigns_caller_identity() {
        let mut repository = MockTestProfileRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_create()
            .withf(|profile| profile.id == Identity(7))
            .times(1)
            .returning(Ok);

        let service = ProfileService::new(Arc::new(repository));
        let created = service
            .create_profile(Identity(7), command("a@x.com"))
            .await
            .unwrap();

        assert_eq!(created.id, Identity(7));
    }

    #[tokio::test]
    async fn test_create_rejects_second_profile() {
        let mut repository = MockTestProfileRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(profile(7, "a@x.com"))));
        repository.expect_create().times(0);

        let service = ProfileService::new(Arc::new(repository));
        let result = service.create_profile(Identity(7), command("b@x.com")).await;

        assert!(matches!(result, Err(ProfileError::DuplicateProfile)));
    }

    #[tokio::test]
    async fn test_create_rejects_taken_email() {
        let mut repository = MockTestProfileRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(profile(2, "a@x.com"))));
        repository.expect_create().times(0);

        let service = ProfileService::new(Arc::new(repository));
        let result = service.create_profile(Identity(7), command("a@x.com")).await;

        assert!(matches!(result, Err(ProfileError::DuplicateEmail(_))));
    }

    #[tokio::test]
    async fn test_get_other_user_is_forbidden_without_lookup() {
        let mut repository = MockTestProfileRepository::new();
        repository.expect_find_by_id().times(0);

        let service = ProfileService::new(Arc::new(repository));
        let result = service.get_profile(Identity(1), Identity(2)).await;

        assert!(matches!(result, Err(ProfileError::Forbidden)));
    }

    #[tokio::test]
    async fn test_get_own_absent_profile_is_not_found() {
        let mut repository = MockTestProfileRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = ProfileService::new(Arc::new(repository));
        let result = service.get_profile(Identity(1), Identity(1)).await;

        assert!(matches!(result, Err(ProfileError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_is_zero_or_one() {
        let mut repository = MockTestProfileRepository::new();
        repository
            .expect_find_by_id()
            .with(eq(Identity(1)))
            .times(1)
            .returning(|_| Ok(Some(profile(1, "a@x.com"))));

        let service = ProfileService::new(Arc::new(repository));
        let profiles = service.list_profiles(Identity(1)).await.unwrap();

        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].id, Identity(1));
    }

    #[tokio::test]
    async fn test_update_rejects_email_taken_by_other_profile() {
        let mut repository = MockTestProfileRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(profile(1, "a@x.com"))));
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(profile(2, "taken@x.com"))));
        repository.expect_update().times(0);

        let service = ProfileService::new(Arc::new(repository));
        let command = UpdateProfileCommand {
            email: Some(EmailAddress::new("taken@x.com".to_string()).unwrap()),
            display_name: None,
        };
        let result = service.update_profile(Identity(1), Identity(1), command).await;

        assert!(matches!(result, Err(ProfileError::DuplicateEmail(_))));
    }

    #[tokio::test]
    async fn test_update_applies_only_provided_fields() {
        let mut repository = MockTestProfileRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(profile(1, "a@x.com"))));
        repository
            .expect_update()
            .withf(|p| p.email.as_str() == "a@x.com" && p.display_name.as_str() == "Bob")
            .times(1)
            .returning(Ok);

        let service = ProfileService::new(Arc::new(repository));
        let command = UpdateProfileCommand {
            email: None,
            display_name: Some(DisplayName::new("Bob".to_string()).unwrap()),
        };
        let updated = service
            .update_profile(Identity(1), Identity(1), command)
            .await
            .unwrap();

        assert_eq!(updated.display_name.as_str(), "Bob");
    }

    #[tokio::test]
    async fn test_delete_other_user_is_forbidden() {
        let mut repository = MockTestProfileRepository::new();
        repository.expect_delete().times(0);

        let service = ProfileService::new(Arc::new(repository));
        let result = service.delete_profile(Identity(1), Identity(2)).await;

        assert!(matches!(result, Err(ProfileError::Forbidden)));
    }
}
