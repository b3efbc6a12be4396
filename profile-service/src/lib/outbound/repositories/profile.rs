use async_trait::async_trait;
use auth::Identity;
use sqlx::SqlitePool;

use crate::profile::errors::ProfileError;
use crate::profile::models::DisplayName;
use crate::profile::models::EmailAddress;
use crate::profile::models::Profile;
use crate::profile::ports::ProfileRepository;

#[derive(sqlx::FromRow)]
struct ProfileRow {
    id: i64,
    email: String,
    display_name: String,
}

impl ProfileRow {
    fn into_profile(self) -> Result<Profile, ProfileError> {
        Ok(Profile {
            id: Identity(self.id),
            email: EmailAddress::new(self.email)?,
            display_name: DisplayName::new(self.display_name)?,
        })
    }
}

pub struct SqliteProfileRepository {
    pool: SqlitePool,
}

impl SqliteProfileRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for SqliteProfileRepository {
    async fn create(&self, profile: Profile) -> Result<Profile, ProfileError> {
        sqlx::query("INSERT INTO profiles (id, email, display_name) VALUES (?1, ?2, ?3)")
            .bind(profile.id.as_i64())
            .bind(profile.email.as_str())
            .bind(profile.display_name.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                // Creation pre-checks, but concurrent requests can still race
                // into the unique constraints.
                if e.as_database_error()
                    .map_or(false, |db_err| db_err.is_unique_violation())
                {
                    ProfileError::DuplicateEmail(profile.email.to_string())
                } else {
                    ProfileError::DatabaseError(e.to_string())
                }
            })?;

        Ok(profile)
    }

    async fn find_by_id(&self, id: Identity) -> Result<Option<Profile>, ProfileError> {
        let row = sqlx::query_as::<_, ProfileRow>(
            "SELECT id, email, display_name FROM profiles WHERE id = ?1",
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ProfileError::DatabaseError(e.to_string()))?;

        row.map(ProfileRow::into_profile).transpose()
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Profile>, ProfileError> {
        let row = sqlx::query_as::<_, ProfileRow>(
            "SELECT id, email, display_name FROM profiles WHERE email = ?1",
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ProfileError::DatabaseError(e.to_string()))?;

        row.map(ProfileRow::into_profile).transpose()
    }

    async fn update(&self, profile: Profile) -> Result<Profile, ProfileError> {
        sqlx::query("UPDATE profiles SET email = ?1, display_name = ?2 WHERE id = ?3")
            .bind(profile.email.as_str())
            .bind(profile.display_name.as_str())
            .bind(profile.id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if e.as_database_error()
                    .map_or(false, |db_err| db_err.is_unique_violation())
                {
                    ProfileError::DuplicateEmail(profile.email.to_string())
                } else {
                    ProfileError::DatabaseError(e.to_string())
                }
            })?;

        Ok(profile)
    }

    async fn delete(&self, id: Identity) -> Result<(), ProfileError> {
        sqlx::query("DELETE FROM profiles WHERE id = ?1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| ProfileError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
