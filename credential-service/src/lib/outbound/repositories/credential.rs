use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::credential::errors::CredentialError;
use crate::credential::models::Credential;
use crate::credential::models::CredentialId;
use crate::credential::models::EmailAddress;
use crate::credential::ports::CredentialRepository;

#[derive(sqlx::FromRow)]
struct CredentialRow {
    id: i64,
    email: String,
    password_hash: String,
}

pub struct SqliteCredentialRepository {
    pool: SqlitePool,
}

impl SqliteCredentialRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialRepository for SqliteCredentialRepository {
    async fn create(
        &self,
        email: &EmailAddress,
        password_hash: &str,
    ) -> Result<Credential, CredentialError> {
        let result = sqlx::query("INSERT INTO credentials (email, password_hash) VALUES (?1, ?2)")
            .bind(email.as_str())
            .bind(password_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                // Registration pre-checks, but concurrent registrations can
                // still race into the unique constraint.
                if e.as_database_error()
                    .map_or(false, |db_err| db_err.is_unique_violation())
                {
                    CredentialError::DuplicateEmail(email.to_string())
                } else {
                    CredentialError::DatabaseError(e.to_string())
                }
            })?;

        Ok(Credential {
            id: CredentialId(result.last_insert_rowid()),
            email: email.clone(),
            password_hash: password_hash.to_string(),
        })
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Credential>, CredentialError> {
        let row = sqlx::query_as::<_, CredentialRow>(
            "SELECT id, email, password_hash FROM credentials WHERE email = ?1",
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CredentialError::DatabaseError(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(Credential {
                id: CredentialId(r.id),
                email: EmailAddress::new(r.email)?,
                password_hash: r.password_hash,
            })),
            None => Ok(None),
        }
    }
}
