/**
 * PostgreSQL Credential Store
 *
 * Identity records live in the `users` table created by the migrations in
 * `migrations/`. Email uniqueness is the `users_email_key` constraint, so two
 * concurrent inserts of the same email cannot both succeed.
 */

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::auth::users::{CredentialStore, StoreError, User, UserPatch};

const USER_COLUMNS: &str =
    "id, username, email, password_hash, profile_picture_ref, created_at, updated_at";

/// Credential store backed by a PostgreSQL pool
#[derive(Clone)]
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map a sqlx error onto the store contract.
///
/// Unique violations become `DuplicateEmail`; the only unique index on
/// `users` besides the primary key is the email constraint, and ids are
/// freshly generated v4 UUIDs.
fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return StoreError::DuplicateEmail;
        }
    }
    tracing::error!("Database error: {:?}", err);
    StoreError::Unavailable(err.to_string())
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn create(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let query = format!(
            r#"
            INSERT INTO users (id, username, email, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {USER_COLUMNS}
            "#
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(username)
            .bind(email)
            .bind(password_hash)
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn update(&self, id: Uuid, patch: &UserPatch) -> Result<User, StoreError> {
        // A single statement: the row changes completely or not at all.
        let query = format!(
            r#"
            UPDATE users
            SET username = COALESCE($2, username),
                email = COALESCE($3, email),
                password_hash = COALESCE($4, password_hash),
                profile_picture_ref = COALESCE($5, profile_picture_ref),
                updated_at = $6
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(patch.username.as_deref())
            .bind(patch.email.as_deref())
            .bind(patch.password_hash.as_deref())
            .bind(patch.profile_picture_ref.as_deref())
            .bind(Utc::now())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or(StoreError::NotFound)
    }
}
