use crate::error::{AccountError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub user_idx: i64,
    pub email: String,
    pub hashed_password: String,
    pub salt: String,
    pub profile: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    async fn create(&self, email: &str, hashed_password: &str, salt: &str) -> Result<i64>;
    async fn update_password(&self, email: &str, hashed_password: &str, salt: &str)
        -> Result<()>;
}

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT user_idx, email, hashed_password, salt, profile, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn create(&self, email: &str, hashed_password: &str, salt: &str) -> Result<i64> {
        let user_idx = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (email, hashed_password, salt)
            VALUES ($1, $2, $3)
            RETURNING user_idx
            "#,
        )
        .bind(email)
        .bind(hashed_password)
        .bind(salt)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AccountError::DuplicateEmail;
                }
            }
            AccountError::Database(e.to_string())
        })?;

        Ok(user_idx)
    }

    async fn update_password(
        &self,
        email: &str,
        hashed_password: &str,
        salt: &str,
    ) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET hashed_password = $1, salt = $2, updated_at = NOW()
            WHERE email = $3
            "#,
        )
        .bind(hashed_password)
        .bind(salt)
        .bind(email)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
