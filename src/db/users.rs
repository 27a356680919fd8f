/// User database operations
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::error::Result;
use crate::models::{NewUser, User, UserUpdate};

/// Storage interface for user records.
///
/// Each operation is a single round trip to the store: no transactions,
/// no batching, no retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user; the store assigns the id.
    async fn insert(&self, user: NewUser, created: DateTime<Utc>) -> Result<User>;

    /// Fetch a user by id.
    async fn find_by_id(&self, id: i32) -> Result<Option<User>>;

    /// Apply a partial update keyed by id; `created` is never altered.
    /// Returns the updated row, or `None` when the id does not exist.
    async fn update(&self, id: i32, changes: UserUpdate) -> Result<Option<User>>;
}

/// PostgreSQL-backed repository over a shared connection pool.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn insert(&self, user: NewUser, created: DateTime<Utc>) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (firstname, lastname, email, age, created)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, firstname, lastname, email, age, created
            "#,
        )
        .bind(&user.firstname)
        .bind(&user.lastname)
        .bind(&user.email)
        .bind(user.age)
        .bind(created)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, firstname, lastname, email, age, created FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn update(&self, id: i32, changes: UserUpdate) -> Result<Option<User>> {
        // COALESCE keeps absent fields unchanged so a partial update stays
        // one round trip
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET firstname = COALESCE($2, firstname),
                lastname  = COALESCE($3, lastname),
                email     = COALESCE($4, email),
                age       = COALESCE($5, age)
            WHERE id = $1
            RETURNING id, firstname, lastname, email, age, created
            "#,
        )
        .bind(id)
        .bind(changes.firstname)
        .bind(changes.lastname)
        .bind(changes.email)
        .bind(changes.age)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
