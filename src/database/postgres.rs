//! PostgreSQL implementation for account repository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::{ApplicationError, Result};
use crate::model::{AccountModel, AddAccountModel};
use crate::ports::AddAccountRepository;

/// PostgreSQL account repository.
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    /// Create a new [`PgAccountRepository`].
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AddAccountRepository for PgAccountRepository {
    async fn add(&self, account: AddAccountModel) -> Result<AccountModel> {
        sqlx::query_as::<_, AccountModel>(
            r#"
            INSERT INTO accounts (id, name, email, password)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, password
            "#,
        )
        .bind(super::generate_id())
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.password)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match err {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                ApplicationError::EmailAlreadyInUse
            },
            err => ApplicationError::internal(err),
        })
    }
}
