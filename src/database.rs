//! Account storage.
//!
//! PostgreSQL when configured, process memory otherwise.

pub mod memory;
pub mod postgres;

use rand::distributions::{Alphanumeric, DistString};
use rand::rngs::OsRng;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::Postgres;
use crate::ports::AddAccountRepository;

pub use memory::MemoryAccountRepository;
pub use postgres::PgAccountRepository;

pub const DEFAULT_CREDENTIALS: &str = "postgres";
pub const DEFAULT_DATABASE_NAME: &str = "signup";
pub const DEFAULT_POOL_SIZE: u32 = 10;

const ID_LENGTH: usize = 24;

/// Errors raised while opening the account storage.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("cannot connect to postgres: {0}")]
    Connection(#[from] sqlx::Error),
    #[error("cannot run migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Open a PostgreSQL pool.
pub async fn connect(config: &Postgres) -> Result<PgPool, sqlx::Error> {
    let username = config.username.as_deref().unwrap_or(DEFAULT_CREDENTIALS);
    let password = config.password.as_deref().unwrap_or(DEFAULT_CREDENTIALS);
    let db = config.database.as_deref().unwrap_or(DEFAULT_DATABASE_NAME);
    let hostname = &config.address;

    let addr = format!("postgres://{username}:{password}@{hostname}/{db}");
    let postgres = PgPoolOptions::new()
        .max_connections(config.pool_size.unwrap_or(DEFAULT_POOL_SIZE))
        .connect(&addr)
        .await?;

    tracing::info!(%hostname, %db, "postgres connected");

    Ok(postgres)
}

/// Build the account repository matching `config`.
pub async fn repository(
    config: Option<&Postgres>,
) -> Result<Box<dyn AddAccountRepository>, DatabaseError> {
    match config {
        Some(config) => {
            let pool = connect(config).await?;
            // execute migrations scripts on start.
            sqlx::migrate!().run(&pool).await?;

            Ok(Box::new(PgAccountRepository::new(pool)))
        },
        None => {
            tracing::warn!(
                "missing `postgres` entry on `config.yaml` file, accounts are kept in memory"
            );

            Ok(Box::new(MemoryAccountRepository::default()))
        },
    }
}

/// Random account identifier.
pub(crate) fn generate_id() -> String {
    Alphanumeric.sample_string(&mut OsRng, ID_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id() {
        let id = generate_id();

        assert_eq!(id.len(), ID_LENGTH);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(id, generate_id());
    }

    #[tokio::test]
    async fn test_repository_without_postgres() {
        assert!(repository(None).await.is_ok());
    }
}
