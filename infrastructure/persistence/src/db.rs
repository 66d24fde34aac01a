use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{path::Path, time::Duration};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.migration_error")]
    MigrationError,
}

/// Configuration for the database connection
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections.max(1);
        self
    }
}

/// Creates a PostgreSQL connection pool
pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(|e| {
            tracing::error!("Failed to connect to database: {}", e);
            DatabaseError::ConnectionError
        })?;

    Ok(pool)
}

/// Runs database migrations from the specified directory
pub async fn run_migrations(pool: &PgPool, migrations_path: &str) -> Result<(), DatabaseError> {
    let path = Path::new(migrations_path);

    if !path.exists() {
        tracing::error!("Migrations directory not found: {}", migrations_path);
        return Err(DatabaseError::MigrationError);
    }

    sqlx::migrate::Migrator::new(path)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load migrations: {}", e);
            DatabaseError::MigrationError
        })?
        .run(pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to run migrations: {}", e);
            DatabaseError::MigrationError
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_defaults() {
        let config = DatabaseConfig::new("postgres://localhost/storefront".to_string());
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.acquire_timeout, Duration::from_secs(30));
    }

    #[test]
    fn should_never_configure_empty_pool() {
        let config =
            DatabaseConfig::new("postgres://localhost/storefront".to_string()).with_max_connections(0);
        assert_eq!(config.max_connections, 1);
    }

    #[tokio::test]
    async fn should_fail_on_malformed_connection_string() {
        let config = DatabaseConfig::new("not a url".to_string());
        let result = create_postgres_pool(&config).await;
        assert!(matches!(result, Err(DatabaseError::ConnectionError)));
    }

    #[tokio::test]
    async fn should_fail_when_migrations_directory_missing() {
        let pool = PgPool::connect_lazy("postgres://localhost/storefront").unwrap();
        let result = run_migrations(&pool, "does/not/exist").await;
        assert!(matches!(result, Err(DatabaseError::MigrationError)));
    }
}
