use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

use super::error::{ConfigError, parse_or};

const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

/// Database settings read from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub migrations_path: String,
}

impl DatabaseSettings {
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string (required)
    /// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
    /// - MIGRATIONS_PATH: sqlx migrations directory (default: "infrastructure/persistence/migrations")
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingVariable("DATABASE_URL"))?;
        let max_connections = parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5_u32)?;
        let migrations_path =
            lookup("MIGRATIONS_PATH").unwrap_or_else(|| DEFAULT_MIGRATIONS_PATH.to_string());

        Ok(Self {
            url,
            max_connections,
            migrations_path,
        })
    }
}

/// Initialize database connection pool from environment variables and
/// bring the schema up to date
///
/// # Errors
/// Returns error if DATABASE_URL is not set, the connection fails or a
/// migration cannot be applied
pub async fn init_database() -> anyhow::Result<PgPool> {
    let settings = DatabaseSettings::from_lookup(|name| env::var(name).ok())?;

    let config = DatabaseConfig::new(settings.url).with_max_connections(settings.max_connections);
    let pool = create_postgres_pool(&config).await?;

    run_migrations(&pool, &settings.migrations_path).await?;
    tracing::info!("Database migrations applied from {}", settings.migrations_path);

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_require_database_url() {
        let result = DatabaseSettings::from_lookup(|_| None);
        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingVariable("DATABASE_URL")
        );
    }

    #[test]
    fn should_apply_defaults() {
        let settings = DatabaseSettings::from_lookup(|name| {
            (name == "DATABASE_URL").then(|| "postgres://localhost/storefront".to_string())
        })
        .unwrap();

        assert_eq!(settings.max_connections, 5);
        assert_eq!(settings.migrations_path, DEFAULT_MIGRATIONS_PATH);
    }

    #[test]
    fn should_reject_non_numeric_pool_size() {
        let result = DatabaseSettings::from_lookup(|name| match name {
            "DATABASE_URL" => Some("postgres://localhost/storefront".to_string()),
            "DATABASE_MAX_CONNECTIONS" => Some("many".to_string()),
            _ => None,
        });
        assert_eq!(
            result.unwrap_err(),
            ConfigError::InvalidVariable("DATABASE_MAX_CONNECTIONS")
        );
    }
}
