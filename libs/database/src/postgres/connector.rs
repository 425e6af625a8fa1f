use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::PostgresConfig;
use crate::common::{RetryConfig, retry, retry_with_backoff};

/// Connect to PostgreSQL with the default pool settings of [`PostgresConfig`]
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    connect_with_options(PostgresConfig::new(database_url).into_connect_options()).await
}

/// Connect with custom connection options
pub async fn connect_with_options(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(options).await?;
    info!("Successfully connected to PostgreSQL database");
    Ok(db)
}

/// Connect from config, retrying with exponential backoff on failure.
///
/// Passing `None` uses [`RetryConfig::default`].
pub async fn connect_from_config_with_retry(
    config: PostgresConfig,
    retry_config: Option<RetryConfig>,
) -> Result<DatabaseConnection, DbErr> {
    let options = config.into_connect_options();
    let attempt = || connect_with_options(options.clone());

    match retry_config {
        Some(policy) => retry_with_backoff(attempt, policy).await,
        None => retry(attempt).await,
    }
}

/// Apply every pending migration of `M`
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> Result<(), DbErr> {
    info!(app = app_name, "Running database migrations");
    M::up(db, None).await?;
    info!(app = app_name, "Migrations completed");
    Ok(())
}
