use std::time::Duration;

use anyhow::Result;
use mailroom::Config;
use sqlx::{Sqlite, migrate::MigrateDatabase};

#[tracing::instrument(skip(config))]
pub async fn migrate(config: Config) -> Result<()> {
    tracing::info!("Running database migrations...");

    if !Sqlite::database_exists(&config.database.url).await? {
        tracing::info!("Database does not exist, creating: {}", config.database.url);
        Sqlite::create_database(&config.database.url).await?;
    }

    let pool = mailroom::db::create_pool(
        &config.database.url,
        1,
        Duration::from_secs(config.database.connect_timeout_secs),
    )
    .await?;

    mailroom::db::migrate(&pool).await?;
    pool.close().await;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

#[tracing::instrument(skip(config))]
pub async fn reset(config: Config) -> Result<()> {
    tracing::info!("Resetting database...");

    if Sqlite::database_exists(&config.database.url).await? {
        tracing::warn!("Dropping existing database: {}", config.database.url);
        Sqlite::drop_database(&config.database.url).await?;
        tracing::info!("Database dropped successfully");
    } else {
        tracing::info!("Database does not exist, nothing to drop");
    }

    migrate(config).await?;

    tracing::info!("Database reset completed successfully");

    Ok(())
}
