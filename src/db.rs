use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{ConnectOptions, SqlitePool};
use sqlx_migrator::{Migrate, Plan};
use std::str::FromStr;
use std::time::Duration;
use tracing::log::LevelFilter;

use crate::config::DatabaseConfig;

/// Configure SQLite PRAGMAs for WAL mode
///
/// - WAL mode enables concurrent reads and writes
/// - busy_timeout reduces SQLITE_BUSY errors
/// - synchronous=NORMAL is safe with WAL
/// - temp_store=memory speeds up temporary table operations
async fn configure_pragmas(pool: &SqlitePool) -> Result<()> {
    sqlx::query("PRAGMA journal_mode = WAL")
        .execute(pool)
        .await?;
    sqlx::query("PRAGMA busy_timeout = 5000")
        .execute(pool)
        .await?;
    sqlx::query("PRAGMA synchronous = NORMAL")
        .execute(pool)
        .await?;
    sqlx::query("PRAGMA temp_store = memory")
        .execute(pool)
        .await?;

    Ok(())
}

/// Create the process-wide pool shared by every request
///
/// The database file is created if it does not exist. Fails if the first
/// connection cannot be established within `connect_timeout`.
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
    connect_timeout: Duration,
) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .log_statements(LevelFilter::Debug);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(connect_timeout)
        .connect_with(options)
        .await?;

    configure_pragmas(&pool).await?;

    tracing::info!("Created pool with {} max connections", max_connections);

    Ok(pool)
}

/// Apply every pending schema migration
pub async fn migrate(pool: &SqlitePool) -> Result<()> {
    let mut conn = pool.acquire().await?;
    mailroom_db::migrator()?
        .run(&mut *conn, &Plan::apply_all())
        .await?;

    Ok(())
}

/// Open the pool and bring the schema up to date
///
/// The service must not accept requests without a usable store, so any
/// failure here is returned before a listener is bound.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool> {
    let pool = match create_pool(
        &config.url,
        config.max_connections,
        Duration::from_secs(config.connect_timeout_secs),
    )
    .await
    {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Database connection error: {e:#}");
            return Err(e);
        }
    };

    if let Err(e) = migrate(&pool).await {
        tracing::error!("Database migration error: {e:#}");
        pool.close().await;
        return Err(e);
    }

    tracing::info!("Connected to database");

    Ok(pool)
}
