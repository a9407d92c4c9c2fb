//! Database layer
//!
//! SQLite-backed persistence: pool setup, models, repositories.

pub mod models;
pub mod repository;

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Connect a pool to `database_url` and apply pending migrations.
///
/// In-memory URLs are pinned to a single connection: each pooled
/// connection to `sqlite::memory:` opens its own empty database.
pub async fn connect(database_url: &str) -> Result<SqlitePool, BoxError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}
