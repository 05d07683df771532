use std::str::FromStr;

use anyhow::Result;
use serde::Deserialize;
use sqlx::{
    migrate::Migrator,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};

pub static MIGRATOR: Migrator = sqlx::migrate!("db/migrations");

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    5
}

/// Opens a pool on `settings.url`, creating the database file if needed, and
/// brings the schema up to date.
pub async fn create_pool(settings: &Settings) -> Result<SqlitePool> {
    let connect_options = SqliteConnectOptions::from_str(&settings.url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(connect_options)
        .await?;
    tracing::info!(url = %settings.url, "Connected to sqlite");

    MIGRATOR.run(&pool).await?;
    tracing::info!("Migrations complete");

    Ok(pool)
}
