//! Seed script - wipes and refills the library tables.
//!
//! Run with:
//! ```
//! LIBRARY_AUTHORS_COUNT=5 LIBRARY_BOOKS_COUNT=10 LIBRARY_BORROWERS_COUNT=20 \
//!     cargo run -p seed-data --bin seed
//! ```

use anyhow::Context;
use library::Database;
use rand::SeedableRng;
use rand::rngs::StdRng;
use seed_data::config::{ConfigError, DatabaseConfig, SeedConfig};
use seed_data::db::Seeder;
use seed_data::generators::FakeContent;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    log_failure(run(SeedConfig::from_env(), DatabaseConfig::from_env()).await)
}

/// Logs the full error chain of a failed run before it reaches the exit status.
fn log_failure<T>(result: anyhow::Result<T>) -> anyhow::Result<T> {
    if let Err(e) = &result {
        tracing::error!("Seed failed: {e:#}");
    }
    result
}

async fn run(
    config: Result<SeedConfig, ConfigError>,
    database: DatabaseConfig,
) -> anyhow::Result<()> {
    let config = config.context("Invalid seed configuration")?;
    tracing::info!(?config, "Loaded seed configuration");

    let options = database
        .connect_options()
        .context("Invalid database configuration")?;
    tracing::info!(
        "Connecting to database {} at {}:{}",
        options.get_database().unwrap_or_default(),
        options.get_host(),
        options.get_port()
    );

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    tracing::info!("Connected to database");

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let content = FakeContent::new(config.locale);

    Seeder::new(pool.clone())
        .run(&config, &content, &mut rng)
        .await
        .context("Seeding failed, nothing was committed")?;

    let counts = Database::new(pool).table_counts().await?;

    tracing::info!(
        "Database filled successfully with random data ({} locale)",
        config.locale.as_str()
    );
    tracing::info!("  Authors: {}", counts.authors);
    tracing::info!("  Books: {}", counts.books);
    tracing::info!("  Borrowers: {}", counts.borrowers);

    Ok(())
}
