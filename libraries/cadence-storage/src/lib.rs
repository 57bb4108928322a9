//! Cadence Storage
//!
//! `SQLite` implementation of the rating, star and scrobble collaborators.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: each table owns its queries (`library_items`,
//!   `annotations`, `scrobbles`)
//! - **Not found is explicit**: unknown ids surface as `StorageError::NotFound`
//!   and convert into `CoreError::NotFound`
//! - **Transient now playing**: kept in memory by [`NowPlayingRegistry`]
//!
//! # Example
//!
//! ```rust,no_run
//! use cadence_storage::{create_pool, run_migrations, LocalAnnotationStore};
//! use cadence_core::RatingService;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://cadence.db").await?;
//! run_migrations(&pool).await?;
//!
//! let store = LocalAnnotationStore::new(pool);
//! store.set_rating("track-1", 4).await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;
mod now_playing;

// Vertical slices
pub mod annotations;
pub mod library_items;
pub mod scrobbles;

pub use context::LocalAnnotationStore;
pub use error::{Result, StorageError};
pub use now_playing::NowPlayingRegistry;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://cadence.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!("Creating pool with URL: {}", database_url);

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal) // WAL lets readers proceed during scrobble writes
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}
