//! SQLite persistence layer: sighting pins and the key-value blob table.

mod error;
mod models;
mod repository;
pub(crate) mod schema; // Diesel generated schema - internal use only

pub use error::DbError;
pub use models::{KvEntry, NewPin, Pin};
pub use repository::PinRepository;

use diesel::Connection;
use diesel::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{info, instrument};

/// Migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Applies any pending migrations to the database at `db_path`.
///
/// # Errors
///
/// Returns [`DbError`] if the connection or a migration fails.
#[instrument(skip(db_path), fields(db_path = %db_path))]
pub fn run_migrations(db_path: &str) -> Result<(), DbError> {
    let mut conn = SqliteConnection::establish(db_path)?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| DbError::new(format!("Migration error: {}", e)))?;
    if !applied.is_empty() {
        info!(count = applied.len(), "Applied pending migrations");
    }
    Ok(())
}
