//! Repository for the sighting pin table.

use chrono::{TimeZone, Utc};
use diesel::prelude::*;
use tracing::{debug, info, instrument};

use crate::db::{DbError, NewPin, Pin, schema};

/// Repository for inserting and reading sighting pins.
#[derive(Debug, Clone)]
pub struct PinRepository {
    db_path: String,
}

impl PinRepository {
    /// Creates a repository connected to the database at the given path.
    ///
    /// Use `":memory:"` for an in-memory database (useful for tests).
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the path is invalid.
    #[instrument(skip(db_path), fields(db_path = %db_path))]
    pub fn new(db_path: String) -> Result<Self, DbError> {
        info!(path = %db_path, "Creating PinRepository");
        Ok(Self { db_path })
    }

    /// Establishes a database connection.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, DbError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path)
            .map_err(|e| DbError::new(format!("Failed to connect to '{}': {}", self.db_path, e)))
    }

    /// Records a new sighting pin.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self, pin), fields(title = %pin.title(), herd_size = pin.herd_size()))]
    pub fn insert_pin(&self, pin: NewPin) -> Result<Pin, DbError> {
        debug!("Recording sighting pin");
        let mut conn = self.connection()?;

        let pin = diesel::insert_into(schema::pins::table)
            .values(&pin)
            .returning(Pin::as_returning())
            .get_result(&mut conn)?;

        info!(pin_id = pin.id(), title = %pin.title(), "Sighting pin recorded");
        Ok(pin)
    }

    /// Reads the full pin table, most recent sighting first.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn list_pins(&self) -> Result<Vec<Pin>, DbError> {
        debug!("Loading all sighting pins");
        let mut conn = self.connection()?;

        let pins = schema::pins::table
            .order(schema::pins::sighted_at.desc())
            .load::<Pin>(&mut conn)?;

        info!(count = pins.len(), "Sighting pins loaded");
        Ok(pins)
    }

    /// Counts the pins in the table.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn count_pins(&self) -> Result<i64, DbError> {
        let mut conn = self.connection()?;
        let count = schema::pins::table.count().get_result(&mut conn)?;
        Ok(count)
    }

    /// Seeds two demonstration sightings when the table is empty.
    ///
    /// Returns how many pins were inserted (0 or 2).
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn seed_demo_pins(&self) -> Result<usize, DbError> {
        if self.count_pins()? > 0 {
            debug!("Pin table already populated, skipping demo seed");
            return Ok(0);
        }

        let demo = [
            NewPin::at(
                -1.286389,
                36.817223,
                "Nairobi National Park".to_string(),
                "Saw a large herd near the entrance.".to_string(),
                12,
                Utc.with_ymd_and_hms(2023, 10, 26, 10, 0, 0).single().ok_or_else(|| {
                    DbError::new("Invalid demo timestamp")
                })?,
            ),
            NewPin::at(
                -3.386925,
                36.682995,
                "Lake Manyara".to_string(),
                "A small family group by the water.".to_string(),
                5,
                Utc.with_ymd_and_hms(2023, 10, 25, 15, 30, 0).single().ok_or_else(|| {
                    DbError::new("Invalid demo timestamp")
                })?,
            ),
        ];

        for pin in demo {
            self.insert_pin(pin)?;
        }
        info!("Demo sighting pins seeded");
        Ok(2)
    }
}
