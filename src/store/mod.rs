//! Key-value blob store: arbitrary JSON keyed by string, last write wins.
//!
//! The store itself reports failures as [`DbError`]; the feature layers
//! built on top of it mask read failures to empty defaults so the caller
//! always has a renderable value.

use diesel::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::db::{DbError, KvEntry, schema};

/// Storage keys used by the companion features.
pub mod keys {
    /// Journal entries, stored as one JSON array.
    pub const JOURNAL_ENTRIES: &str = "elephant_journal_entries";
    /// Id of the fact chosen for today.
    pub const DAILY_FACT: &str = "elephant_daily_fact";
    /// Date string the daily fact was chosen on.
    pub const LAST_FACT_DATE: &str = "elephant_last_fact_date";
    /// Expedition log, stored as one JSON array.
    pub const EXPEDITIONS: &str = "elephant_expeditions";
    /// Per-round memory game results.
    pub const MEMORY_STATS: &str = "elephant_memory_stats";
    /// Badge progress counters and earned badge ids.
    pub const BADGES: &str = "elephant_badges";
}

/// JSON blob store over the `kv_entries` table.
#[derive(Debug, Clone)]
pub struct KvStore {
    db_path: String,
}

impl KvStore {
    /// Creates a store backed by the database at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the path is invalid.
    #[instrument(skip(db_path), fields(db_path = %db_path))]
    pub fn new(db_path: String) -> Result<Self, DbError> {
        Ok(Self { db_path })
    }

    /// Establishes a database connection.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, DbError> {
        SqliteConnection::establish(&self.db_path)
            .map_err(|e| DbError::new(format!("Failed to connect to '{}': {}", self.db_path, e)))
    }

    /// Reads the JSON value stored under `key`, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] on a database error or undecodable stored JSON.
    #[instrument(skip(self))]
    pub fn get(&self, key: &str) -> Result<Option<serde_json::Value>, DbError> {
        let mut conn = self.connection()?;

        let raw = schema::kv_entries::table
            .filter(schema::kv_entries::key.eq(key))
            .select(schema::kv_entries::value)
            .first::<String>(&mut conn)
            .optional()?;

        match raw {
            Some(raw) => {
                debug!(key, "Key-value entry loaded");
                Ok(Some(serde_json::from_str(&raw)?))
            }
            None => {
                debug!(key, "Key-value entry absent");
                Ok(None)
            }
        }
    }

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self, value))]
    pub fn set(&self, key: &str, value: &serde_json::Value) -> Result<(), DbError> {
        let mut conn = self.connection()?;

        let entry = KvEntry::new(key.to_string(), value.to_string());
        diesel::insert_into(schema::kv_entries::table)
            .values(&entry)
            .on_conflict(schema::kv_entries::key)
            .do_update()
            .set(schema::kv_entries::value.eq(entry.value().as_str()))
            .execute(&mut conn)?;

        debug!(key, "Key-value entry stored");
        Ok(())
    }

    /// Deletes the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn remove(&self, key: &str) -> Result<(), DbError> {
        let mut conn = self.connection()?;

        diesel::delete(schema::kv_entries::table.filter(schema::kv_entries::key.eq(key)))
            .execute(&mut conn)?;

        debug!(key, "Key-value entry removed");
        Ok(())
    }

    /// Reads and deserializes the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] on a database error or a shape mismatch.
    #[instrument(skip(self))]
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, DbError> {
        match self.get(key)? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Serializes and stores `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if serialization or the write fails.
    #[instrument(skip(self, value))]
    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), DbError> {
        let value = serde_json::to_value(value)?;
        self.set(key, &value)
    }
}
