//! Database models for sighting pins and key-value entries.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;

use crate::db::{DbError, schema};

/// A recorded elephant sighting on the map.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Getters)]
#[diesel(table_name = schema::pins)]
pub struct Pin {
    id: i32,
    latitude: f64,
    longitude: f64,
    title: String,
    description: String,
    herd_size: i32,
    sighted_at: String,
}

impl Pin {
    /// Parses the stored ISO-8601 sighting timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the stored string is not valid RFC 3339.
    pub fn sighted_at_parsed(&self) -> Result<DateTime<Utc>, DbError> {
        DateTime::parse_from_rfc3339(self.sighted_at())
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| DbError::new(format!("Invalid timestamp '{}': {}", self.sighted_at, e)))
    }
}

/// Insertable pin model for recording new sightings.
#[derive(Debug, Clone, Insertable, new, Getters)]
#[diesel(table_name = schema::pins)]
pub struct NewPin {
    latitude: f64,
    longitude: f64,
    title: String,
    description: String,
    herd_size: i32,
    sighted_at: String,
}

impl NewPin {
    /// Builds a pin sighted at the given instant, stored as RFC 3339.
    pub fn at(
        latitude: f64,
        longitude: f64,
        title: String,
        description: String,
        herd_size: i32,
        sighted_at: DateTime<Utc>,
    ) -> Self {
        Self::new(
            latitude,
            longitude,
            title,
            description,
            herd_size,
            sighted_at.to_rfc3339(),
        )
    }
}

/// Raw key-value row: a JSON blob keyed by string.
#[derive(Debug, Clone, Queryable, Insertable, Selectable, new, Getters)]
#[diesel(table_name = schema::kv_entries)]
pub struct KvEntry {
    key: String,
    value: String,
}
