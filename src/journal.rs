//! Free-text field journal persisted through the key-value store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::db::DbError;
use crate::store::{KvStore, keys};

/// One journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Stable entry id, derived from the creation time.
    pub id: String,
    /// When the entry was written.
    pub date: DateTime<Utc>,
    /// Entry title; never empty.
    pub title: String,
    /// Entry body.
    pub content: String,
}

/// Journal over the key-value store.
///
/// Reads fail open: a storage error is logged and surfaces as an empty
/// journal rather than an error, so there is always something to render.
#[derive(Debug, Clone)]
pub struct Journal {
    store: KvStore,
}

impl Journal {
    /// Creates a journal over the given store.
    pub fn new(store: KvStore) -> Self {
        Self { store }
    }

    /// Loads all entries, newest first. Storage failures yield an empty list.
    #[instrument(skip(self))]
    pub fn entries(&self) -> Vec<JournalEntry> {
        let mut entries = match self.store.get_json::<Vec<JournalEntry>>(keys::JOURNAL_ENTRIES) {
            Ok(entries) => entries.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "Failed to load journal entries, treating as empty");
                Vec::new()
            }
        };
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries
    }

    /// Adds a new entry, returning it.
    ///
    /// An empty or whitespace title is replaced with "Untitled Entry".
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the write fails.
    #[instrument(skip(self, content))]
    pub fn add(&self, title: &str, content: &str) -> Result<JournalEntry, DbError> {
        let now = Utc::now();
        let title = title.trim();
        let entry = JournalEntry {
            id: now.timestamp_micros().to_string(),
            date: now,
            title: if title.is_empty() {
                "Untitled Entry".to_string()
            } else {
                title.to_string()
            },
            content: content.trim().to_string(),
        };

        let mut entries = self.entries();
        entries.insert(0, entry.clone());
        self.store.set_json(keys::JOURNAL_ENTRIES, &entries)?;

        info!(id = %entry.id, title = %entry.title, "Journal entry added");
        Ok(entry)
    }

    /// Rewrites the entry with the given id, keeping its id and date.
    ///
    /// Returns the updated entry, or `None` when no entry has that id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the write fails.
    #[instrument(skip(self, content))]
    pub fn update(
        &self,
        id: &str,
        title: &str,
        content: &str,
    ) -> Result<Option<JournalEntry>, DbError> {
        let mut entries = self.entries();
        let Some(entry) = entries.iter_mut().find(|e| e.id == id) else {
            debug!(id, "No journal entry to update");
            return Ok(None);
        };

        let title = title.trim();
        entry.title = if title.is_empty() {
            "Untitled Entry".to_string()
        } else {
            title.to_string()
        };
        entry.content = content.trim().to_string();
        let updated = entry.clone();

        self.store.set_json(keys::JOURNAL_ENTRIES, &entries)?;
        info!(id, "Journal entry updated");
        Ok(Some(updated))
    }

    /// Deletes the entry with the given id. Returns whether one was removed.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the write fails.
    #[instrument(skip(self))]
    pub fn delete(&self, id: &str) -> Result<bool, DbError> {
        let mut entries = self.entries();
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            debug!(id, "No journal entry to delete");
            return Ok(false);
        }

        self.store.set_json(keys::JOURNAL_ENTRIES, &entries)?;
        info!(id, "Journal entry deleted");
        Ok(true)
    }

    /// Number of entries written.
    pub fn count(&self) -> usize {
        self.entries().len()
    }
}
