//! Expedition log: planned and simulated field trips with checklists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::{debug, info, instrument, warn};

use crate::db::DbError;
use crate::store::{KvStore, keys};

/// Whether an expedition happened in the field or as a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ExpeditionKind {
    /// A real outing.
    Real,
    /// A simulated run-through.
    Simulation,
}

/// Lifecycle of an expedition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ExpeditionStatus {
    /// Still underway.
    InProgress,
    /// Wrapped up.
    Completed,
}

/// One checklist task on an expedition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Task description.
    pub task: String,
    /// Whether the task is done.
    pub completed: bool,
}

/// One logged expedition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expedition {
    /// Stable expedition id.
    pub id: String,
    /// Expedition title.
    pub title: String,
    /// Field trip or simulation.
    pub kind: ExpeditionKind,
    /// When the expedition started.
    pub start_date: DateTime<Utc>,
    /// When the expedition finished, once completed.
    pub end_date: Option<DateTime<Utc>>,
    /// Where it took place.
    pub location: String,
    /// Free-text duration, e.g. "3 days".
    pub duration: String,
    /// Who came along.
    pub team_members: Vec<String>,
    /// Free-text notes.
    pub notes: String,
    /// Field tasks for the trip.
    pub checklist: Vec<ChecklistItem>,
    /// Current status.
    pub status: ExpeditionStatus,
}

/// Aggregate counts over the expedition log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpeditionStats {
    /// All expeditions logged.
    pub total: usize,
    /// Expeditions completed.
    pub completed: usize,
    /// Expeditions still underway.
    pub in_progress: usize,
    /// Real outings.
    pub real: usize,
    /// Simulated runs.
    pub simulations: usize,
}

/// The default field checklist every new expedition starts with.
pub fn default_checklist() -> Vec<ChecklistItem> {
    [
        "Spotted herd",
        "Made camp",
        "Observed behavior",
        "Documented findings",
        "Checked for signs of poaching",
        "Monitored water sources",
    ]
    .into_iter()
    .map(|task| ChecklistItem {
        task: task.to_string(),
        completed: false,
    })
    .collect()
}

/// Expedition log over the key-value store. Reads fail open to empty.
#[derive(Debug, Clone)]
pub struct ExpeditionLog {
    store: KvStore,
}

impl ExpeditionLog {
    /// Creates a log over the given store.
    pub fn new(store: KvStore) -> Self {
        Self { store }
    }

    /// Loads all expeditions, newest first. Failures yield an empty list.
    #[instrument(skip(self))]
    pub fn list(&self) -> Vec<Expedition> {
        match self.store.get_json::<Vec<Expedition>>(keys::EXPEDITIONS) {
            Ok(expeditions) => expeditions.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "Failed to load expeditions, treating as empty");
                Vec::new()
            }
        }
    }

    /// Starts a new expedition with the default checklist.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the write fails.
    #[instrument(skip(self, notes, team_members))]
    pub fn add(
        &self,
        title: &str,
        kind: ExpeditionKind,
        location: &str,
        duration: &str,
        team_members: Vec<String>,
        notes: &str,
    ) -> Result<Expedition, DbError> {
        let now = Utc::now();
        let expedition = Expedition {
            id: now.timestamp_micros().to_string(),
            title: title.trim().to_string(),
            kind,
            start_date: now,
            end_date: None,
            location: location.trim().to_string(),
            duration: duration.trim().to_string(),
            team_members,
            notes: notes.trim().to_string(),
            checklist: default_checklist(),
            status: ExpeditionStatus::InProgress,
        };

        let mut expeditions = self.list();
        expeditions.insert(0, expedition.clone());
        self.store.set_json(keys::EXPEDITIONS, &expeditions)?;

        info!(id = %expedition.id, title = %expedition.title, kind = %kind, "Expedition logged");
        Ok(expedition)
    }

    /// Toggles the checklist task at `task_index` on the given expedition.
    ///
    /// Returns the new completion state, or `None` when the expedition or
    /// task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the write fails.
    #[instrument(skip(self))]
    pub fn toggle_task(&self, id: &str, task_index: usize) -> Result<Option<bool>, DbError> {
        let mut expeditions = self.list();
        let Some(item) = expeditions
            .iter_mut()
            .find(|e| e.id == id)
            .and_then(|e| e.checklist.get_mut(task_index))
        else {
            debug!(id, task_index, "No checklist task to toggle");
            return Ok(None);
        };

        item.completed = !item.completed;
        let completed = item.completed;
        self.store.set_json(keys::EXPEDITIONS, &expeditions)?;
        info!(id, task_index, completed, "Checklist task toggled");
        Ok(Some(completed))
    }

    /// Marks the expedition completed and stamps its end date.
    ///
    /// Returns whether an in-progress expedition was found.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the write fails.
    #[instrument(skip(self))]
    pub fn complete(&self, id: &str) -> Result<bool, DbError> {
        let mut expeditions = self.list();
        let Some(expedition) = expeditions
            .iter_mut()
            .find(|e| e.id == id && e.status == ExpeditionStatus::InProgress)
        else {
            debug!(id, "No in-progress expedition to complete");
            return Ok(false);
        };

        expedition.status = ExpeditionStatus::Completed;
        expedition.end_date = Some(Utc::now());
        self.store.set_json(keys::EXPEDITIONS, &expeditions)?;
        info!(id, "Expedition completed");
        Ok(true)
    }

    /// Aggregate counts for the stats header.
    #[instrument(skip(self))]
    pub fn stats(&self) -> ExpeditionStats {
        let expeditions = self.list();
        ExpeditionStats {
            total: expeditions.len(),
            completed: expeditions
                .iter()
                .filter(|e| e.status == ExpeditionStatus::Completed)
                .count(),
            in_progress: expeditions
                .iter()
                .filter(|e| e.status == ExpeditionStatus::InProgress)
                .count(),
            real: expeditions
                .iter()
                .filter(|e| e.kind == ExpeditionKind::Real)
                .count(),
            simulations: expeditions
                .iter()
                .filter(|e| e.kind == ExpeditionKind::Simulation)
                .count(),
        }
    }
}
