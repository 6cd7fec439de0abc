//! Achievement badges persisted across sessions.
//!
//! The game engines know nothing about badges; callers forward win and
//! completion events here after the fact.

use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::{info, instrument, warn};

use crate::db::DbError;
use crate::store::{KvStore, keys};

/// Which activity a badge rewards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BadgeKind {
    /// Trivia quizzes.
    Quiz,
    /// Memory game rounds.
    Memory,
    /// Journal writing.
    Journal,
}

/// A badge definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    /// Stable badge id.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// What it takes to earn it.
    pub description: &'static str,
    /// Activity it rewards.
    pub kind: BadgeKind,
    /// Counter value required to earn it.
    pub requirement: u32,
}

/// All badge definitions.
pub const BADGES: &[Badge] = &[
    Badge {
        id: "quiz_master",
        name: "Quiz Master",
        description: "Complete 5 quizzes with perfect scores",
        kind: BadgeKind::Quiz,
        requirement: 5,
    },
    Badge {
        id: "memory_expert",
        name: "Memory Expert",
        description: "Win 10 memory games",
        kind: BadgeKind::Memory,
        requirement: 10,
    },
    Badge {
        id: "journal_keeper",
        name: "Journal Keeper",
        description: "Write 15 journal entries",
        kind: BadgeKind::Journal,
        requirement: 15,
    },
];

/// Persisted progress toward badges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeProgress {
    /// Quizzes finished, perfect or not.
    pub quizzes_taken: u32,
    /// Quizzes finished with a perfect score.
    pub perfect_quizzes: u32,
    /// Memory game rounds won.
    pub memory_wins: u32,
    /// Journal entries written.
    pub journal_entries: u32,
    /// Ids of badges already earned.
    pub earned: Vec<String>,
}

impl BadgeProgress {
    /// The counter a badge of the given kind is measured against.
    fn counter(&self, kind: BadgeKind) -> u32 {
        match kind {
            BadgeKind::Quiz => self.perfect_quizzes,
            BadgeKind::Memory => self.memory_wins,
            BadgeKind::Journal => self.journal_entries,
        }
    }
}

/// Badge book over the key-value store. Reads fail open to zero progress.
#[derive(Debug, Clone)]
pub struct BadgeBook {
    store: KvStore,
}

impl BadgeBook {
    /// Creates a badge book over the given store.
    pub fn new(store: KvStore) -> Self {
        Self { store }
    }

    /// Loads current progress. Failures yield default (zero) progress.
    #[instrument(skip(self))]
    pub fn progress(&self) -> BadgeProgress {
        match self.store.get_json::<BadgeProgress>(keys::BADGES) {
            Ok(progress) => progress.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "Failed to load badge progress, starting from zero");
                BadgeProgress::default()
            }
        }
    }

    /// Records a finished quiz. Returns badges earned by this event.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the write fails.
    #[instrument(skip(self))]
    pub fn record_quiz(&self, perfect: bool) -> Result<Vec<&'static Badge>, DbError> {
        let mut progress = self.progress();
        progress.quizzes_taken += 1;
        if perfect {
            progress.perfect_quizzes += 1;
        }
        self.save_and_award(progress)
    }

    /// Records a memory game win. Returns badges earned by this event.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the write fails.
    #[instrument(skip(self))]
    pub fn record_memory_win(&self) -> Result<Vec<&'static Badge>, DbError> {
        let mut progress = self.progress();
        progress.memory_wins += 1;
        self.save_and_award(progress)
    }

    /// Records a new journal entry. Returns badges earned by this event.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the write fails.
    #[instrument(skip(self))]
    pub fn record_journal_entry(&self) -> Result<Vec<&'static Badge>, DbError> {
        let mut progress = self.progress();
        progress.journal_entries += 1;
        self.save_and_award(progress)
    }

    /// Awards any newly-met badges and persists the result.
    fn save_and_award(&self, mut progress: BadgeProgress) -> Result<Vec<&'static Badge>, DbError> {
        let mut newly_earned = Vec::new();
        for badge in BADGES {
            if progress.counter(badge.kind) >= badge.requirement
                && !progress.earned.iter().any(|id| id == badge.id)
            {
                progress.earned.push(badge.id.to_string());
                newly_earned.push(badge);
            }
        }

        self.store.set_json(keys::BADGES, &progress)?;
        for badge in &newly_earned {
            info!(badge = badge.id, "Badge earned");
        }
        Ok(newly_earned)
    }
}
