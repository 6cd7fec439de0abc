//! Tembo Trails library - elephant companion core.
//!
//! # Architecture
//!
//! - **Games**: the memory-matching engine (pure round transitions plus a
//!   stateful wrapper with restart-safe deferred evaluation) and a trivia
//!   quiz.
//! - **Persistence**: a SQLite key-value blob store and a sighting pin
//!   table, both behind diesel.
//! - **Features**: journal, expedition log, daily fact, badges, and game
//!   stats, each a thin layer over the key-value store with fail-open
//!   reads.
//! - **Content**: the static fact/guide/story/quote catalogues.
//!
//! # Example
//!
//! ```
//! use tembo_trails::{FlipResponse, MemoryGame, Resolution, content};
//!
//! let mut game = MemoryGame::new();
//! let mut rng = rand::rng();
//! game.start(&content::standard_symbols(), &mut rng);
//!
//! if let FlipResponse::EvaluationDue(ticket) = {
//!     game.flip(0);
//!     game.flip(1)
//! } {
//!     // After the display delay:
//!     match game.resolve(ticket) {
//!         Resolution::Won { moves } => println!("won in {moves} moves"),
//!         _ => {}
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod badges;
mod db;
mod expedition;
mod facts;
mod games;
mod journal;
mod stats;
mod store;

/// Static companion content catalogues.
pub mod content;

// Crate-level exports - persistence
pub use db::{DbError, KvEntry, MIGRATIONS, NewPin, Pin, PinRepository, run_migrations};
pub use store::{KvStore, keys};

// Crate-level exports - memory game
pub use games::memory::{
    EvalTicket, Evaluation, FlipEffect, FlipResponse, MemoryGame, Resolution, Round, RoundStatus,
    Symbol, Tile,
};

// Crate-level exports - quiz
pub use games::quiz::{Answered, Question, QuizError, QuizProgress, QuizRound, QuizSummary};

// Crate-level exports - companion features
pub use badges::{BADGES, Badge, BadgeBook, BadgeKind, BadgeProgress};
pub use expedition::{
    ChecklistItem, Expedition, ExpeditionKind, ExpeditionLog, ExpeditionStats, ExpeditionStatus,
    default_checklist,
};
pub use facts::DailyFact;
pub use journal::{Journal, JournalEntry};
pub use stats::{MemoryResult, MemoryStats};
