//! Static companion content: facts, guides, stories, quotes, and the
//! memory/quiz catalogues.

mod facts;
mod guides;
mod memory;
mod quiz;
mod quotes;
mod stories;

pub use facts::{FACTS, Fact, FactCategory, fact_by_id};
pub use guides::{GUIDES, Guide, guide_by_id};
pub use memory::{MEMORY_ITEMS, MemoryItem, item_for, standard_symbols};
pub use quiz::quiz_questions;
pub use quotes::{QUOTES, Quote, random_quote};
pub use stories::{STORIES, Story, story_by_id};
