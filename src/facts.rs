//! Fact of the day, gated on the calendar date.

use chrono::Utc;
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, info, instrument, warn};

use crate::content::{self, Fact};
use crate::store::{KvStore, keys};

/// Picks and remembers one fact per calendar day.
///
/// The stored fact is reused only while the stored date string matches
/// today; on a new day (or any storage trouble) a fresh fact is drawn.
#[derive(Debug, Clone)]
pub struct DailyFact {
    store: KvStore,
}

impl DailyFact {
    /// Creates the daily-fact picker over the given store.
    pub fn new(store: KvStore) -> Self {
        Self { store }
    }

    /// Returns today's fact, drawing and persisting a new one if needed.
    ///
    /// Storage failures are logged and masked: the caller always gets a
    /// fact, it just may not stick until tomorrow.
    #[instrument(skip(self, rng))]
    pub fn fact_of_the_day<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static Fact {
        let today = Utc::now().format("%Y-%m-%d").to_string();

        let stored_date: Option<String> = self
            .store
            .get_json(keys::LAST_FACT_DATE)
            .unwrap_or_else(|e| {
                warn!(error = %e, "Failed to load last fact date, treating as absent");
                None
            });

        if stored_date.as_deref() == Some(today.as_str()) {
            let stored_id: Option<u32> = self.store.get_json(keys::DAILY_FACT).unwrap_or_else(|e| {
                warn!(error = %e, "Failed to load stored fact id, redrawing");
                None
            });
            if let Some(fact) = stored_id.and_then(content::fact_by_id) {
                debug!(fact_id = fact.id, "Reusing today's fact");
                return fact;
            }
        }

        let fact = content::FACTS
            .choose(rng)
            .expect("fact catalogue is non-empty");
        if let Err(e) = self
            .store
            .set_json(keys::DAILY_FACT, &fact.id)
            .and_then(|()| self.store.set_json(keys::LAST_FACT_DATE, &today))
        {
            warn!(error = %e, "Failed to persist today's fact");
        }
        info!(fact_id = fact.id, "Drew a new daily fact");
        fact
    }
}
