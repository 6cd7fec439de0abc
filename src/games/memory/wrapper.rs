//! Stateful wrapper that owns the current round and its deferred evaluation.
//!
//! [`Round`] itself is a pure value; this layer adds the one piece of
//! bookkeeping the presentation layer needs: a generation counter that
//! invalidates evaluation tickets when the round is restarted or torn
//! down while an evaluation is still pending.

use rand::Rng;
use tracing::{debug, info, instrument, warn};

use super::round::{Evaluation, FlipEffect, Round};
use super::types::Symbol;

/// Token handed out when a pair completes, redeemed after the display delay.
///
/// The token is bound to the round generation that issued it; redeeming it
/// after a restart is rejected, so a stale evaluation can never touch the
/// new board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalTicket {
    generation: u64,
}

/// What a flip request did, from the caller's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipResponse {
    /// The flip was absorbed as a no-op.
    Ignored,
    /// A first tile is now face-up.
    Revealed,
    /// A pair is face-up; redeem the ticket after the display delay.
    EvaluationDue(EvalTicket),
}

/// Outcome of redeeming an [`EvalTicket`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The ticket belonged to a discarded round and was dropped.
    Stale,
    /// No pair was pending; nothing happened.
    NotReady,
    /// The pair matched and stays face-up.
    Matched,
    /// The pair went face-down again.
    Mismatched,
    /// The round is won; carries the final move count for display.
    Won {
        /// Number of completed pair-evaluations in the round.
        moves: u32,
    },
}

/// The memory game as the presentation layer drives it.
#[derive(Debug, Clone, Default)]
pub struct MemoryGame {
    round: Option<Round>,
    generation: u64,
}

impl MemoryGame {
    /// Creates a game with no round in play.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) a round over the given symbols.
    ///
    /// Bumping the generation first means any evaluation still pending
    /// against the previous round is orphaned atomically with the swap.
    /// Returns `false` when the symbol set is empty and no round begins.
    #[instrument(skip(self, symbols, rng), fields(symbols = symbols.len()))]
    pub fn start<R: Rng + ?Sized>(&mut self, symbols: &[Symbol], rng: &mut R) -> bool {
        match Round::new(symbols, rng) {
            Some(round) => {
                self.generation += 1;
                info!(generation = self.generation, pairs = round.pair_count(), "Round started");
                self.round = Some(round);
                true
            }
            None => {
                warn!("Refusing to start a round with no symbols");
                false
            }
        }
    }

    /// Discards the round in play, if any, and orphans pending evaluations.
    #[instrument(skip(self))]
    pub fn stop(&mut self) {
        if self.round.take().is_some() {
            self.generation += 1;
            info!(generation = self.generation, "Round discarded");
        }
    }

    /// Requests a flip of the tile at `position`.
    #[instrument(skip(self))]
    pub fn flip(&mut self, position: usize) -> FlipResponse {
        let Some(round) = self.round.take() else {
            return FlipResponse::Ignored;
        };
        let (round, effect) = round.flip(position);
        self.round = Some(round);
        match effect {
            FlipEffect::Ignored => FlipResponse::Ignored,
            FlipEffect::Revealed => FlipResponse::Revealed,
            FlipEffect::EvaluationDue => FlipResponse::EvaluationDue(EvalTicket {
                generation: self.generation,
            }),
        }
    }

    /// Redeems an evaluation ticket after the display delay.
    #[instrument(skip(self))]
    pub fn resolve(&mut self, ticket: EvalTicket) -> Resolution {
        if ticket.generation != self.generation {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "Dropping stale evaluation ticket"
            );
            return Resolution::Stale;
        }
        let Some(round) = self.round.take() else {
            return Resolution::Stale;
        };
        let (round, evaluation) = round.evaluate();
        self.round = Some(round);
        match evaluation {
            Evaluation::NotReady => Resolution::NotReady,
            Evaluation::Matched => Resolution::Matched,
            Evaluation::Mismatched => Resolution::Mismatched,
            Evaluation::Won { moves } => {
                info!(moves, "Round won");
                Resolution::Won { moves }
            }
        }
    }

    /// Snapshot of the round in play, if any.
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }
}
