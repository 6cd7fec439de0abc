//! Round state machine for the memory-matching game.
//!
//! A [`Round`] is an immutable-transition value: `flip` and `evaluate`
//! consume the current round and return the next one together with what
//! happened. Invalid inputs are absorbed as no-ops rather than errors —
//! the engine stays correct even when the caller forgets to disable
//! input, so there is nothing for it to fail on.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::types::{RoundStatus, Symbol, Tile};

/// One full play-through of the memory game, from shuffle to win.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    tiles: Vec<Tile>,
    pending: Vec<usize>,
    move_count: u32,
    matched_pairs: u32,
    status: RoundStatus,
}

/// What a flip did to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipEffect {
    /// The flip failed a precondition and the round is unchanged.
    Ignored,
    /// One tile is now face-up, awaiting a second selection.
    Revealed,
    /// Two tiles are face-up; the caller must schedule an evaluation.
    EvaluationDue,
}

/// Result of the deferred evaluation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// Fewer than two tiles were pending; nothing happened.
    NotReady,
    /// The pending pair matched and stays face-up.
    Matched,
    /// The pending pair did not match and went face-down again.
    Mismatched,
    /// The final pair matched; carries the total completed moves.
    Won {
        /// Number of completed pair-evaluations in the round.
        moves: u32,
    },
}

impl Round {
    /// Builds a fresh round from a set of symbols.
    ///
    /// Each distinct symbol yields two tiles; positions are shuffled with
    /// a uniform Fisher-Yates permutation. Duplicate symbols in the input
    /// are collapsed. Returns `None` when no symbols remain, since a board
    /// with zero tiles has nothing to play.
    #[instrument(skip(symbols, rng), fields(symbols = symbols.len()))]
    pub fn new<R: Rng + ?Sized>(symbols: &[Symbol], rng: &mut R) -> Option<Self> {
        let mut distinct: Vec<Symbol> = Vec::with_capacity(symbols.len());
        for &symbol in symbols {
            if !distinct.contains(&symbol) {
                distinct.push(symbol);
            }
        }
        if distinct.is_empty() {
            return None;
        }

        let mut tiles: Vec<Tile> = distinct
            .iter()
            .chain(distinct.iter())
            .map(|&symbol| Tile::face_down(symbol))
            .collect();
        tiles.shuffle(rng);

        debug!(pairs = distinct.len(), "Round created");
        Some(Self {
            tiles,
            pending: Vec::with_capacity(2),
            move_count: 0,
            matched_pairs: 0,
            status: RoundStatus::InProgress,
        })
    }

    /// Flips the tile at `position` face-up.
    ///
    /// The flip is silently ignored when the round is over, two tiles are
    /// already pending, the position is already pending, the tile is
    /// resolved, or the position is off the board. When the flip completes
    /// a pair, the move counter increments and the effect asks the caller
    /// to schedule the deferred evaluation.
    #[instrument(skip(self))]
    pub fn flip(mut self, position: usize) -> (Self, FlipEffect) {
        if self.status != RoundStatus::InProgress
            || self.pending.len() == 2
            || self.pending.contains(&position)
        {
            return (self, FlipEffect::Ignored);
        }
        let Some(tile) = self.tiles.get_mut(position) else {
            return (self, FlipEffect::Ignored);
        };
        if tile.resolved {
            return (self, FlipEffect::Ignored);
        }

        tile.revealed = true;
        self.pending.push(position);

        if self.pending.len() == 2 {
            self.move_count += 1;
            debug!(move_count = self.move_count, "Pair selected");
            (self, FlipEffect::EvaluationDue)
        } else {
            (self, FlipEffect::Revealed)
        }
    }

    /// Runs the deferred comparison of the two pending tiles.
    ///
    /// A match resolves both tiles; a mismatch flips both face-down.
    /// Either way the pending selection is cleared. Matching the last
    /// pair completes the round and surfaces the final move count.
    #[instrument(skip(self))]
    pub fn evaluate(mut self) -> (Self, Evaluation) {
        if self.pending.len() != 2 {
            return (self, Evaluation::NotReady);
        }
        let (first, second) = (self.pending[0], self.pending[1]);
        self.pending.clear();

        if self.tiles[first].symbol == self.tiles[second].symbol {
            self.tiles[first].resolved = true;
            self.tiles[second].resolved = true;
            self.matched_pairs += 1;
            debug!(matched_pairs = self.matched_pairs, "Pair matched");

            if self.matched_pairs == self.pair_count() {
                self.status = RoundStatus::Complete;
                let moves = self.move_count;
                return (self, Evaluation::Won { moves });
            }
            (self, Evaluation::Matched)
        } else {
            self.tiles[first].revealed = false;
            self.tiles[second].revealed = false;
            debug!("Pair mismatched");
            (self, Evaluation::Mismatched)
        }
    }

    /// Returns all tiles in board order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Returns the tile at `position`, if the position is on the board.
    pub fn tile(&self, position: usize) -> Option<&Tile> {
        self.tiles.get(position)
    }

    /// Positions currently face-up and awaiting evaluation (0, 1, or 2).
    pub fn pending(&self) -> &[usize] {
        &self.pending
    }

    /// Completed pair-evaluations so far.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Pairs matched so far.
    pub fn matched_pairs(&self) -> u32 {
        self.matched_pairs
    }

    /// Total pairs on the board.
    pub fn pair_count(&self) -> u32 {
        (self.tiles.len() / 2) as u32
    }

    /// Current round status.
    pub fn status(&self) -> RoundStatus {
        self.status
    }
}
