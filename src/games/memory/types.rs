//! Core domain types for the memory-matching game.

use serde::{Deserialize, Serialize};

/// Matchable identity shared by exactly two tiles on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(u32);

impl Symbol {
    /// Creates a symbol with the given id.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw symbol id.
    pub const fn id(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "symbol#{}", self.0)
    }
}

/// One card position on the board.
///
/// A tile is face-down (`!revealed && !resolved`), pending evaluation
/// (`revealed && !resolved`), or matched (`revealed && resolved`). The
/// fourth combination is unreachable: a tile is only resolved while
/// face-up, and resolved tiles never flip back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub(super) symbol: Symbol,
    pub(super) revealed: bool,
    pub(super) resolved: bool,
}

impl Tile {
    /// Creates a face-down tile carrying the given symbol.
    pub(super) fn face_down(symbol: Symbol) -> Self {
        Self {
            symbol,
            revealed: false,
            resolved: false,
        }
    }

    /// Returns the symbol on this tile.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// True once the tile has been flipped face-up and not yet flipped back.
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// True once the tile has been confirmed as part of a matched pair.
    pub fn resolved(&self) -> bool {
        self.resolved
    }

    /// True while the tile shows its back.
    pub fn is_face_down(&self) -> bool {
        !self.revealed
    }
}

/// Status of a round.
///
/// "Not started" has no variant here: a [`Round`](super::Round) value only
/// exists once a game has been set up, so before that there is simply no
/// round to ask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundStatus {
    /// Tiles remain unmatched.
    InProgress,
    /// Every pair has been matched.
    Complete,
}
