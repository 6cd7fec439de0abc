//! Memory-matching game: pure round transitions plus a stateful wrapper.

mod round;
mod types;
mod wrapper;

pub use round::{Evaluation, FlipEffect, Round};
pub use types::{RoundStatus, Symbol, Tile};
pub use wrapper::{EvalTicket, FlipResponse, MemoryGame, Resolution};
