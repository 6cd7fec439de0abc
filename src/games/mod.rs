//! Game engines: the memory-matching board and the trivia quiz.

pub mod memory;
pub mod quiz;
