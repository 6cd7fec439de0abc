//! Elephant trivia quiz.

mod round;

pub use round::{Answered, Question, QuizError, QuizProgress, QuizRound, QuizSummary};
