//! Quiz round state machine.
//!
//! Unlike the memory engine, the quiz has a real error surface: callers
//! pass arbitrary option indices, and answering twice or advancing before
//! answering are caller bugs worth reporting rather than absorbing.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Stable question id.
    pub id: u32,
    /// Question text.
    pub prompt: String,
    /// Answer options, in display order.
    pub options: Vec<String>,
    /// Index into `options` of the correct answer.
    pub correct: usize,
    /// Explanation shown after answering.
    pub explanation: String,
}

/// Errors from driving a [`QuizRound`].
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum QuizError {
    /// A quiz needs at least one question.
    #[display("A quiz needs at least one question")]
    NoQuestions,
    /// The chosen option index is off the end of the option list.
    #[display("Option {choice} is out of range (question has {options} options)")]
    ChoiceOutOfRange {
        /// The rejected option index.
        choice: usize,
        /// How many options the question has.
        options: usize,
    },
    /// The current question was already answered; advance first.
    #[display("The current question was already answered")]
    AlreadyAnswered,
    /// Cannot advance before the current question is answered.
    #[display("The current question has not been answered yet")]
    NotAnswered,
    /// The quiz has no more questions.
    #[display("The quiz is already finished")]
    Finished,
}

/// Feedback for one answered question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answered {
    /// Whether the chosen option was correct.
    pub correct: bool,
    /// Index of the correct option.
    pub correct_answer: usize,
    /// Explanation text for the question.
    pub explanation: String,
}

/// Where the quiz stands after advancing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizProgress {
    /// Another question is up.
    NextQuestion,
    /// The quiz is over.
    Finished(QuizSummary),
}

/// Final score for a completed quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSummary {
    /// Questions answered correctly.
    pub score: u32,
    /// Questions asked.
    pub total: u32,
}

impl QuizSummary {
    /// True when every question was answered correctly.
    pub fn perfect(&self) -> bool {
        self.score == self.total
    }
}

/// Walks a fixed question list one question at a time.
#[derive(Debug, Clone)]
pub struct QuizRound {
    questions: Vec<Question>,
    current: usize,
    score: u32,
    answered_current: bool,
    finished: bool,
}

impl QuizRound {
    /// Starts a quiz over the given questions.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::NoQuestions`] for an empty question list.
    #[instrument(skip(questions), fields(questions = questions.len()))]
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }
        info!(total = questions.len(), "Quiz started");
        Ok(Self {
            questions,
            current: 0,
            score: 0,
            answered_current: false,
            finished: false,
        })
    }

    /// The question currently up, or `None` once the quiz is finished.
    pub fn current_question(&self) -> Option<&Question> {
        if self.finished {
            None
        } else {
            self.questions.get(self.current)
        }
    }

    /// Answers the current question with the given option index.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::Finished`], [`QuizError::AlreadyAnswered`], or
    /// [`QuizError::ChoiceOutOfRange`] when the call is out of order.
    #[instrument(skip(self))]
    pub fn answer(&mut self, choice: usize) -> Result<Answered, QuizError> {
        if self.finished {
            return Err(QuizError::Finished);
        }
        if self.answered_current {
            return Err(QuizError::AlreadyAnswered);
        }
        let question = &self.questions[self.current];
        if choice >= question.options.len() {
            return Err(QuizError::ChoiceOutOfRange {
                choice,
                options: question.options.len(),
            });
        }

        let correct = choice == question.correct;
        if correct {
            self.score += 1;
        }
        self.answered_current = true;
        debug!(question = question.id, correct, "Question answered");
        Ok(Answered {
            correct,
            correct_answer: question.correct,
            explanation: question.explanation.clone(),
        })
    }

    /// Moves on to the next question, or finishes the quiz.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::NotAnswered`] when the current question has no
    /// answer yet, or [`QuizError::Finished`] when the quiz is over.
    #[instrument(skip(self))]
    pub fn advance(&mut self) -> Result<QuizProgress, QuizError> {
        if self.finished {
            return Err(QuizError::Finished);
        }
        if !self.answered_current {
            return Err(QuizError::NotAnswered);
        }

        self.answered_current = false;
        self.current += 1;
        if self.current == self.questions.len() {
            self.finished = true;
            let summary = QuizSummary {
                score: self.score,
                total: self.questions.len() as u32,
            };
            info!(score = summary.score, total = summary.total, "Quiz finished");
            return Ok(QuizProgress::Finished(summary));
        }
        Ok(QuizProgress::NextQuestion)
    }

    /// Correct answers so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Zero-based index of the question currently up.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Total questions in the quiz.
    pub fn total(&self) -> u32 {
        self.questions.len() as u32
    }

    /// True once every question has been answered and advanced past.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
