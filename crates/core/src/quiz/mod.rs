//! True/false quiz shown on top of an open textbook.

mod bandit;
mod flow;
mod question;
mod viewer;

use thiserror::Error;

pub use bandit::{ELABORATION_PROMPTS, Ucb1Bandit, reward};
pub use flow::{
    DEFAULT_FEEDBACK_DELAY, DEFAULT_PROMPT_DELAY, QuizConfig, QuizFlow, QuizPhase, QuizSnapshot,
    TimerKind, TimerRequest,
};
pub use question::{Question, QuestionSet};
pub use viewer::{DocumentOptions, ViewerConfig};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("a quiz needs at least one question")]
    EmptyQuestionSet,
    #[error("a bandit needs at least one arm")]
    NoArms,
}
