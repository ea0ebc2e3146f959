use thiserror::Error;

use crate::quiz::collection::QuestionKey;

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum QuizError {
    #[error("no question with key {0}")]
    NotFound(QuestionKey),
    #[error("question {0} was already answered")]
    DuplicateAnswer(QuestionKey),
    #[error("question key {0} appears more than once")]
    DuplicateKey(QuestionKey),
    #[error("no questions can be found")]
    EmptySample,
    #[error("invalid question {prompt:?}: {reason}")]
    InvalidQuestion { prompt: String, reason: String },
}
