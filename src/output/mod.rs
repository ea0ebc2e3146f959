use anyhow::Result;

use crate::quiz::Question;

#[cfg(test)]
pub mod mock;
pub mod terminal;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    Correct,
    Wrong,
    Unanswered,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResultRow {
    pub number: usize,
    pub prompt: String,
    pub correct_answers: Vec<String>,
    pub outcome: Outcome,
    pub help: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    AnswerRequired,
    Categories(Vec<String>),
    InvalidAnswer(String),
    NoQuestions,
    QuestionBegins {
        number: usize,
        question: Question,
        reveal_multiple_choice: bool,
    },
    Results(Vec<ResultRow>),
    ScoresRecap { wrong: usize, correct: usize },
    SetBegins { count: usize, available: usize },
    SetInterrupted { remaining: usize },
    YourAnswer(Vec<String>),
}

pub trait QuizOutput {
    fn say(&mut self, message: &Message);

    /// Next line typed by the user, or `None` once input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>>;
}
