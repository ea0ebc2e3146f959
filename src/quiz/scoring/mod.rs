use lazy_static::lazy_static;
use regex::Regex;
use std::collections::{BTreeSet, HashSet};

use crate::quiz::answers::AnswerTracker;
use crate::quiz::collection::{QuestionKey, Questions};
use crate::quiz::question::Question;

#[cfg(test)]
mod tests;

lazy_static! {
    static ref NUMERIC_REGEX: Regex =
        Regex::new(r"^\s*[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?\s*$").unwrap();
}

pub fn is_numeric(label: &str) -> bool {
    NUMERIC_REGEX.is_match(label)
}

/// Numeric-only options only change how answers can be typed in, never how they are scored.
pub fn is_numeric_only<S: AsRef<str>>(labels: &[S]) -> bool {
    !labels.is_empty() && labels.iter().all(|l| is_numeric(l.as_ref()))
}

/// An answer is correct when it selects exactly the correct labels, no more and no less.
pub fn is_correct(question: &Question, submitted: &BTreeSet<String>) -> bool {
    submitted == question.correct_labels()
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Partition {
    pub correct: HashSet<QuestionKey>,
    pub wrong: HashSet<QuestionKey>,
}

/// Splits every answered question into correct and wrong. Unanswered questions land in neither.
pub fn partition(questions: &Questions, answers: &AnswerTracker) -> Partition {
    let mut partition = Partition::default();
    for (key, question) in questions.all() {
        if let Some(submitted) = answers.answer_for(*key) {
            if is_correct(question, submitted) {
                partition.correct.insert(*key);
            } else {
                partition.wrong.insert(*key);
            }
        }
    }
    partition
}
