use serde::de;
use serde::{Deserialize, Deserializer};
use std::collections::{BTreeSet, HashSet};
use std::convert::TryFrom;

use crate::quiz::error::QuizError;
use crate::quiz::scoring;


pub const LABEL_SEPARATOR: char = '|';

fn optional_bool_from_string<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    match value.unwrap_or_default().trim().to_lowercase().as_str() {
        "true" => Ok(Some(true)),
        "false" => Ok(Some(false)),
        "" => Ok(None),
        other => Err(de::Error::invalid_value(
            de::Unexpected::Str(other),
            &"true, false or blank",
        )),
    }
}

fn split_labels(labels: &str) -> Vec<String> {
    labels
        .split(LABEL_SEPARATOR)
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_owned)
        .collect()
}

/// One row of a question bank, as read from disk.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct RawQuestion {
    pub category: String,
    pub question: String,
    pub answers: String,
    pub correct_answers: String,
    #[serde(default, deserialize_with = "optional_bool_from_string")]
    pub multiple_choice: Option<bool>,
    #[serde(default)]
    pub help: Option<String>,
}

/// A validated quiz question. The correct labels are always a non-empty
/// subset of the options, and options never repeat.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Question {
    category: String,
    prompt: String,
    options: Vec<String>,
    correct_labels: BTreeSet<String>,
    help: Option<String>,
}

impl Question {
    pub fn new<S: Into<String>>(
        category: S,
        prompt: S,
        options: Vec<String>,
        correct_labels: Vec<String>,
        help: Option<String>,
    ) -> Result<Question, QuizError> {
        let category = category.into().trim().to_owned();
        let prompt = prompt.into().trim().to_owned();
        let invalid = |reason: &str| QuizError::InvalidQuestion {
            prompt: prompt.clone(),
            reason: reason.to_owned(),
        };

        if prompt.is_empty() {
            return Err(invalid("question text is blank"));
        }
        if category.is_empty() {
            return Err(invalid("category is blank"));
        }
        if options.is_empty() {
            return Err(invalid("there are no answers to choose from"));
        }
        let options: Vec<String> = options.iter().map(|o| o.trim().to_owned()).collect();
        if options.iter().any(String::is_empty) {
            return Err(invalid("an answer is blank"));
        }

        let mut seen = HashSet::new();
        for option in &options {
            if !seen.insert(option.as_str()) {
                return Err(invalid(&format!("answer {:?} is listed twice", option)));
            }
        }

        let correct_labels: BTreeSet<String> = correct_labels
            .iter()
            .map(|l| l.trim().to_owned())
            .collect();
        if correct_labels.is_empty() {
            return Err(invalid("there is no correct answer"));
        }
        if let Some(stray) = correct_labels.iter().find(|l| !seen.contains(l.as_str())) {
            return Err(invalid(&format!(
                "correct answer {:?} is not one of the answers",
                stray
            )));
        }

        let help = help
            .map(|h| h.trim().to_owned())
            .filter(|h| !h.is_empty());

        Ok(Question {
            category,
            prompt,
            options,
            correct_labels,
            help,
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_labels(&self) -> &BTreeSet<String> {
        &self.correct_labels
    }

    /// Correct labels in the order the options are presented.
    pub fn correct_answers(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter(|o| self.correct_labels.contains(o.as_str()))
            .map(String::as_str)
            .collect()
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    pub fn is_multiple_choice(&self) -> bool {
        self.correct_labels.len() > 1
    }

    pub fn has_numeric_only_options(&self) -> bool {
        scoring::is_numeric_only(&self.options[..])
    }
}

impl TryFrom<RawQuestion> for Question {
    type Error = QuizError;

    fn try_from(raw_question: RawQuestion) -> Result<Self, Self::Error> {
        let question = Question::new(
            raw_question.category,
            raw_question.question,
            split_labels(&raw_question.answers),
            split_labels(&raw_question.correct_answers),
            raw_question.help,
        )?;

        if let Some(flag) = raw_question.multiple_choice {
            if flag != question.is_multiple_choice() {
                return Err(QuizError::InvalidQuestion {
                    prompt: question.prompt,
                    reason: format!(
                        "flagged as multiple_choice={} but has {} correct answer(s)",
                        flag,
                        question.correct_labels.len()
                    ),
                });
            }
        }

        Ok(question)
    }
}
