use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;
use thiserror::Error;
use unidecode::unidecode;

use crate::quiz::Question;

lazy_static! {
    static ref FORBIDDEN_CHOICE_CHARACTERS_REGEX: Regex = Regex::new("[^a-z0-9]").unwrap();
}

const MULTISELECT_SEPARATOR: char = ',';

fn sanitize(choice: &str) -> String {
    let choice = unidecode(choice);
    FORBIDDEN_CHOICE_CHARACTERS_REGEX
        .replace_all(&choice.to_lowercase(), "")
        .into()
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ChoiceError {
    #[error("an answer is required")]
    Empty,
    #[error("answer {0} is invalid")]
    Invalid(String),
}

/// Turns what the user typed into a set of option labels.
#[derive(Debug)]
pub struct ChoicePrompt<'a> {
    options: &'a [String],
    multiselect: bool,
    autocomplete: bool,
}

impl<'a> ChoicePrompt<'a> {
    pub fn new(question: &'a Question, multiselect: bool) -> Self {
        ChoicePrompt {
            options: question.options(),
            multiselect,
            autocomplete: !question.has_numeric_only_options(),
        }
    }

    pub fn parse(&self, input: &str) -> Result<BTreeSet<String>, ChoiceError> {
        let values: Vec<&str> = if self.multiselect {
            input.split(MULTISELECT_SEPARATOR).map(str::trim).collect()
        } else {
            vec![input.trim()]
        };

        if values.iter().all(|v| v.is_empty()) {
            return Err(ChoiceError::Empty);
        }

        values
            .into_iter()
            .filter(|v| !v.is_empty())
            .map(|v| {
                self.resolve(v)
                    .map(str::to_owned)
                    .ok_or_else(|| ChoiceError::Invalid(v.to_owned()))
            })
            .collect()
    }

    fn resolve(&self, value: &str) -> Option<&'a str> {
        let options: &'a [String] = self.options;
        if let Some(label) = options.iter().find(|o| o.as_str() == value) {
            return Some(label.as_str());
        }

        if let Ok(number) = value.parse::<usize>() {
            if number >= 1 && number <= options.len() {
                return Some(options[number - 1].as_str());
            }
        }

        if !self.autocomplete {
            return None;
        }
        let prefix = sanitize(value);
        if prefix.is_empty() {
            return None;
        }
        let mut candidates = options
            .iter()
            .filter(|o| sanitize(o).starts_with(&prefix));
        match (candidates.next(), candidates.next()) {
            (Some(label), None) => Some(label.as_str()),
            _ => None,
        }
    }
}
