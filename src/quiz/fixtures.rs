use std::collections::BTreeSet;

use crate::quiz::{Question, QuestionKey, Questions};

pub fn labels(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub struct QuestionBuilder {
    category: String,
    prompt: String,
    options: Vec<String>,
    correct: Vec<String>,
    help: Option<String>,
}

impl QuestionBuilder {
    pub fn new() -> Self {
        QuestionBuilder {
            category: "example category".to_owned(),
            prompt: "example question".to_owned(),
            options: vec!["A".to_owned(), "B".to_owned(), "C".to_owned()],
            correct: vec!["B".to_owned()],
            help: None,
        }
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = category.to_owned();
        self
    }

    pub fn prompt(mut self, prompt: &str) -> Self {
        self.prompt = prompt.to_owned();
        self
    }

    pub fn options(mut self, options: &[&str]) -> Self {
        self.options = options.iter().map(|o| o.to_string()).collect();
        self
    }

    pub fn correct(mut self, correct: &[&str]) -> Self {
        self.correct = correct.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn help(mut self, help: &str) -> Self {
        self.help = Some(help.to_owned());
        self
    }

    pub fn build(self) -> Question {
        Question::new(
            self.category,
            self.prompt,
            self.options,
            self.correct,
            self.help,
        )
        .unwrap()
    }
}

/// Three questions about colors, each with "Red" as its only correct answer.
pub fn color_questions() -> Questions {
    let entries = [10, 20, 30]
        .iter()
        .map(|k| {
            let question = QuestionBuilder::new()
                .prompt(&format!("Question {}", k))
                .options(&["Red", "Green", "Blue"])
                .correct(&["Red"])
                .build();
            (QuestionKey(*k), question)
        })
        .collect();
    Questions::new(entries).unwrap()
}
