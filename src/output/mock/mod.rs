use anyhow::Result;
use std::collections::VecDeque;

use crate::output::{Message, QuizOutput};

/// Records messages and replays scripted input lines.
#[derive(Debug, Default)]
pub struct MockOutput {
    messages: Vec<Message>,
    input: VecDeque<String>,
    reads: usize,
}

impl MockOutput {
    pub fn with_input(lines: &[&str]) -> Self {
        MockOutput {
            input: lines.iter().map(|l| l.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn flush(&mut self) -> Vec<Message> {
        std::mem::replace(&mut self.messages, Vec::new())
    }

    pub fn contains_message(&self, message: &Message) -> bool {
        self.messages.iter().any(|m| m == message)
    }

    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl QuizOutput for MockOutput {
    fn say(&mut self, message: &Message) {
        self.messages.push(message.clone());
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        self.reads += 1;
        Ok(self.input.pop_front())
    }
}
