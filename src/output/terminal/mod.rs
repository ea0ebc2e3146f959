use anyhow::{Context, Result};
use itertools::Itertools;
use log::error;
use std::io::{BufRead, Write};

use crate::output::{Message, Outcome, QuizOutput, ResultRow};

pub mod table;

#[cfg(test)]
mod tests;

use self::table::{wordwrap, Table};

const PROMPT: &str = "> ";

pub struct TerminalOutput<R, W> {
    input: R,
    output: W,
    wordwrap_width: usize,
}

impl<R: BufRead, W: Write> TerminalOutput<R, W> {
    pub fn new(input: R, output: W, wordwrap_width: usize) -> Self {
        TerminalOutput {
            input,
            output,
            wordwrap_width,
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn interpret_message(&self, message: &Message) -> String {
        use Message::*;
        match message {
            AnswerRequired => "Please pick at least one answer.".into(),
            Categories(categories) => categories.join("\n"),
            InvalidAnswer(value) => format!("Answer {} is invalid.", value),
            NoQuestions => "✗ No questions can be found.".into(),
            QuestionBegins {
                number,
                question,
                reveal_multiple_choice,
            } => {
                let mut text = format!(
                    "Question #{} [{}] {}\n",
                    number,
                    question.category(),
                    question.prompt()
                );
                if *reveal_multiple_choice {
                    let is = if question.is_multiple_choice() { "IS" } else { "IS NOT" };
                    text += &format!("\nThis question {} multiple choice.\n", is);
                }
                for (index, option) in question.options().iter().enumerate() {
                    text += &format!("\n  [{}] {}", index + 1, option);
                }
                text
            }
            Results(rows) => self.render_results(rows),
            ScoresRecap { wrong, correct } => {
                format!("Results: errors: {} - correct: {}", wrong, correct)
            }
            SetBegins { count, available } => format!(
                "Starting a new set of {} questions (available questions: {})",
                count, available
            ),
            SetInterrupted { remaining } => format!(
                "\nInput ended, {} question(s) left unanswered.",
                remaining
            ),
            YourAnswer(labels) => format!("✎ Your answer: {}\n", labels.join(", ")),
        }
    }

    fn render_results(&self, rows: &[ResultRow]) -> String {
        let mut table = Table::new(vec!["Question", "Correct answer", "Result", "Help"]);
        for row in rows {
            let result = match row.outcome {
                Outcome::Correct => "✔",
                Outcome::Wrong => "✗",
                Outcome::Unanswered => "-",
            };
            table.add_row(vec![
                format!(
                    "#{} {}",
                    row.number,
                    wordwrap(&row.prompt, self.wordwrap_width)
                ),
                wordwrap(&row.correct_answers.iter().join(", "), self.wordwrap_width),
                result.to_owned(),
                row.help
                    .as_ref()
                    .map(|h| wordwrap(h, self.wordwrap_width))
                    .unwrap_or_default(),
            ]);
        }
        table.render()
    }
}

impl<R: BufRead, W: Write> QuizOutput for TerminalOutput<R, W> {
    fn say(&mut self, message: &Message) {
        let content = self.interpret_message(message);
        if let Err(e) = writeln!(self.output, "{}", content) {
            error!("Error writing message: {}", e);
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        write!(self.output, "{}", PROMPT)?;
        self.output.flush()?;

        let mut buffer = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buffer)
            .context("Could not read answer")?;
        if read == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buffer);
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_owned()))
    }
}
