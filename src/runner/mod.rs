use anyhow::Result;
use log::info;
use std::collections::BTreeSet;

use crate::bank::QuestionBank;
use crate::output::{Message, Outcome, QuizOutput, ResultRow};
use crate::quiz::{Question, QuestionKey, Questions, QuizError, Session};

pub mod choice;


use self::choice::{ChoiceError, ChoicePrompt};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RunSettings {
    pub categories: Vec<String>,
    pub number_of_questions: usize,
    pub training: bool,
    pub hide_multiple_choice: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Completion {
    Finished,
    Interrupted,
    NoQuestions,
}

pub struct Runner<O: QuizOutput> {
    settings: RunSettings,
    output: O,
}

impl<O: QuizOutput> Runner<O> {
    pub fn new(settings: RunSettings, output: O) -> Self {
        Runner { settings, output }
    }

    #[cfg(test)]
    pub fn output(&mut self) -> &mut O {
        &mut self.output
    }

    pub fn list_categories(&mut self, bank: &QuestionBank) {
        self.output
            .say(&Message::Categories(bank.list_categories()));
    }

    pub fn run(&mut self, bank: &QuestionBank) -> Result<Completion> {
        let sample = bank.load_sample(
            self.settings.number_of_questions,
            &self.settings.categories,
        )?;

        let mut session = match Session::start(sample) {
            Ok(session) => session,
            Err(QuizError::EmptySample) => {
                self.output.say(&Message::NoQuestions);
                return Ok(Completion::NoQuestions);
            }
            Err(e) => return Err(e.into()),
        };

        self.output.say(&Message::SetBegins {
            count: session.get_questions().len(),
            available: bank.len(),
        });

        let completion = self.ask_questions(&mut session)?;
        info!(
            "Set {:?} with {} of {} questions answered",
            completion,
            session.answered_count(),
            session.get_questions().len()
        );
        self.display_results(&session)?;
        Ok(completion)
    }

    fn ask_questions(&mut self, session: &mut Session) -> Result<Completion> {
        let entries = session.get_questions().all().to_vec();
        let total = entries.len();

        for (index, (key, question)) in entries.into_iter().enumerate() {
            self.output.say(&Message::QuestionBegins {
                number: index + 1,
                question: question.clone(),
                reveal_multiple_choice: !self.settings.hide_multiple_choice,
            });

            let labels = match self.ask_question(&question)? {
                Some(labels) => labels,
                None => {
                    self.output.say(&Message::SetInterrupted {
                        remaining: total - index,
                    });
                    return Ok(Completion::Interrupted);
                }
            };

            session.set_user_answers(key, labels.clone())?;

            if self.settings.training {
                self.replay_question(key, &question, &labels)?;
            }

            self.output
                .say(&Message::YourAnswer(in_option_order(&question, &labels)));
        }

        Ok(Completion::Finished)
    }

    /// Keeps asking until the input names valid options. `None` once input runs out.
    fn ask_question(&mut self, question: &Question) -> Result<Option<BTreeSet<String>>> {
        let multiselect = self.settings.hide_multiple_choice || question.is_multiple_choice();
        let prompt = ChoicePrompt::new(question, multiselect);
        loop {
            let line = match self.output.read_line()? {
                Some(line) => line,
                None => return Ok(None),
            };
            match prompt.parse(&line) {
                Ok(labels) => return Ok(Some(labels)),
                Err(ChoiceError::Empty) => self.output.say(&Message::AnswerRequired),
                Err(ChoiceError::Invalid(value)) => {
                    self.output.say(&Message::InvalidAnswer(value))
                }
            }
        }
    }

    /// Shows the solution of one question through a throwaway session of its own.
    fn replay_question(
        &mut self,
        key: QuestionKey,
        question: &Question,
        labels: &BTreeSet<String>,
    ) -> Result<()> {
        let mut replay = Session::create(Questions::single(key, question.clone()));
        replay.set_user_answers(key, labels.clone())?;
        self.display_results(&replay)
    }

    fn display_results(&mut self, session: &Session) -> Result<()> {
        let mut rows = Vec::new();
        for (index, (key, question)) in session.get_questions().all().iter().enumerate() {
            let outcome = match session.answer_for(*key) {
                None => Outcome::Unanswered,
                Some(_) => {
                    if session.is_correct(*key)? {
                        Outcome::Correct
                    } else {
                        Outcome::Wrong
                    }
                }
            };
            rows.push(ResultRow {
                number: index + 1,
                prompt: question.prompt().to_owned(),
                correct_answers: question
                    .correct_answers()
                    .into_iter()
                    .map(str::to_owned)
                    .collect(),
                outcome,
                help: question.help().map(str::to_owned),
            });
        }

        if rows.is_empty() {
            return Ok(());
        }

        self.output.say(&Message::Results(rows));
        self.output.say(&Message::ScoresRecap {
            wrong: session.get_wrong_answers().len(),
            correct: session.get_correct_answers().len(),
        });
        Ok(())
    }
}

fn in_option_order(question: &Question, labels: &BTreeSet<String>) -> Vec<String> {
    question
        .options()
        .iter()
        .filter(|o| labels.contains(o.as_str()))
        .cloned()
        .collect()
}
