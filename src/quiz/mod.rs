use log::debug;
use std::collections::{BTreeSet, HashSet};

pub mod answers;
pub mod collection;
pub mod error;
pub mod question;
pub mod scoring;

#[cfg(test)]
pub mod fixtures;

pub use self::answers::AnswerTracker;
pub use self::collection::{QuestionKey, Questions};
pub use self::error::QuizError;
pub use self::question::{Question, RawQuestion};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionState {
    Created,
    Answering,
    Complete,
}

/// One quiz run: a fixed sample of questions and the answers given so far.
///
/// Answers are recorded one question at a time and never change afterwards.
/// A session is meant to be driven by a single caller and is not shared across threads.
#[derive(Debug)]
pub struct Session {
    questions: Questions,
    answers: AnswerTracker,
}

impl Session {
    pub fn create(questions: Questions) -> Session {
        debug!(
            "Entering session state: {:?} ({} questions)",
            SessionState::Created,
            questions.len()
        );
        Session {
            questions,
            answers: AnswerTracker::new(),
        }
    }

    /// Like `create`, but refuses a sample with nothing to ask.
    pub fn start(questions: Questions) -> Result<Session, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptySample);
        }
        Ok(Session::create(questions))
    }

    pub fn get_questions(&self) -> &Questions {
        &self.questions
    }

    pub fn state(&self) -> SessionState {
        let answered = self.answers.len();
        if answered == 0 {
            SessionState::Created
        } else if answered < self.questions.len() {
            SessionState::Answering
        } else {
            SessionState::Complete
        }
    }

    pub fn set_user_answers(
        &mut self,
        key: QuestionKey,
        labels: BTreeSet<String>,
    ) -> Result<(), QuizError> {
        if !self.questions.contains(key) {
            return Err(QuizError::NotFound(key));
        }
        let before = self.state();
        self.answers.record_answer(key, labels)?;
        let after = self.state();
        if before != after {
            debug!("Entering session state: {:?}", after);
        }
        Ok(())
    }

    pub fn answer_for(&self, key: QuestionKey) -> Option<&BTreeSet<String>> {
        self.answers.answer_for(key)
    }

    /// Fails with `NotFound` for questions that were not answered yet.
    pub fn is_correct(&self, key: QuestionKey) -> Result<bool, QuizError> {
        let question = self.questions.get(key)?;
        let submitted = self.answers.answer_for(key).ok_or(QuizError::NotFound(key))?;
        Ok(scoring::is_correct(question, submitted))
    }

    pub fn get_correct_answers(&self) -> HashSet<QuestionKey> {
        scoring::partition(&self.questions, &self.answers).correct
    }

    pub fn get_wrong_answers(&self) -> HashSet<QuestionKey> {
        scoring::partition(&self.questions, &self.answers).wrong
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }
}
