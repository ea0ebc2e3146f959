use std::collections::HashMap;
use std::fmt;

use crate::quiz::error::QuizError;
use crate::quiz::question::Question;


/// Identifies a question within the bank it was loaded from.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct QuestionKey(pub usize);

impl fmt::Display for QuestionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Questions in presentation order, addressable by key.
#[derive(Clone, Debug, Default)]
pub struct Questions {
    entries: Vec<(QuestionKey, Question)>,
    positions: HashMap<QuestionKey, usize>,
}

impl Questions {
    pub fn new(entries: Vec<(QuestionKey, Question)>) -> Result<Questions, QuizError> {
        let mut positions = HashMap::with_capacity(entries.len());
        for (position, (key, _question)) in entries.iter().enumerate() {
            if positions.insert(*key, position).is_some() {
                return Err(QuizError::DuplicateKey(*key));
            }
        }
        Ok(Questions { entries, positions })
    }

    /// Keys questions by their position in `questions`.
    pub fn from_questions(questions: Vec<Question>) -> Questions {
        let entries: Vec<(QuestionKey, Question)> = questions
            .into_iter()
            .enumerate()
            .map(|(index, question)| (QuestionKey(index), question))
            .collect();
        let positions = entries
            .iter()
            .enumerate()
            .map(|(position, (key, _))| (*key, position))
            .collect();
        Questions { entries, positions }
    }

    /// A collection holding a single question, for replaying it on its own.
    pub fn single(key: QuestionKey, question: Question) -> Questions {
        let mut positions = HashMap::new();
        positions.insert(key, 0);
        Questions {
            entries: vec![(key, question)],
            positions,
        }
    }

    pub fn all(&self) -> &[(QuestionKey, Question)] {
        &self.entries
    }

    pub fn get(&self, key: QuestionKey) -> Result<&Question, QuizError> {
        self.positions
            .get(&key)
            .map(|position| &self.entries[*position].1)
            .ok_or(QuizError::NotFound(key))
    }

    pub fn contains(&self, key: QuestionKey) -> bool {
        self.positions.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
