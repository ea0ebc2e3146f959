use std::collections::{BTreeSet, HashMap};

use crate::quiz::collection::QuestionKey;
use crate::quiz::error::QuizError;

/// Labels picked by the user, per question. An answer cannot be changed once recorded.
#[derive(Clone, Debug, Default)]
pub struct AnswerTracker {
    answers: HashMap<QuestionKey, BTreeSet<String>>,
}

impl AnswerTracker {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn record_answer(
        &mut self,
        key: QuestionKey,
        labels: BTreeSet<String>,
    ) -> Result<(), QuizError> {
        if self.answers.contains_key(&key) {
            return Err(QuizError::DuplicateAnswer(key));
        }
        self.answers.insert(key, labels);
        Ok(())
    }

    pub fn answer_for(&self, key: QuestionKey) -> Option<&BTreeSet<String>> {
        self.answers.get(&key)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::fixtures::labels;

    #[test]
    fn unanswered_key_has_no_answer() {
        let tracker = AnswerTracker::new();
        assert_eq!(tracker.answer_for(QuestionKey(3)), None);
        assert_eq!(tracker.len(), 0);
    }

    #[test]
    fn stores_answer() {
        let mut tracker = AnswerTracker::new();
        tracker
            .record_answer(QuestionKey(3), labels(&["A", "B"]))
            .unwrap();
        assert_eq!(
            tracker.answer_for(QuestionKey(3)),
            Some(&labels(&["B", "A"]))
        );
        assert_eq!(tracker.answer_for(QuestionKey(4)), None);
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn rejects_second_answer_even_if_identical() {
        let mut tracker = AnswerTracker::new();
        tracker.record_answer(QuestionKey(0), labels(&["A"])).unwrap();
        assert_eq!(
            tracker.record_answer(QuestionKey(0), labels(&["A"])),
            Err(QuizError::DuplicateAnswer(QuestionKey(0)))
        );
        assert_eq!(
            tracker.record_answer(QuestionKey(0), labels(&["B"])),
            Err(QuizError::DuplicateAnswer(QuestionKey(0)))
        );
        assert_eq!(tracker.answer_for(QuestionKey(0)), Some(&labels(&["A"])));
    }
}
