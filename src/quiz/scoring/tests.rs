use super::*;
use crate::quiz::fixtures::{color_questions, labels, QuestionBuilder};

#[test]
fn single_choice_requires_exact_label() {
    let question = QuestionBuilder::new()
        .options(&["A", "B", "C"])
        .correct(&["B"])
        .build();
    assert!(is_correct(&question, &labels(&["B"])));
    assert!(!is_correct(&question, &labels(&["A", "B"])));
    assert!(!is_correct(&question, &labels(&["A"])));
    assert!(!is_correct(&question, &labels(&[])));
}

#[test]
fn multiple_choice_requires_every_label_in_any_order() {
    let question = QuestionBuilder::new()
        .options(&["Red", "Blue"])
        .correct(&["Red", "Blue"])
        .build();
    assert!(question.is_multiple_choice());
    assert!(!is_correct(&question, &labels(&["Blue"])));
    assert!(is_correct(&question, &labels(&["Red", "Blue"])));
    assert!(is_correct(&question, &labels(&["Blue", "Red"])));
}

#[test]
fn flipping_any_label_is_never_correct() {
    let options = ["A", "B", "C", "D"];
    let question = QuestionBuilder::new()
        .options(&options)
        .correct(&["A", "C"])
        .build();
    let correct = labels(&["A", "C"]);
    assert!(is_correct(&question, &correct));
    for option in options.iter() {
        let mut flipped = correct.clone();
        if !flipped.remove(*option) {
            flipped.insert(option.to_string());
        }
        assert!(!is_correct(&question, &flipped), "flipped {}", option);
    }
}

#[test]
fn labels_are_case_sensitive() {
    let question = QuestionBuilder::new().correct(&["B"]).build();
    assert!(!is_correct(&question, &labels(&["b"])));
}

#[test]
fn recognizes_numbers() {
    for label in &["0", "42", "-1", "+7", "3.14", ".5", "5.", "1e3", "2.5E-2", " 12 "] {
        assert!(is_numeric(label), "{:?} should be numeric", label);
    }
    for label in &["", "abc", "1,5", "0x1A", "1 2", "e5", "-", "1e"] {
        assert!(!is_numeric(label), "{:?} should not be numeric", label);
    }
}

#[test]
fn numeric_only_needs_every_label() {
    assert!(is_numeric_only(&["1", "2", "3"]));
    assert!(!is_numeric_only(&["1", "2", "three"]));
    assert!(!is_numeric_only::<&str>(&[]));
}

#[test]
fn partition_skips_unanswered_questions() {
    let questions = color_questions();
    let mut answers = AnswerTracker::new();
    answers.record_answer(QuestionKey(10), labels(&["Red"])).unwrap();
    answers.record_answer(QuestionKey(30), labels(&["Blue"])).unwrap();

    let partition = partition(&questions, &answers);
    assert_eq!(partition.correct, [QuestionKey(10)].iter().copied().collect::<HashSet<_>>());
    assert_eq!(partition.wrong, [QuestionKey(30)].iter().copied().collect::<HashSet<_>>());
}
