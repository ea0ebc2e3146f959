use super::table::{wordwrap, Table};
use super::*;
use crate::quiz::fixtures::QuestionBuilder;

fn render(message: &Message) -> String {
    let mut output = TerminalOutput::new(&b""[..], Vec::new(), 20);
    output.say(message);
    String::from_utf8(output.into_output()).unwrap()
}

#[test]
fn wraps_on_spaces() {
    assert_eq!(wordwrap("one two three four", 9), "one two\nthree\nfour");
    assert_eq!(wordwrap("short", 80), "short");
}

#[test]
fn wrap_keeps_long_words_and_line_breaks() {
    assert_eq!(wordwrap("abcdefghij xy", 4), "abcdefghij\nxy");
    assert_eq!(wordwrap("a b\nc d", 80), "a b\nc d");
}

#[test]
fn renders_table_with_multiline_cells() {
    let mut table = Table::new(vec!["Q", "Result"]);
    table.add_row(vec!["first\nsecond".to_owned(), "✔".to_owned()]);
    let expected = "\
+--------+--------+
| Q      | Result |
+--------+--------+
| first  | ✔      |
| second |        |
+--------+--------+";
    assert_eq!(table.render(), expected);
}

#[test]
fn announces_question_with_options() {
    let question = QuestionBuilder::new()
        .category("Colors")
        .prompt("Which colors are warm?")
        .options(&["Red", "Blue", "Orange"])
        .correct(&["Red", "Orange"])
        .build();
    let text = render(&Message::QuestionBegins {
        number: 3,
        question: question.clone(),
        reveal_multiple_choice: true,
    });
    assert!(text.starts_with("Question #3 [Colors] Which colors are warm?\n"));
    assert!(text.contains("This question IS multiple choice."));
    assert!(text.contains("  [1] Red\n  [2] Blue\n  [3] Orange"));

    let hidden = render(&Message::QuestionBegins {
        number: 3,
        question,
        reveal_multiple_choice: false,
    });
    assert!(!hidden.contains("multiple choice"));
}

#[test]
fn single_choice_question_is_not_multiple_choice() {
    let text = render(&Message::QuestionBegins {
        number: 1,
        question: QuestionBuilder::new().build(),
        reveal_multiple_choice: true,
    });
    assert!(text.contains("This question IS NOT multiple choice."));
}

#[test]
fn renders_results_table() {
    let rows = vec![
        ResultRow {
            number: 1,
            prompt: "Is this a long question prompt?".to_owned(),
            correct_answers: vec!["A".to_owned(), "B".to_owned()],
            outcome: Outcome::Correct,
            help: Some("Because".to_owned()),
        },
        ResultRow {
            number: 2,
            prompt: "Short?".to_owned(),
            correct_answers: vec!["C".to_owned()],
            outcome: Outcome::Unanswered,
            help: None,
        },
    ];
    let text = render(&Message::Results(rows));
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[1].contains("Question") && lines[1].contains("Help"));
    assert!(lines[3].contains("#1 Is this a long"));
    assert!(lines[3].contains("A, B"));
    assert!(lines[3].contains("✔"));
    assert!(lines[4].contains("question prompt?"));
    assert!(lines[5].contains("#2 Short?"));
    assert!(lines[5].contains(" - "));
}

#[test]
fn renders_scores_and_answer() {
    assert_eq!(
        render(&Message::ScoresRecap { wrong: 1, correct: 2 }),
        "Results: errors: 1 - correct: 2\n"
    );
    assert_eq!(
        render(&Message::YourAnswer(vec!["A".to_owned(), "B".to_owned()])),
        "✎ Your answer: A, B\n\n"
    );
    assert_eq!(
        render(&Message::InvalidAnswer("7".to_owned())),
        "Answer 7 is invalid.\n"
    );
}

#[test]
fn reads_lines_until_end_of_input() {
    let mut output = TerminalOutput::new(&b"B\r\nA, C\n"[..], Vec::new(), 80);
    assert_eq!(output.read_line().unwrap(), Some("B".to_owned()));
    assert_eq!(output.read_line().unwrap(), Some("A, C".to_owned()));
    assert_eq!(output.read_line().unwrap(), None);
    assert_eq!(String::from_utf8(output.into_output()).unwrap(), "> > > ");
}

#[test]
fn replaces_undecodable_input() {
    let mut output = TerminalOutput::new(&b"\xc9\nBlue\n"[..], Vec::new(), 80);
    assert_eq!(output.read_line().unwrap(), Some("\u{FFFD}".to_owned()));
    assert_eq!(output.read_line().unwrap(), Some("Blue".to_owned()));
    assert_eq!(output.read_line().unwrap(), None);
}
