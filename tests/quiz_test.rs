//! Tests for the trivia quiz state machine.

use tembo_trails::{Question, QuizError, QuizProgress, QuizRound, content};

fn two_questions() -> Vec<Question> {
    vec![
        Question {
            id: 1,
            prompt: "First?".to_string(),
            options: vec!["a".to_string(), "b".to_string()],
            correct: 0,
            explanation: "a it is".to_string(),
        },
        Question {
            id: 2,
            prompt: "Second?".to_string(),
            options: vec!["c".to_string(), "d".to_string(), "e".to_string()],
            correct: 2,
            explanation: "e it is".to_string(),
        },
    ]
}

#[test]
fn test_empty_quiz_rejected() {
    assert!(matches!(
        QuizRound::new(Vec::new()),
        Err(QuizError::NoQuestions)
    ));
}

#[test]
fn test_correct_answer_scores() {
    let mut quiz = QuizRound::new(two_questions()).expect("valid quiz");

    let answered = quiz.answer(0).expect("in range");
    assert!(answered.correct);
    assert_eq!(answered.explanation, "a it is");
    assert_eq!(quiz.score(), 1);
}

#[test]
fn test_wrong_answer_reports_correct_option() {
    let mut quiz = QuizRound::new(two_questions()).expect("valid quiz");

    let answered = quiz.answer(1).expect("in range");
    assert!(!answered.correct);
    assert_eq!(answered.correct_answer, 0);
    assert_eq!(quiz.score(), 0);
}

#[test]
fn test_out_of_range_choice_rejected() {
    let mut quiz = QuizRound::new(two_questions()).expect("valid quiz");
    assert!(matches!(
        quiz.answer(5),
        Err(QuizError::ChoiceOutOfRange { choice: 5, options: 2 })
    ));
    // The failed answer neither scored nor consumed the question.
    assert_eq!(quiz.score(), 0);
    assert!(quiz.answer(0).is_ok());
}

#[test]
fn test_double_answer_rejected() {
    let mut quiz = QuizRound::new(two_questions()).expect("valid quiz");
    quiz.answer(0).expect("first answer");
    assert!(matches!(quiz.answer(1), Err(QuizError::AlreadyAnswered)));
    assert_eq!(quiz.score(), 1);
}

#[test]
fn test_advance_requires_answer() {
    let mut quiz = QuizRound::new(two_questions()).expect("valid quiz");
    assert!(matches!(quiz.advance(), Err(QuizError::NotAnswered)));
}

#[test]
fn test_perfect_run() {
    let mut quiz = QuizRound::new(two_questions()).expect("valid quiz");

    quiz.answer(0).expect("answer");
    assert!(matches!(
        quiz.advance().expect("advance"),
        QuizProgress::NextQuestion
    ));
    assert_eq!(quiz.current_question().expect("second question").id, 2);

    quiz.answer(2).expect("answer");
    match quiz.advance().expect("advance") {
        QuizProgress::Finished(summary) => {
            assert_eq!(summary.score, 2);
            assert_eq!(summary.total, 2);
            assert!(summary.perfect());
        }
        QuizProgress::NextQuestion => panic!("Quiz should be finished"),
    }

    assert!(quiz.is_finished());
    assert!(quiz.current_question().is_none());
    assert!(matches!(quiz.answer(0), Err(QuizError::Finished)));
    assert!(matches!(quiz.advance(), Err(QuizError::Finished)));
}

#[test]
fn test_imperfect_run_is_not_perfect() {
    let mut quiz = QuizRound::new(two_questions()).expect("valid quiz");

    quiz.answer(1).expect("answer");
    quiz.advance().expect("advance");
    quiz.answer(2).expect("answer");
    match quiz.advance().expect("advance") {
        QuizProgress::Finished(summary) => {
            assert_eq!(summary.score, 1);
            assert!(!summary.perfect());
        }
        QuizProgress::NextQuestion => panic!("Quiz should be finished"),
    }
}

#[test]
fn test_standard_question_bank_is_playable() {
    let questions = content::quiz_questions();
    assert!(!questions.is_empty());
    for question in &questions {
        assert!(question.correct < question.options.len());
        assert!(!question.prompt.is_empty());
        assert!(!question.explanation.is_empty());
    }
    let mut quiz = QuizRound::new(questions).expect("valid quiz");
    quiz.answer(0).expect("option 0 always exists");
}
