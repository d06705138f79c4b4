//! Unit tests for the `ict_exam_trainer` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! # Coverage
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Preparation | Session copy is a permutation; bank untouched; one correct option per question survives shuffling |
//! | Determinism | Same seed → identical order; different seeds → varied order; entropy smoke test |
//! | Scoring | Idempotence; 0 % / 100 % / exact-70 % boundary; verdict labels |
//! | Training flow | Locking, feedback, re-lock after retreat, terminal last question |
//! | Exam flow | Silent answering, revision, finish transition, final report |
//! | No-op guards | `previous` at 0, `next` without answer, `choose` while locked, `begin` while active |
//! | Resolver | Keyword match (any case), table order, verbatim fallback |
//! | Bank validation | Every `BankError` variant; the builtin bank loads |
//! | View adapter | All three screens; option visual states per mode; advance label |

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::quiz_engine::shuffle;
use crate::quiz_engine::{
    explanation, score_percent, verdict, AnswerOption, BankError, ExamVerdict, Question,
    QuestionBank, QuizMode, QuizSession, SessionPhase, SessionRequest,
};
use crate::view_adapter::to_view_state;

// ── helpers ──────────────────────────────────────────────────────────────────

fn question(id: u32, text: &str, answers: &[(&str, bool)]) -> Question {
    Question {
        id,
        text: text.to_string(),
        answers: answers
            .iter()
            .map(|&(text, is_correct)| AnswerOption::new(text, is_correct))
            .collect(),
    }
}

/// A three-question bank with known content for scenario tests.
fn mini_bank() -> QuestionBank {
    QuestionBank::new(vec![
        question(1, "Первый вопрос?", &[("Верно", true), ("Неверно", false)]),
        question(2, "Второй вопрос?", &[("Да", true), ("Нет", false), ("Не знаю", false)]),
        question(3, "Третий вопрос?", &[("A", false), ("B", true)]),
    ])
    .expect("mini bank must be valid")
}

/// Start a deterministic session over `bank`.
fn start(bank: QuestionBank, mode: QuizMode, seed: u64) -> QuizSession {
    let mut session = QuizSession::new(bank);
    session.begin(SessionRequest { mode, rng_seed: Some(seed) });
    session
}

/// Text of the correct option for the current question.
fn correct_text(session: &QuizSession) -> String {
    session
        .current_question()
        .and_then(|q| q.correct_answer())
        .map(|a| a.text.clone())
        .expect("current question with a correct option")
}

/// Text of some incorrect option for the current question.
fn wrong_text(session: &QuizSession) -> String {
    session
        .current_question()
        .and_then(|q| q.answers.iter().find(|a| !a.is_correct))
        .map(|a| a.text.clone())
        .expect("current question with an incorrect option")
}

/// The id-order of the session's questions.
fn question_order(session: &QuizSession) -> Vec<u32> {
    session.questions().iter().map(|q| q.id).collect()
}

const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

// ── preparation ──────────────────────────────────────────────────────────────

#[test]
fn prepared_session_is_a_permutation_of_the_bank() {
    let bank = QuestionBank::builtin();
    for seed in SEEDS {
        let session = start(bank.clone(), QuizMode::Exam, seed);

        let mut ids = question_order(&session);
        ids.sort_unstable();
        let mut bank_ids: Vec<u32> = bank.questions().iter().map(|q| q.id).collect();
        bank_ids.sort_unstable();
        assert_eq!(ids, bank_ids, "same set of questions expected (seed={seed})");

        for q in session.questions() {
            let source = bank
                .questions()
                .iter()
                .find(|b| b.id == q.id)
                .expect("shuffled question exists in the bank");
            let mut got: Vec<&AnswerOption> = q.answers.iter().collect();
            let mut want: Vec<&AnswerOption> = source.answers.iter().collect();
            got.sort_by(|a, b| a.text.cmp(&b.text));
            want.sort_by(|a, b| a.text.cmp(&b.text));
            assert_eq!(got, want, "option set changed for question {} (seed={seed})", q.id);

            let correct = q.answers.iter().filter(|a| a.is_correct).count();
            assert_eq!(correct, 1, "question {} lost its single correct option", q.id);
        }
    }
}

#[test]
fn preparation_leaves_the_bank_untouched() {
    let bank = QuestionBank::builtin();
    let before = bank.questions().to_vec();

    let mut rng = StdRng::seed_from_u64(5);
    let prepared = shuffle::prepare(bank.questions(), &mut rng);

    assert_eq!(bank.questions(), &before[..], "source bank must not be mutated");
    assert_eq!(prepared.len(), before.len());
}

#[test]
fn same_seed_produces_identical_session() {
    let a = start(QuestionBank::builtin(), QuizMode::Exam, 12345);
    let b = start(QuestionBank::builtin(), QuizMode::Exam, 12345);

    assert_eq!(question_order(&a), question_order(&b));
    for (qa, qb) in a.questions().iter().zip(b.questions().iter()) {
        assert_eq!(qa.answers, qb.answers, "answer order mismatch for question {}", qa.id);
    }
}

#[test]
fn different_seeds_produce_varied_order() {
    let a = start(QuestionBank::builtin(), QuizMode::Exam, 1);
    let b = start(QuestionBank::builtin(), QuizMode::Exam, 2);
    assert_ne!(question_order(&a), question_order(&b));
}

#[test]
fn entropy_session_is_valid() {
    // Smoke test: rng_seed: None must not panic and must satisfy invariants.
    let mut session = QuizSession::new(QuestionBank::builtin());
    session.begin(SessionRequest::new(QuizMode::Training));

    assert_eq!(session.phase(), SessionPhase::InProgress);
    assert_eq!(session.questions().len(), session.total());
    assert!(session.current_question().is_some());
}

// ── scoring ──────────────────────────────────────────────────────────────────

#[test]
fn scoring_is_idempotent() {
    let mut session = start(mini_bank(), QuizMode::Exam, 9);
    session.choose(&correct_text(&session));
    session.next();
    session.choose(&wrong_text(&session));

    let first = session.stats();
    let second = session.stats();
    assert_eq!(first, second);
    assert_eq!(session.score_percent(), session.score_percent());
}

#[test]
fn score_table_and_verdict_labels() {
    // Nothing right out of the full bank: 0 %, «Не зачет».
    assert_eq!(score_percent(0, 213), 0);
    assert_eq!(verdict(score_percent(0, 213)), ExamVerdict::Fail);
    assert_eq!(ExamVerdict::Fail.to_string(), "Не зачет");

    // Everything right: 100 %, «Зачет».
    assert_eq!(score_percent(213, 213), 100);
    assert_eq!(verdict(score_percent(213, 213)), ExamVerdict::Pass);
    assert_eq!(ExamVerdict::Pass.to_string(), "Зачет");

    // Exactly 70 % is a pass.
    assert_eq!(score_percent(7, 10), 70);
    assert_eq!(verdict(70), ExamVerdict::Pass);
    assert_eq!(verdict(69), ExamVerdict::Fail);
}

#[test]
fn exam_report_matches_answers_given() {
    // Two right, one wrong over the three-question bank: 67 %, fail.
    let mut session = start(mini_bank(), QuizMode::Exam, 3);
    session.choose(&correct_text(&session));
    session.next();
    session.choose(&correct_text(&session));
    session.next();
    session.choose(&wrong_text(&session));
    session.next();

    let report = session.report().expect("finished exam must yield a report");
    assert_eq!(report.correct, 2);
    assert_eq!(report.total, 3);
    assert_eq!(report.score_percent, 67);
    assert_eq!(report.verdict, ExamVerdict::Fail);
}

// ── training flow ────────────────────────────────────────────────────────────

#[test]
fn training_correct_answer_locks_and_reveals() {
    let mut session = start(mini_bank(), QuizMode::Training, 11);
    let answer = correct_text(&session);

    session.choose(&answer);

    assert!(session.is_locked());
    assert_eq!(session.is_current_correct(), Some(true));
    assert!(session.current_explanation().is_some());
    assert!(session.can_advance());
}

#[test]
fn training_wrong_answer_locks_with_feedback() {
    let mut session = start(mini_bank(), QuizMode::Training, 11);
    session.choose(&wrong_text(&session));

    assert!(session.is_locked());
    assert_eq!(session.is_current_correct(), Some(false));
    assert!(session.current_explanation().is_some());
}

#[test]
fn advance_clears_the_lock() {
    let mut session = start(mini_bank(), QuizMode::Training, 11);
    session.choose(&correct_text(&session));
    session.next();

    assert!(!session.is_locked());
    assert_eq!(session.current_index(), 1);
    assert!(session.current_explanation().is_none());
}

#[test]
fn retreat_unlocks_but_keeps_the_recorded_answer() {
    let mut session = start(mini_bank(), QuizMode::Training, 11);
    let first_id = session.current_question().map(|q| q.id).unwrap();
    let answer = correct_text(&session);
    session.choose(&answer);
    session.next();
    session.previous();

    assert_eq!(session.current_index(), 0);
    assert!(!session.is_locked());
    assert_eq!(session.answer_for(first_id), Some(answer.as_str()));

    // Re-answering locks again.
    session.choose(&wrong_text(&session));
    assert!(session.is_locked());
}

#[test]
fn training_last_question_is_terminal() {
    let mut session = start(mini_bank(), QuizMode::Training, 11);
    for _ in 0..3 {
        session.choose(&correct_text(&session));
        session.next();
    }

    // The final advance went nowhere: still in progress, same index, no report.
    assert_eq!(session.phase(), SessionPhase::InProgress);
    assert_eq!(session.current_index(), 2);
    assert!(session.report().is_none());
}

// ── exam flow ────────────────────────────────────────────────────────────────

#[test]
fn exam_answers_stay_silent_and_editable() {
    let mut session = start(mini_bank(), QuizMode::Exam, 21);
    let wrong = wrong_text(&session);
    let right = correct_text(&session);

    session.choose(&wrong);
    assert!(!session.is_locked());
    assert!(session.current_explanation().is_none());

    // Later answers overwrite, no history kept.
    session.choose(&right);
    assert_eq!(session.chosen_answer(), Some(right.as_str()));
    assert_eq!(session.stats().answered, 1);
}

#[test]
fn exam_finishes_after_the_last_advance() {
    let mut session = start(mini_bank(), QuizMode::Exam, 21);
    for _ in 0..3 {
        assert_eq!(session.phase(), SessionPhase::InProgress);
        session.choose(&correct_text(&session));
        session.next();
    }

    assert_eq!(session.phase(), SessionPhase::Finished);
    assert!(session.current_question().is_none());
    let report = session.report().expect("finished exam must yield a report");
    assert_eq!(report.score_percent, 100);
    assert_eq!(report.verdict, ExamVerdict::Pass);
}

#[test]
fn exam_allows_revising_earlier_answers() {
    let mut session = start(mini_bank(), QuizMode::Exam, 21);
    session.choose(&wrong_text(&session));
    session.next();
    session.choose(&correct_text(&session));

    session.previous();
    assert_eq!(session.current_index(), 0);
    session.choose(&correct_text(&session));
    session.next();
    session.next();
    session.choose(&correct_text(&session));
    session.next();

    let report = session.report().expect("finished exam must yield a report");
    assert_eq!(report.correct, 3, "revised answer must replace the original");
}

// ── no-op guards ─────────────────────────────────────────────────────────────

#[test]
fn previous_at_first_question_is_a_noop() {
    let mut session = start(mini_bank(), QuizMode::Exam, 31);
    let before = session.clone();
    session.previous();

    assert_eq!(session.current_index(), before.current_index());
    assert_eq!(session.phase(), before.phase());
    assert_eq!(question_order(&session), question_order(&before));
}

#[test]
fn next_without_an_answer_is_a_noop() {
    let mut session = start(mini_bank(), QuizMode::Exam, 31);
    session.next();
    assert_eq!(session.current_index(), 0);

    // Same at a later question.
    session.choose(&correct_text(&session));
    session.next();
    session.next();
    assert_eq!(session.current_index(), 1);
}

#[test]
fn choose_while_locked_is_a_noop() {
    let mut session = start(mini_bank(), QuizMode::Training, 31);
    let first = correct_text(&session);
    let other = wrong_text(&session);

    session.choose(&first);
    session.choose(&other);

    assert_eq!(session.chosen_answer(), Some(first.as_str()));
}

#[test]
fn begin_while_active_is_a_noop() {
    let mut session = start(mini_bank(), QuizMode::Training, 31);
    session.choose(&correct_text(&session));

    session.begin(SessionRequest { mode: QuizMode::Exam, rng_seed: Some(99) });

    assert_eq!(session.mode(), Some(QuizMode::Training));
    assert_eq!(session.stats().answered, 1, "running session must survive a stray begin");
}

#[test]
fn restart_discards_all_session_data() {
    let mut session = start(mini_bank(), QuizMode::Exam, 31);
    session.choose(&correct_text(&session));
    session.next();

    session.restart();

    assert_eq!(session.phase(), SessionPhase::ModeSelect);
    assert!(session.questions().is_empty());
    assert_eq!(session.stats().answered, 0);
    assert_eq!(session.current_index(), 0);

    // A fresh begin works after restart.
    session.begin(SessionRequest { mode: QuizMode::Training, rng_seed: Some(1) });
    assert_eq!(session.phase(), SessionPhase::InProgress);
}

// ── explanation resolver ─────────────────────────────────────────────────────

#[test]
fn resolver_matches_keywords_case_insensitively() {
    let expected = "ИКТ — Информационно-коммуникационные технологии.";

    assert_eq!(explanation("Аббревиатура ИКТ расшифровывается как:", "x"), expected);
    assert_eq!(explanation("АББРЕВИАТУРА ИКТ — ЧТО ЭТО?", "y"), expected);
    // The supplied correct answer is irrelevant once a keyword matches.
    assert_eq!(explanation("аббревиатура икт", "что угодно"), expected);
}

#[test]
fn resolver_scans_the_table_in_definition_order() {
    // Both keywords present: the earlier table entry wins.
    let text = "Аббревиатура ИКТ и Microsoft Excel";
    assert_eq!(explanation(text, "x"), "ИКТ — Информационно-коммуникационные технологии.");
}

#[test]
fn resolver_falls_back_to_the_correct_answer() {
    let out = explanation("Вопрос без единого ключевого слова", "Сорок два");
    assert!(out.contains("Сорок два"), "fallback must embed the correct answer verbatim: {out}");
}

// ── bank validation ──────────────────────────────────────────────────────────

#[test]
fn builtin_bank_is_valid() {
    let bank = QuestionBank::builtin();
    assert!(!bank.is_empty());
    for q in bank.questions() {
        assert_eq!(q.answers.iter().filter(|a| a.is_correct).count(), 1, "question {}", q.id);
        assert!(q.answers.len() >= 2, "question {}", q.id);
    }
}

#[test]
fn bank_rejects_a_question_with_no_correct_option() {
    let err = QuestionBank::new(vec![question(1, "q", &[("a", false), ("b", false)])]);
    assert_eq!(err.unwrap_err(), BankError::NoCorrectAnswer { id: 1 });
}

#[test]
fn bank_rejects_a_question_with_several_correct_options() {
    let err = QuestionBank::new(vec![question(7, "q", &[("a", true), ("b", true), ("c", false)])]);
    assert_eq!(err.unwrap_err(), BankError::MultipleCorrectAnswers { id: 7, count: 2 });
}

#[test]
fn bank_rejects_duplicate_question_ids() {
    let err = QuestionBank::new(vec![
        question(3, "first", &[("a", true), ("b", false)]),
        question(3, "second", &[("a", true), ("b", false)]),
    ]);
    assert_eq!(err.unwrap_err(), BankError::DuplicateQuestionId { id: 3 });
}

#[test]
fn bank_rejects_a_single_option_question() {
    let err = QuestionBank::new(vec![question(2, "q", &[("only", true)])]);
    assert_eq!(err.unwrap_err(), BankError::TooFewAnswers { id: 2, count: 1 });
}

#[test]
fn bank_rejects_empty_texts() {
    let err = QuestionBank::new(vec![question(4, "  ", &[("a", true), ("b", false)])]);
    assert_eq!(err.unwrap_err(), BankError::EmptyText { id: 4 });

    let err = QuestionBank::new(vec![question(5, "q", &[("", true), ("b", false)])]);
    assert_eq!(err.unwrap_err(), BankError::EmptyText { id: 5 });
}

#[test]
fn bank_rejects_an_empty_bank() {
    assert_eq!(QuestionBank::new(vec![]).unwrap_err(), BankError::Empty);
}

// ── view adapter ─────────────────────────────────────────────────────────────

#[test]
fn view_mode_select_screen() {
    let session = QuizSession::new(mini_bank());
    let view = to_view_state(&session);

    assert_eq!(view["screen"], "mode_select");
    assert_eq!(view["modes"][0]["label"], "Тренировка");
    assert_eq!(view["modes"][1]["label"], "Экзамен");
}

#[test]
fn view_question_screen_basics() {
    let session = start(mini_bank(), QuizMode::Exam, 41);
    let view = to_view_state(&session);

    assert_eq!(view["screen"], "question");
    assert_eq!(view["counter"]["current"], 1);
    assert_eq!(view["counter"]["total"], 3);
    assert_eq!(
        view["options"].as_array().map(Vec::len),
        session.current_question().map(|q| q.answers.len())
    );
    assert!(view["feedback"].is_null());
    assert_eq!(view["controls"]["can_go_back"], false);
    assert_eq!(view["controls"]["can_advance"], false);
}

#[test]
fn view_training_reveals_correctness_once_locked() {
    let mut session = start(mini_bank(), QuizMode::Training, 41);
    let wrong = wrong_text(&session);
    let right = correct_text(&session);
    session.choose(&wrong);

    let view = to_view_state(&session);
    let options = view["options"].as_array().unwrap();
    let state_of = |text: &str| {
        options
            .iter()
            .find(|o| o["text"] == text)
            .map(|o| o["state"].clone())
            .unwrap()
    };

    assert_eq!(state_of(&right), "correct");
    assert_eq!(state_of(&wrong), "incorrect");
    assert!(options.iter().all(|o| o["disabled"] == true));
    assert_eq!(view["feedback"]["label"], "Пояснение:");
    assert!(view["feedback"]["text"].as_str().is_some_and(|t| !t.is_empty()));
}

#[test]
fn view_exam_never_reveals_correctness() {
    let mut session = start(mini_bank(), QuizMode::Exam, 41);
    let chosen = wrong_text(&session);
    session.choose(&chosen);

    let view = to_view_state(&session);
    let options = view["options"].as_array().unwrap();

    for option in options {
        let state = option["state"].as_str().unwrap();
        assert!(
            state == "selected" || state == "unselected",
            "exam mode leaked state {state:?}"
        );
        assert_eq!(option["disabled"], false);
    }
    assert!(view["feedback"].is_null());
    assert_eq!(view["controls"]["can_advance"], true);
}

#[test]
fn view_advance_label_switches_on_the_last_question() {
    let mut session = start(mini_bank(), QuizMode::Exam, 41);
    assert_eq!(to_view_state(&session)["controls"]["advance_label"], "Далее");

    session.choose(&correct_text(&session));
    session.next();
    session.choose(&correct_text(&session));
    session.next();

    assert!(session.is_last_question());
    assert_eq!(to_view_state(&session)["controls"]["advance_label"], "Финиш");
}

#[test]
fn view_results_screen() {
    let mut session = start(mini_bank(), QuizMode::Exam, 41);
    for _ in 0..3 {
        session.choose(&correct_text(&session));
        session.next();
    }

    let view = to_view_state(&session);
    assert_eq!(view["screen"], "results");
    assert_eq!(view["score_percent"], 100);
    assert_eq!(view["verdict"], "Зачет");
    assert_eq!(view["passed"], true);
    assert_eq!(view["restart_label"], "Попробовать снова");
}

#[test]
fn progress_fraction_tracks_the_counter() {
    let mut session = start(mini_bank(), QuizMode::Exam, 51);
    assert!((session.progress_fraction() - 1.0 / 3.0).abs() < 1e-9);

    session.choose(&correct_text(&session));
    session.next();
    assert!((session.progress_fraction() - 2.0 / 3.0).abs() < 1e-9);
}
