//! # ict_exam_trainer
//!
//! A fully offline, deterministic quiz trainer for the «ИКТ в экономике» exam.
//!
//! This library drives a fixed bank of multiple-choice questions through two
//! session modes: *training* (correctness and an explanation appear right
//! after every answer, which then locks until you move on) and *exam* (all
//! feedback is deferred to a single final score screen with a pass/fail
//! verdict).
//!
//! ## How it works
//!
//! 1. Build a [`QuizSession`] over a [`QuestionBank`] (the bundled bank or
//!    your own validated one).
//! 2. Call [`QuizSession::begin`] with a [`SessionRequest`] — the engine
//!    shuffles the question order and each question's answer order with an
//!    unbiased Fisher-Yates pass, leaving the bank itself untouched.
//! 3. Feed user intents into the session — [`choose`], [`next`],
//!    [`previous`], [`restart`] — and read the observable state back. Every
//!    rejected precondition is a silent no-op, mirroring a disabled button.
//! 4. Render with [`to_view_state`], which maps the session to the JSON view
//!    state the web client consumes.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the exact
//!   same session ordering every time — useful for tests and replays.
//! - **Two modes**: training locks each answered question and shows an
//!   explanation resolved from a keyword table; exam scores at the end
//!   (`round(100 × correct / total)`, pass at ≥ 70 %).
//! - **Fail-fast bank validation**: a malformed entry (no correct option,
//!   several correct options, duplicate id…) refuses to load — authoring
//!   bugs never reach a running session.
//!
//! ## Quick start
//!
//! ```rust
//! use ict_exam_trainer::{
//!     to_view_state, QuestionBank, QuizMode, QuizSession, SessionRequest,
//! };
//!
//! // Deterministic training session over the bundled bank:
//! let mut session = QuizSession::new(QuestionBank::builtin());
//! session.begin(SessionRequest { mode: QuizMode::Training, rng_seed: Some(42) });
//!
//! // Answer the first question with its correct option — the answer locks
//! // and an explanation becomes available:
//! let correct = session
//!     .current_question()
//!     .and_then(|q| q.correct_answer())
//!     .map(|a| a.text.clone())
//!     .unwrap();
//! session.choose(&correct);
//! assert!(session.is_locked());
//! println!("{}", session.current_explanation().unwrap());
//!
//! // The web client renders this JSON directly:
//! let view = to_view_state(&session);
//! assert_eq!(view["screen"], "question");
//!
//! session.next();
//! ```
//!
//! [`choose`]: QuizSession::choose
//! [`next`]: QuizSession::next
//! [`previous`]: QuizSession::previous
//! [`restart`]: QuizSession::restart

pub mod quiz_engine;
pub mod view_adapter;

// Convenience re-exports so callers can use `ict_exam_trainer::QuizSession`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    score_percent, verdict, AnswerOption, BankError, ExamReport, ExamVerdict, ProgressStats,
    Question, QuestionBank, QuizMode, QuizSession, SessionPhase, SessionRequest, PASS_SCORE,
};
pub use view_adapter::to_view_state;

#[cfg(test)]
mod tests;
