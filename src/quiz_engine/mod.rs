//! Core quiz engine — the question bank, shuffling, feedback, and the
//! session state machine.
//!
//! ## Module overview
//!
//! | Module    | Purpose |
//! |-----------|---------|
//! | `models`  | All shared types: questions, options, modes, reports |
//! | `bank`    | The compiled-in question bank with load-time validation |
//! | `shuffle` | Fisher-Yates shuffle and per-session bank preparation |
//! | `explain` | Keyword table → per-question explanation text |
//! | `session` | `QuizSession` state machine: navigation, locking, scoring |

pub mod bank;
pub mod explain;
pub mod models;
pub mod session;
pub mod shuffle;

// Re-export the public API surface so callers can use
// `quiz_engine::QuizSession` without reaching into sub-modules.
pub use bank::{BankError, QuestionBank};
pub use explain::explanation;
pub use models::{
    AnswerOption, ExamReport, ExamVerdict, ProgressStats, Question, QuizMode, SessionRequest,
};
pub use session::{score_percent, verdict, QuizSession, SessionPhase, PASS_SCORE};
