use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Quiz primitives
// ---------------------------------------------------------------------------

/// The two ways a session can run.
///
/// `Training` shows correctness and an explanation right after every answer;
/// `Exam` stays silent until the final score screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizMode {
    Training,
    Exam,
}

impl fmt::Display for QuizMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizMode::Training => write!(f, "Тренировка"),
            QuizMode::Exam => write!(f, "Экзамен"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub text: String,
    pub is_correct: bool,
}

impl AnswerOption {
    pub fn new(text: impl Into<String>, is_correct: bool) -> Self {
        AnswerOption { text: text.into(), is_correct }
    }
}

/// One bank entry: a question with its answer options.
///
/// A validated bank guarantees exactly one option has `is_correct == true`
/// and that `id` is unique across the bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub answers: Vec<AnswerOption>,
}

impl Question {
    /// The option marked correct. `None` only for unvalidated data.
    pub fn correct_answer(&self) -> Option<&AnswerOption> {
        self.answers.iter().find(|a| a.is_correct)
    }
}

// ---------------------------------------------------------------------------
// Session request / report types
// ---------------------------------------------------------------------------

/// How to start a session.
///
/// `rng_seed: Some(n)` reproduces the exact same question and answer order
/// every time — useful for tests and for replaying a session. `None` draws
/// from entropy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SessionRequest {
    pub mode: QuizMode,
    pub rng_seed: Option<u64>,
}

impl SessionRequest {
    /// Minimal constructor: entropy-seeded session in the given mode.
    pub fn new(mode: QuizMode) -> Self {
        SessionRequest { mode, rng_seed: None }
    }
}

/// Running tally over the answers given so far. Computed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressStats {
    pub answered: usize,
    pub correct: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExamVerdict {
    Pass,
    Fail,
}

impl fmt::Display for ExamVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExamVerdict::Pass => write!(f, "Зачет"),
            ExamVerdict::Fail => write!(f, "Не зачет"),
        }
    }
}

/// Final exam result. Only a finished exam session produces one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamReport {
    pub correct: usize,
    pub total: usize,
    pub score_percent: u32,
    pub verdict: ExamVerdict,
}
