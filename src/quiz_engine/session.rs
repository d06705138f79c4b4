//! The session state machine.
//!
//! Lifecycle: mode select → in progress → (exam only) finished. Every
//! rejected precondition — advancing without an answer, retreating at the
//! first question, choosing while the answer is locked — is a silent no-op
//! at this boundary, mirroring a disabled control in the client. Nothing in
//! normal operation returns an error.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::quiz_engine::bank::QuestionBank;
use crate::quiz_engine::explain;
use crate::quiz_engine::models::{
    ExamReport, ExamVerdict, ProgressStats, Question, QuizMode, SessionRequest,
};
use crate::quiz_engine::shuffle;

/// An exam score of 70 % or better passes.
pub const PASS_SCORE: u32 = 70;

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    ModeSelect,
    InProgress,
    Finished,
}

/// One run of the quiz, from mode selection to restart.
///
/// Owns the only mutable state in the system. The bank itself is read-only;
/// `begin` hands the session an independently shuffled copy, so the order of
/// questions and of each question's options differs per session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSession {
    bank: QuestionBank,
    mode: Option<QuizMode>,
    questions: Vec<Question>,
    current: usize,
    answers_given: HashMap<u32, String>,
    show_immediate_result: bool,
    show_final_results: bool,
}

impl QuizSession {
    pub fn new(bank: QuestionBank) -> Self {
        QuizSession {
            bank,
            mode: None,
            questions: Vec::new(),
            current: 0,
            answers_given: HashMap::new(),
            show_immediate_result: false,
            show_final_results: false,
        }
    }

    // -- lifecycle -----------------------------------------------------------

    /// Start a session in the requested mode.
    ///
    /// No-op unless the session is at mode select — call [`restart`] first to
    /// abandon a running session. `rng_seed: Some(n)` reproduces the exact
    /// same ordering every time; `None` draws from entropy.
    ///
    /// [`restart`]: QuizSession::restart
    pub fn begin(&mut self, request: SessionRequest) {
        let mut rng: StdRng = match request.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.begin_with_rng(request.mode, &mut rng);
    }

    /// Same as [`begin`], with a caller-supplied random source.
    ///
    /// [`begin`]: QuizSession::begin
    pub fn begin_with_rng<R: Rng>(&mut self, mode: QuizMode, rng: &mut R) {
        if self.mode.is_some() {
            return;
        }
        self.questions = shuffle::prepare(self.bank.questions(), rng);
        self.mode = Some(mode);
        self.current = 0;
        self.answers_given.clear();
        self.show_immediate_result = false;
        self.show_final_results = false;
    }

    /// Discard all session data and return to mode select. Valid in any state.
    pub fn restart(&mut self) {
        self.mode = None;
        self.questions.clear();
        self.current = 0;
        self.answers_given.clear();
        self.show_immediate_result = false;
        self.show_final_results = false;
    }

    // -- per-question actions ------------------------------------------------

    /// Record `text` as the answer to the current question, overwriting any
    /// earlier choice. No-op when the session is not in progress or the
    /// current answer is locked (training mode, feedback showing). In
    /// training mode the answer locks and feedback becomes visible.
    pub fn choose(&mut self, text: &str) {
        if self.phase() != SessionPhase::InProgress || self.show_immediate_result {
            return;
        }
        let Some(question) = self.questions.get(self.current) else {
            return;
        };
        self.answers_given.insert(question.id, text.to_string());
        if self.mode == Some(QuizMode::Training) {
            self.show_immediate_result = true;
        }
    }

    /// Advance to the next question, or finish the exam after the last one.
    ///
    /// No-op without a recorded answer for the current question. In training
    /// mode the last question is terminal: there is nothing to advance to.
    pub fn next(&mut self) {
        if !self.can_advance() {
            return;
        }
        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.show_immediate_result = false;
        } else if self.mode == Some(QuizMode::Exam) {
            self.show_final_results = true;
        }
    }

    /// Step back one question. No-op at the first question. The earlier
    /// answer stays recorded: editable in exam mode, re-lockable in training.
    pub fn previous(&mut self) {
        if !self.can_retreat() {
            return;
        }
        self.current -= 1;
        self.show_immediate_result = false;
    }

    // -- observable state ----------------------------------------------------

    pub fn phase(&self) -> SessionPhase {
        match self.mode {
            None => SessionPhase::ModeSelect,
            Some(_) if self.show_final_results => SessionPhase::Finished,
            Some(_) => SessionPhase::InProgress,
        }
    }

    pub fn mode(&self) -> Option<QuizMode> {
        self.mode
    }

    /// The session's shuffled questions. Empty at mode select.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Fixed size of the underlying bank.
    pub fn total(&self) -> usize {
        self.bank.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&Question> {
        if self.phase() != SessionPhase::InProgress {
            return None;
        }
        self.questions.get(self.current)
    }

    /// The recorded answer text for the current question, if any.
    pub fn chosen_answer(&self) -> Option<&str> {
        let question = self.questions.get(self.current)?;
        self.answers_given.get(&question.id).map(String::as_str)
    }

    /// The recorded answer text for a specific question id, if any.
    pub fn answer_for(&self, question_id: u32) -> Option<&str> {
        self.answers_given.get(&question_id).map(String::as_str)
    }

    /// Whether the current answer is locked (training mode, feedback shown).
    pub fn is_locked(&self) -> bool {
        self.show_immediate_result
    }

    /// Whether the chosen answer for the current question is the correct one.
    /// `None` while nothing is chosen.
    pub fn is_current_correct(&self) -> Option<bool> {
        let question = self.questions.get(self.current)?;
        let chosen = self.answers_given.get(&question.id)?;
        let correct = question.correct_answer()?;
        Some(chosen == &correct.text)
    }

    /// Explanation for the current question. Present only in training mode
    /// with a locked answer — exam mode never shows feedback mid-session.
    pub fn current_explanation(&self) -> Option<String> {
        if self.mode != Some(QuizMode::Training) || !self.show_immediate_result {
            return None;
        }
        let question = self.questions.get(self.current)?;
        let correct = question.correct_answer()?;
        Some(explain::explanation(&question.text, &correct.text))
    }

    pub fn can_advance(&self) -> bool {
        self.phase() == SessionPhase::InProgress && self.chosen_answer().is_some()
    }

    pub fn can_retreat(&self) -> bool {
        self.phase() == SessionPhase::InProgress && self.current > 0
    }

    pub fn is_last_question(&self) -> bool {
        !self.questions.is_empty() && self.current + 1 == self.questions.len()
    }

    /// `(current + 1) / total`, clamped to 0 at mode select.
    pub fn progress_fraction(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        (self.current + 1) as f64 / self.questions.len() as f64
    }

    // -- scoring -------------------------------------------------------------

    /// Running tally. Computed on demand, never cached.
    pub fn stats(&self) -> ProgressStats {
        let correct = self
            .questions
            .iter()
            .filter(|q| {
                let Some(given) = self.answers_given.get(&q.id) else {
                    return false;
                };
                q.correct_answer().is_some_and(|a| &a.text == given)
            })
            .count();
        ProgressStats {
            answered: self.answers_given.len(),
            correct,
            total: self.total(),
        }
    }

    /// `round(100 × correct / total)`.
    pub fn score_percent(&self) -> u32 {
        let stats = self.stats();
        score_percent(stats.correct, stats.total)
    }

    /// The final exam report. `Some` only once the exam is finished.
    pub fn report(&self) -> Option<ExamReport> {
        if self.phase() != SessionPhase::Finished {
            return None;
        }
        let stats = self.stats();
        let score = score_percent(stats.correct, stats.total);
        Some(ExamReport {
            correct: stats.correct,
            total: stats.total,
            score_percent: score,
            verdict: verdict(score),
        })
    }
}

/// `round(100 × correct / total)` as the client displays it.
pub fn score_percent(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * correct as f64 / total as f64).round() as u32
}

pub fn verdict(score: u32) -> ExamVerdict {
    if score >= PASS_SCORE {
        ExamVerdict::Pass
    } else {
        ExamVerdict::Fail
    }
}
