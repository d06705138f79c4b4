//! Full walkthrough of both session modes.
//!
//! Run with: `cargo run --example demo`
//!
//! This example shows how `ict_exam_trainer` works end to end:
//!
//! 1. **Training mode** — a seeded session where the first questions are
//!    answered (one of them deliberately wrong), showing the lock, the
//!    per-option states, and the resolved explanation after every answer.
//!
//! 2. **Exam mode** — a seeded session answered to the end, showing the
//!    final score screen with the pass/fail verdict.
//!
//! 3. **View state JSON** — the exact render model the web client consumes,
//!    for one training screen and the final exam screen.
//!
//! ## Key concepts demonstrated
//!
//! - `SessionRequest { rng_seed: Some(u64), .. }` makes a session fully
//!   deterministic — the same question and option order every run.
//! - Training locks each answered question (`is_locked`) and resolves an
//!   explanation from the keyword table.
//! - Exam mode stays silent until the last `next()`, then produces an
//!   `ExamReport`.

use ict_exam_trainer::{
    to_view_state, QuestionBank, QuizMode, QuizSession, SessionRequest,
};

/// Print the current question with its options and recorded choice.
fn print_question(session: &QuizSession) {
    let Some(question) = session.current_question() else {
        return;
    };
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "  [{} / {}]  {}",
        session.current_index() + 1,
        session.total(),
        question.text
    );
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for (i, option) in question.answers.iter().enumerate() {
        let marker = if session.chosen_answer() == Some(option.text.as_str()) {
            ">"
        } else {
            " "
        };
        println!("  {marker} {}. {}", i + 1, option.text);
    }
}

fn main() {
    let bank = QuestionBank::builtin();
    println!();
    println!("══ Question bank: {} questions ══", bank.len());

    // ── Training mode ────────────────────────────────────────────────────────
    // Seeded session: same ordering every run. The second answer is
    // deliberately wrong to show the feedback for a miss.
    println!();
    println!("══ Training mode (seed=42) ══");
    println!();

    let mut session = QuizSession::new(bank.clone());
    session.begin(SessionRequest { mode: QuizMode::Training, rng_seed: Some(42) });

    for round in 0..3 {
        print_question(&session);

        let answer = session
            .current_question()
            .and_then(|q| {
                if round == 1 {
                    q.answers.iter().find(|a| !a.is_correct)
                } else {
                    q.correct_answer()
                }
            })
            .map(|a| a.text.clone())
            .unwrap_or_default();
        session.choose(&answer);

        let mark = match session.is_current_correct() {
            Some(true) => "верно",
            Some(false) => "неверно",
            None => "?",
        };
        println!();
        println!("  Ответ: {answer} ({mark}, locked={})", session.is_locked());
        if let Some(explanation) = session.current_explanation() {
            println!("  Пояснение: {explanation}");
        }
        println!();
        session.next();
    }

    let stats = session.stats();
    println!("  Промежуточный итог: {} из {} верно", stats.correct, stats.answered);

    // ── Exam mode ────────────────────────────────────────────────────────────
    // Answer every question, one of them wrong; the report appears only after
    // the final advance.
    println!();
    println!("══ Exam mode (seed=7) ══");
    println!();

    let mut exam = QuizSession::new(bank);
    exam.begin(SessionRequest { mode: QuizMode::Exam, rng_seed: Some(7) });

    let total = exam.total();
    for i in 0..total {
        let answer = exam
            .current_question()
            .and_then(|q| {
                if i == 0 {
                    q.answers.iter().find(|a| !a.is_correct)
                } else {
                    q.correct_answer()
                }
            })
            .map(|a| a.text.clone())
            .unwrap_or_default();
        exam.choose(&answer);
        exam.next();
    }

    if let Some(report) = exam.report() {
        println!("  Результат: {} %  ({})", report.score_percent, report.verdict);
        println!("  Верных ответов: {} из {}", report.correct, report.total);
    }

    // ── View state JSON ──────────────────────────────────────────────────────
    // The render model the web client consumes, straight from the adapter.
    println!();
    println!("══ View state for the client ══");
    println!();

    let mut preview = QuizSession::new(QuestionBank::builtin());
    preview.begin(SessionRequest { mode: QuizMode::Training, rng_seed: Some(42) });
    let answer = preview
        .current_question()
        .and_then(|q| q.correct_answer())
        .map(|a| a.text.clone())
        .unwrap_or_default();
    preview.choose(&answer);

    println!("{}", serde_json::to_string_pretty(&to_view_state(&preview)).unwrap());
    println!();
    println!("{}", serde_json::to_string_pretty(&to_view_state(&exam)).unwrap());
}
