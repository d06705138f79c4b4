use serde_json::{json, Value};

use crate::quiz_engine::models::{Question, QuizMode};
use crate::quiz_engine::session::{QuizSession, SessionPhase};

/// Visual state of one option button, matching the class names the web
/// client styles: `unselected`, `selected`, `correct`, `incorrect`.
///
/// `correct` / `incorrect` appear only in training mode once the answer is
/// locked; exam mode never reveals correctness mid-session.
fn option_state(option_text: &str, is_correct: bool, chosen: Option<&str>, reveal: bool) -> &'static str {
    let selected = chosen == Some(option_text);
    if reveal {
        if is_correct {
            "correct"
        } else if selected {
            "incorrect"
        } else {
            "unselected"
        }
    } else if selected {
        "selected"
    } else {
        "unselected"
    }
}

/// Build the options array for the current question.
fn options(question: &Question, chosen: Option<&str>, reveal: bool, locked: bool) -> Value {
    let entries: Vec<Value> = question
        .answers
        .iter()
        .map(|opt| {
            json!({
                "text": opt.text,
                "state": option_state(&opt.text, opt.is_correct, chosen, reveal),
                "disabled": locked
            })
        })
        .collect();
    Value::Array(entries)
}

fn mode_select_screen() -> Value {
    json!({
        "screen": "mode_select",
        "title": "ИКТ в экономике",
        "modes": [
            { "id": "training", "label": QuizMode::Training.to_string() },
            { "id": "exam",     "label": QuizMode::Exam.to_string() }
        ]
    })
}

fn question_screen(session: &QuizSession, mode: QuizMode, question: &Question) -> Value {
    let reveal = mode == QuizMode::Training && session.is_locked();
    let chosen = session.chosen_answer();

    let feedback = match session.current_explanation() {
        Some(text) => json!({ "label": "Пояснение:", "text": text }),
        None => Value::Null,
    };

    json!({
        "screen": "question",
        "mode": mode.to_string(),
        "counter": {
            "current": session.current_index() + 1,
            "total": session.total()
        },
        "progress": session.progress_fraction(),
        "question": question.text,
        "options": options(question, chosen, reveal, session.is_locked()),
        "feedback": feedback,
        "controls": {
            "can_go_back": session.can_retreat(),
            "can_advance": session.can_advance(),
            "advance_label": if session.is_last_question() { "Финиш" } else { "Далее" }
        }
    })
}

fn results_screen(session: &QuizSession) -> Value {
    let score = session.score_percent();
    let verdict = crate::quiz_engine::session::verdict(score);
    json!({
        "screen": "results",
        "score_percent": score,
        "verdict": verdict.to_string(),
        "passed": verdict == crate::quiz_engine::models::ExamVerdict::Pass,
        "restart_label": "Попробовать снова"
    })
}

/// Map a [`QuizSession`] to the JSON view state the web client renders.
///
/// Exactly one of three screens, keyed by `"screen"`: `mode_select`,
/// `question`, or `results`.
pub fn to_view_state(session: &QuizSession) -> Value {
    match (session.phase(), session.mode(), session.current_question()) {
        (SessionPhase::Finished, _, _) => results_screen(session),
        (SessionPhase::InProgress, Some(mode), Some(question)) => {
            question_screen(session, mode, question)
        }
        // ModeSelect, or an in-progress session with no question to show
        // (unreachable with a validated bank).
        _ => mode_select_screen(),
    }
}
