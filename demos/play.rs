//! Interactive terminal front-end for a full quiz session.
//!
//! Run with: `cargo run --example play`
//!
//! Commands at the question prompt:
//!
//! - `1`..`9` — choose that option
//! - `n`      — next question (needs a recorded answer)
//! - `p`      — previous question
//! - `r`      — restart from mode select
//! - `q`      — quit

use std::io::{self, Write};

use ict_exam_trainer::{
    QuestionBank, QuizMode, QuizSession, SessionPhase, SessionRequest,
};

fn read_line(stdin: &io::Stdin) -> Option<String> {
    print!("> ");
    io::stdout().flush().ok();
    let mut input = String::new();
    if stdin.read_line(&mut input).is_err() {
        eprintln!("Ошибка ввода, попробуйте еще раз.");
        return None;
    }
    Some(input.trim().to_string())
}

fn print_mode_select() {
    println!();
    println!("=== ИКТ в экономике ===");
    println!("  1 -> {}", QuizMode::Training);
    println!("  2 -> {}", QuizMode::Exam);
    println!("  q -> выход");
}

fn print_question(session: &QuizSession) {
    let Some(question) = session.current_question() else {
        return;
    };
    let reveal = session.mode() == Some(QuizMode::Training) && session.is_locked();

    println!();
    println!(
        "Вопрос {} / {}  ({})",
        session.current_index() + 1,
        session.total(),
        session.mode().map(|m| m.to_string()).unwrap_or_default()
    );
    println!("{}", question.text);

    for (i, option) in question.answers.iter().enumerate() {
        let selected = session.chosen_answer() == Some(option.text.as_str());
        let marker = if reveal && option.is_correct {
            "+"
        } else if reveal && selected {
            "x"
        } else if selected {
            ">"
        } else {
            " "
        };
        println!("  [{}] {marker} {}", i + 1, option.text);
    }

    if let Some(explanation) = session.current_explanation() {
        println!();
        println!("Пояснение: {explanation}");
    }
    println!();
    println!("(1-{} — ответ, n — дальше, p — назад, r — заново, q — выход)", question.answers.len());
}

fn print_results(session: &QuizSession) {
    if let Some(report) = session.report() {
        println!();
        println!("=== Результат ===");
        println!("  {} %  — {}", report.score_percent, report.verdict);
        println!("  Верных ответов: {} из {}", report.correct, report.total);
        println!("  (r — попробовать снова, q — выход)");
    }
}

fn main() {
    let stdin = io::stdin();
    let mut session = QuizSession::new(QuestionBank::builtin());

    loop {
        match session.phase() {
            SessionPhase::ModeSelect => {
                print_mode_select();
                let Some(input) = read_line(&stdin) else { continue };
                match input.as_str() {
                    "1" => session.begin(SessionRequest::new(QuizMode::Training)),
                    "2" => session.begin(SessionRequest::new(QuizMode::Exam)),
                    "q" => break,
                    _ => println!("Выберите 1, 2 или q."),
                }
            }
            SessionPhase::InProgress => {
                print_question(&session);
                let Some(input) = read_line(&stdin) else { continue };
                match input.as_str() {
                    "n" => session.next(),
                    "p" => session.previous(),
                    "r" => session.restart(),
                    "q" => break,
                    other => {
                        let option = other
                            .parse::<usize>()
                            .ok()
                            .filter(|&n| n >= 1)
                            .and_then(|n| {
                                session
                                    .current_question()
                                    .and_then(|q| q.answers.get(n - 1))
                                    .map(|a| a.text.clone())
                            });
                        match option {
                            Some(text) => session.choose(&text),
                            None => println!("Не понял команду: {other}"),
                        }
                    }
                }
            }
            SessionPhase::Finished => {
                print_results(&session);
                let Some(input) = read_line(&stdin) else { continue };
                match input.as_str() {
                    "r" => session.restart(),
                    "q" => break,
                    _ => println!("r — заново, q — выход."),
                }
            }
        }
    }

    println!("До встречи!");
}
