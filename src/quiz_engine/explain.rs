//! Per-question feedback text shown in training mode.
//!
//! Resolution is a substring scan of the lowercased question text against a
//! fixed keyword table, first match wins in table-definition order. Any
//! question that matches nothing falls back to quoting the correct answer, so
//! the resolver is total.

/// Keyword → explanation pairs, scanned in definition order.
const EXPLANATIONS: &[(&str, &str)] = &[
    (
        "аббревиатура икт",
        "ИКТ — Информационно-коммуникационные технологии.",
    ),
    (
        "основной функцией икт",
        "Главная функция ИКТ — сбор, обработка и анализ данных.",
    ),
    (
        "microsoft excel",
        "Excel — стандарт для работы с таблицами и фин. анализа.",
    ),
    (
        "erp-систем",
        "ERP объединяет финансы, закупки, производство и кадры в единой системе планирования ресурсов предприятия.",
    ),
    (
        "crm-систем",
        "CRM хранит историю взаимодействия с клиентами и автоматизирует продажи и сопровождение.",
    ),
    (
        "цифровая подпись",
        "ЭЦП криптографически подтверждает авторство и целостность электронного документа.",
    ),
];

/// Resolve the explanation for a question.
///
/// Pure and deterministic: lowercase the question text, return the
/// explanation of the first keyword contained in it, or the generic fallback
/// embedding `correct_answer` verbatim.
pub fn explanation(question_text: &str, correct_answer: &str) -> String {
    let normalized = question_text.to_lowercase();
    EXPLANATIONS
        .iter()
        .find(|(keyword, _)| normalized.contains(keyword))
        .map(|&(_, text)| text.to_string())
        .unwrap_or_else(|| format!("Правильный ответ: \"{correct_answer}\"."))
}
