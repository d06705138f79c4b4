//! The compiled-in question bank.
//!
//! Questions are authored in the `RAW_BANK` table below and converted into a
//! validated [`QuestionBank`] once at startup. Validation treats any
//! malformed entry as an authoring bug and refuses to produce a bank —
//! there is no runtime recovery path for bad data.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::quiz_engine::models::{AnswerOption, Question};

/// A bank entry that failed validation. Authoring bugs, not runtime faults.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BankError {
    #[error("question bank is empty")]
    Empty,
    #[error("question {id}: no answer is marked correct")]
    NoCorrectAnswer { id: u32 },
    #[error("question {id}: {count} answers are marked correct")]
    MultipleCorrectAnswers { id: u32, count: usize },
    #[error("duplicate question id {id}")]
    DuplicateQuestionId { id: u32 },
    #[error("question {id}: at least two answer options required, got {count}")]
    TooFewAnswers { id: u32, count: usize },
    #[error("question {id}: empty question or answer text")]
    EmptyText { id: u32 },
}

/// The fixed, immutable, ordered collection of all questions.
///
/// Shared read-only across sessions; a session only ever sees shuffled
/// copies produced by [`crate::quiz_engine::shuffle::prepare`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Validate `questions` and build a bank.
    ///
    /// Checks, per question: exactly one correct option, at least two
    /// options, non-empty texts; across the bank: unique ids, at least one
    /// question.
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }

        let mut seen_ids = std::collections::HashSet::new();
        for q in &questions {
            if !seen_ids.insert(q.id) {
                return Err(BankError::DuplicateQuestionId { id: q.id });
            }
            if q.answers.len() < 2 {
                return Err(BankError::TooFewAnswers { id: q.id, count: q.answers.len() });
            }
            if q.text.trim().is_empty() || q.answers.iter().any(|a| a.text.trim().is_empty()) {
                return Err(BankError::EmptyText { id: q.id });
            }
            match q.answers.iter().filter(|a| a.is_correct).count() {
                1 => {}
                0 => return Err(BankError::NoCorrectAnswer { id: q.id }),
                count => return Err(BankError::MultipleCorrectAnswers { id: q.id, count }),
            }
        }

        Ok(QuestionBank { questions })
    }

    /// The bundled «ИКТ в экономике» bank.
    ///
    /// Panics on a malformed `RAW_BANK` entry — that is a compile-time data
    /// bug, caught by `builtin_bank_is_valid` in the test suite.
    pub fn builtin() -> Self {
        let questions = RAW_BANK
            .iter()
            .map(|&(id, text, answers)| Question {
                id,
                text: text.to_string(),
                answers: answers
                    .iter()
                    .map(|&(text, is_correct)| AnswerOption::new(text, is_correct))
                    .collect(),
            })
            .collect();
        QuestionBank::new(questions).expect("builtin question bank failed validation")
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

type RawQuestion = (u32, &'static str, &'static [(&'static str, bool)]);

/// Authoring table: (id, question, [(option, is_correct)]).
const RAW_BANK: &[RawQuestion] = &[
    (
        1,
        "Аббревиатура ИКТ расшифровывается как:",
        &[
            ("Информационно-коммуникационные технологии", true),
            ("Интегрированные компьютерные технологии", false),
            ("Информационно-корпоративные технологии", false),
            ("Интерактивные коммуникационные терминалы", false),
        ],
    ),
    (
        2,
        "Что является основной функцией ИКТ в экономике?",
        &[
            ("Сбор, обработка и анализ данных", true),
            ("Производство вычислительной техники", false),
            ("Печать бухгалтерской отчетности", false),
            ("Замена бумажного архива", false),
        ],
    ),
    (
        3,
        "Для чего в финансовом анализе чаще всего применяется Microsoft Excel?",
        &[
            ("Для расчетов и работы с электронными таблицами", true),
            ("Для верстки рекламных буклетов", false),
            ("Для обработки фотографий", false),
            ("Для записи видеоконференций", false),
        ],
    ),
    (
        4,
        "Что такое ERP-система?",
        &[
            ("Система планирования ресурсов предприятия", true),
            ("Система распознавания речи", false),
            ("Протокол электронной почты", false),
            ("Графический редактор", false),
        ],
    ),
    (
        5,
        "Что такое CRM-система?",
        &[
            ("Система управления взаимоотношениями с клиентами", true),
            ("Система резервного копирования", false),
            ("Среда разработки программ", false),
            ("Система управления складом", false),
        ],
    ),
    (
        6,
        "Что из перечисленного относится к аппаратному обеспечению?",
        &[
            ("Процессор", true),
            ("Операционная система", false),
            ("Текстовый редактор", false),
            ("Антивирусная программа", false),
        ],
    ),
    (
        7,
        "Что такое база данных?",
        &[
            ("Организованная совокупность структурированных данных", true),
            ("Папка с документами на рабочем столе", false),
            ("Программа для создания презентаций", false),
            ("Сетевой кабель", false),
        ],
    ),
    (
        8,
        "Какой язык применяется для запросов к реляционным базам данных?",
        &[
            ("SQL", true),
            ("HTML", false),
            ("CSS", false),
            ("FTP", false),
        ],
    ),
    (
        9,
        "Что понимается под облачными вычислениями?",
        &[
            ("Предоставление вычислительных ресурсов через интернет", true),
            ("Вычисления на метеорологических станциях", false),
            ("Работа без подключения к сети", false),
            ("Хранение данных только на локальном диске", false),
        ],
    ),
    (
        10,
        "Что такое электронный документооборот?",
        &[
            ("Создание, обмен и хранение документов в электронном виде", true),
            ("Сканирование бумажных документов", false),
            ("Пересылка бумажных писем курьером", false),
            ("Печать документов на сетевом принтере", false),
        ],
    ),
    (
        11,
        "Какая технология обеспечивает конфиденциальность передаваемых данных?",
        &[
            ("Шифрование", true),
            ("Архивирование", false),
            ("Дефрагментация", false),
            ("Индексация", false),
        ],
    ),
    (
        12,
        "Что обозначает термин Big Data?",
        &[
            ("Технологии обработки больших объемов данных", true),
            ("Жесткий диск большой емкости", false),
            ("Крупный шрифт в документе", false),
            ("База данных бухгалтерии", false),
        ],
    ),
    (
        13,
        "В каких единицах измеряется объем информации?",
        &[
            ("В битах и байтах", true),
            ("В вольтах", false),
            ("В герцах", false),
            ("В пикселях", false),
        ],
    ),
    (
        14,
        "Что такое интернет-банкинг?",
        &[
            ("Управление банковским счетом через интернет", true),
            ("Кредитование интернет-провайдеров", false),
            ("Покупка компьютеров в кредит", false),
            ("Обмен валюты в отделении банка", false),
        ],
    ),
    (
        15,
        "Для чего служит электронная цифровая подпись?",
        &[
            ("Для подтверждения подлинности электронного документа", true),
            ("Для ускорения передачи данных", false),
            ("Для сжатия файлов", false),
            ("Для оформления подписи в конце письма", false),
        ],
    ),
    (
        16,
        "Что такое локальная вычислительная сеть?",
        &[
            ("Сеть, объединяющая компьютеры в пределах одной организации", true),
            ("Всемирная сеть интернет", false),
            ("Сеть сотовой связи", false),
            ("Домашняя электросеть", false),
        ],
    ),
    (
        17,
        "Какая программа предназначена для создания презентаций?",
        &[
            ("Microsoft PowerPoint", true),
            ("Microsoft Access", false),
            ("Блокнот", false),
            ("Проводник", false),
        ],
    ),
    (
        18,
        "Как расшифровывается СУБД?",
        &[
            ("Система управления базами данных", true),
            ("Средство учета бухгалтерских документов", false),
            ("Сервер удаленного банковского доступа", false),
            ("Система устранения багов и дефектов", false),
        ],
    ),
    (
        19,
        "Чем протокол HTTPS отличается от HTTP?",
        &[
            ("Шифрованием передаваемых данных", true),
            ("Более высокой скоростью передачи", false),
            ("Поддержкой только текстовых файлов", false),
            ("Работой без сервера", false),
        ],
    ),
    (
        20,
        "Что такое электронная коммерция?",
        &[
            ("Купля-продажа товаров и услуг через интернет", true),
            ("Торговля компьютерной техникой в магазине", false),
            ("Реклама на телевидении", false),
            ("Выпуск электронных газет", false),
        ],
    ),
    (
        21,
        "Автоматизированное рабочее место (АРМ) экономиста — это:",
        &[
            ("Комплекс программных и технических средств для автоматизации профессиональной деятельности", true),
            ("Офисный стол с компьютером", false),
            ("Робот, заменяющий экономиста", false),
            ("Программа для учета рабочего времени", false),
        ],
    ),
    (
        22,
        "Какой из сервисов относится к электронным платежным системам?",
        &[
            ("PayPal", true),
            ("Wikipedia", false),
            ("GitHub", false),
            ("YouTube", false),
        ],
    ),
    (
        23,
        "Что такое информационная система предприятия?",
        &[
            ("Совокупность средств для хранения, обработки и выдачи информации", true),
            ("Внутренняя телефонная сеть", false),
            ("Доска объявлений в офисе", false),
            ("Корпоративная газета", false),
        ],
    ),
    (
        24,
        "Для чего выполняется резервное копирование данных?",
        &[
            ("Для восстановления данных в случае их потери", true),
            ("Для ускорения работы компьютера", false),
            ("Для освобождения места на диске", false),
            ("Для защиты от компьютерных вирусов", false),
        ],
    ),
];
