use rand::Rng;
use crate::quiz_engine::models::Question;

/// Return a uniformly random permutation of `items`, leaving the input
/// untouched. Empty and single-element slices come back as equivalent copies.
pub fn shuffled<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out: Vec<T> = items.to_vec();

    // Fisher-Yates shuffle
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }

    out
}

/// Build the per-session copy of the bank.
///
/// Question order and each question's answer order are permuted
/// independently; the source slice is never modified.
pub fn prepare<R: Rng>(questions: &[Question], rng: &mut R) -> Vec<Question> {
    shuffled(questions, rng)
        .into_iter()
        .map(|q| Question {
            answers: shuffled(&q.answers, rng),
            ..q
        })
        .collect()
}
