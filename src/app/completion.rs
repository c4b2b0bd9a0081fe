use super::state::SessionState;
use crate::model::{AnsweredQuestion, AppState, QuizDataset, QuizId, QuizResult};
use std::collections::BTreeMap;

/// Una casilla por posición de opción. La 3 ("None of the above") no lleva a
/// ningún quiz propio y cae en el valor por defecto.
pub const TALLY_BUCKETS: usize = 4;

impl SessionState {
    pub(super) fn complete(&mut self, dataset: &QuizDataset) {
        if self.active_quiz.is_recommender() {
            let tally = tally_answers(&self.answers);
            self.recommendation = Some(recommend(&tally));
            self.result = None;
            log::info!("recomendación: {:?} (tally {tally:?})", self.recommendation);
        } else {
            let result = score_quiz(dataset, &self.answers);
            log::info!(
                "quiz {:?} completado: {}/{} ({}%)",
                self.active_quiz,
                result.correct_answers,
                result.total_questions,
                result.score
            );
            self.result = Some(result);
            self.recommendation = None;
        }
        self.phase = AppState::Completed;
    }
}

pub fn score_quiz(dataset: &QuizDataset, answers: &BTreeMap<usize, usize>) -> QuizResult {
    let answered_questions: Vec<AnsweredQuestion> = dataset
        .questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let chosen = answers.get(&i).copied();
            AnsweredQuestion {
                question: q.prompt.clone(),
                user_answer: chosen.and_then(|o| q.options.get(o)).cloned(),
                correct_answer: q.correct_text().unwrap_or_default().to_owned(),
                is_correct: chosen == Some(q.correct_option),
            }
        })
        .collect();

    let total_questions = dataset.questions.len();
    let correct_answers = answered_questions.iter().filter(|a| a.is_correct).count();

    QuizResult {
        total_questions,
        correct_answers,
        score: score_percent(correct_answers, total_questions),
        answered_questions,
    }
}

pub fn score_percent(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (correct as f64 / total as f64 * 100.0).round() as u32
}

/// Aviso al terminar un quiz
pub fn completion_message(score: u32) -> &'static str {
    if score >= 80 {
        "Great job!"
    } else if score >= 50 {
        "Good effort!"
    } else {
        "Keep practicing!"
    }
}

/// Titular de la pantalla de resultados
pub fn result_heading(score: u32) -> &'static str {
    match score {
        80.. => "Excellent!",
        60..=79 => "Good job!",
        40..=59 => "Nice try!",
        _ => "Keep practicing!",
    }
}

pub fn tally_answers(answers: &BTreeMap<usize, usize>) -> [u32; TALLY_BUCKETS] {
    let mut tally = [0; TALLY_BUCKETS];
    for &option in answers.values() {
        if let Some(bucket) = tally.get_mut(option) {
            *bucket += 1;
        }
    }
    tally
}

/// Gana el primer índice que alcanza el máximo.
pub fn winning_bucket(tally: &[u32; TALLY_BUCKETS]) -> usize {
    let mut best = 0;
    for (i, &count) in tally.iter().enumerate() {
        if count > tally[best] {
            best = i;
        }
    }
    best
}

pub fn recommend(tally: &[u32; TALLY_BUCKETS]) -> QuizId {
    match winning_bucket(tally) {
        0 => QuizId::GeneralKnowledge,
        1 => QuizId::Math,
        2 => QuizId::Coding,
        _ => QuizId::GeneralKnowledge,
    }
}
