// src/data.rs

use crate::error::QuizError;
use crate::model::{QuizDataset, QuizId};
use crate::scheduler::Deferred;
use std::collections::{BTreeMap, HashSet};

const QUIZ_BANK: &str = include_str!("data/quizzes.yaml");

pub type LoadResult = Result<QuizDataset, QuizError>;

/// Carga el banco completo desde el YAML embebido
pub fn read_quiz_bank() -> Result<BTreeMap<QuizId, QuizDataset>, QuizError> {
    parse_quiz_bank(QUIZ_BANK)
}

pub fn parse_quiz_bank(content: &str) -> Result<BTreeMap<QuizId, QuizDataset>, QuizError> {
    let bank: BTreeMap<QuizId, QuizDataset> = serde_yaml::from_str(content)?;
    Ok(bank)
}

/// Devuelve el dataset de un quiz ya validado
pub fn read_dataset(quiz: QuizId) -> LoadResult {
    let mut bank = read_quiz_bank()?;
    let dataset = bank.remove(&quiz).ok_or(QuizError::MissingQuiz(quiz))?;
    validate_dataset(quiz, &dataset)?;
    Ok(dataset)
}

/// Comprobaciones estructurales: no vacío, >= 2 opciones, índice correcto en
/// rango e ids únicos.
pub fn validate_dataset(quiz: QuizId, dataset: &QuizDataset) -> Result<(), QuizError> {
    if dataset.questions.is_empty() {
        return Err(QuizError::EmptyQuiz(quiz));
    }

    let mut seen = HashSet::new();
    for q in &dataset.questions {
        if !seen.insert(q.id) {
            return Err(QuizError::DuplicateQuestion { quiz, id: q.id });
        }
        if q.options.len() < 2 {
            return Err(QuizError::InvalidQuestion {
                quiz,
                id: q.id,
                reason: format!("needs at least 2 options, has {}", q.options.len()),
            });
        }
        if q.correct_option >= q.options.len() {
            return Err(QuizError::InvalidQuestion {
                quiz,
                id: q.id,
                reason: format!(
                    "correct option {} is out of range (0..{})",
                    q.correct_option,
                    q.options.len()
                ),
            });
        }
    }
    Ok(())
}

/// Proveedor de fixtures con latencia simulada.
#[derive(Debug, Clone)]
pub struct QuizService {
    pub fetch_delay: f64,
}

impl Default for QuizService {
    fn default() -> Self {
        Self { fetch_delay: 1.0 }
    }
}

impl QuizService {
    pub fn new(fetch_delay: f64) -> Self {
        Self { fetch_delay }
    }

    /// El resultado se prepara ya; solo su entrega se retrasa.
    pub fn fetch(&self, quiz: QuizId, now: f64) -> Deferred<LoadResult> {
        log::debug!("cargando quiz {quiz:?} (retardo {}s)", self.fetch_delay);
        Deferred::new(read_dataset(quiz), now, self.fetch_delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_quiz_loads_with_valid_questions() {
        for quiz in QuizId::ALL {
            let dataset = read_dataset(quiz).expect("el fixture debe cargar");
            assert!(!dataset.questions.is_empty(), "{quiz:?} vacío");
            for q in &dataset.questions {
                assert!(q.options.len() >= 2);
                assert!(q.correct_option < q.options.len());
            }
        }
    }

    #[test]
    fn fetch_resolves_after_delay() {
        let service = QuizService::default();
        let mut pending = service.fetch(QuizId::Math, 10.0);
        assert!(pending.poll(10.5).is_none());
        let dataset = pending.poll(11.0).expect("vencido").expect("sin error");
        assert_eq!(dataset.title, "Basic Math Quiz");
    }

    #[test]
    fn repeated_fetches_are_structurally_equal() {
        let service = QuizService::new(0.0);
        let a = service.fetch(QuizId::Coding, 0.0).poll(0.0).unwrap().unwrap();
        let b = service.fetch(QuizId::Coding, 0.0).poll(0.0).unwrap().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn validation_rejects_out_of_range_answer() {
        let bank = parse_quiz_bank(
            r#"
math:
  title: "Roto"
  description: "x"
  questions:
    - id: 1
      prompt: "1 + 1"
      options: ["1", "2"]
      correct_option: 2
"#,
        )
        .unwrap();
        let err = validate_dataset(QuizId::Math, &bank[&QuizId::Math]).unwrap_err();
        assert!(matches!(err, QuizError::InvalidQuestion { id: 1, .. }));
    }

    #[test]
    fn validation_rejects_duplicate_ids_and_empty_quiz() {
        let bank = parse_quiz_bank(
            r#"
coding:
  title: "Duplicado"
  description: "x"
  questions:
    - { id: 7, prompt: "a", options: ["x", "y"], correct_option: 0 }
    - { id: 7, prompt: "b", options: ["x", "y"], correct_option: 1 }
math:
  title: "Vacío"
  description: "x"
  questions: []
"#,
        )
        .unwrap();
        assert!(matches!(
            validate_dataset(QuizId::Coding, &bank[&QuizId::Coding]),
            Err(QuizError::DuplicateQuestion { id: 7, .. })
        ));
        assert!(matches!(
            validate_dataset(QuizId::Math, &bank[&QuizId::Math]),
            Err(QuizError::EmptyQuiz(QuizId::Math))
        ));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        assert!(matches!(parse_quiz_bank("math: [1, 2"), Err(QuizError::Parse(_))));
    }
}
