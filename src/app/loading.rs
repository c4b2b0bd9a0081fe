use super::state::DatasetLookup;
use crate::data::{LoadResult, QuizService};
use crate::model::{QuizDataset, QuizId};
use crate::scheduler::Deferred;
use std::collections::HashMap;

/// Caché de datasets del lado del contenedor: cada quiz se pide una vez.
#[derive(Debug, Default)]
pub struct QuizCatalog {
    service: QuizService,
    datasets: HashMap<QuizId, QuizDataset>,
    pending: HashMap<QuizId, Deferred<LoadResult>>,
    failures: HashMap<QuizId, String>,
}

impl DatasetLookup for QuizCatalog {
    fn dataset(&self, quiz: QuizId) -> Option<&QuizDataset> {
        self.datasets.get(&quiz)
    }
}

impl QuizCatalog {
    pub fn new(service: QuizService) -> Self {
        Self {
            service,
            ..Default::default()
        }
    }

    /// No hace nada si ya está en caché, en vuelo o fallido (usar `retry`).
    pub fn request(&mut self, quiz: QuizId, now: f64) {
        if self.datasets.contains_key(&quiz)
            || self.pending.contains_key(&quiz)
            || self.failures.contains_key(&quiz)
        {
            return;
        }
        let deferred = self.service.fetch(quiz, now);
        self.pending.insert(quiz, deferred);
    }

    pub fn request_all(&mut self, now: f64) {
        for quiz in QuizId::ALL {
            self.request(quiz, now);
        }
    }

    pub fn retry(&mut self, quiz: QuizId, now: f64) {
        if self.failures.remove(&quiz).is_some() {
            log::info!("reintentando carga de {quiz:?}");
        }
        self.request(quiz, now);
    }

    /// Recoge las cargas vencidas. Devuelve los quizzes que quedaron disponibles.
    pub fn poll(&mut self, now: f64) -> Vec<QuizId> {
        let due: Vec<QuizId> = self
            .pending
            .iter()
            .filter(|(_, d)| d.is_ready(now))
            .map(|(q, _)| *q)
            .collect();

        let mut loaded = Vec::new();
        for quiz in due {
            let Some(outcome) = self.pending.remove(&quiz).and_then(|mut d| d.poll(now)) else {
                continue;
            };
            match outcome {
                Ok(dataset) => {
                    log::info!(
                        "quiz {quiz:?} cargado ({} preguntas)",
                        dataset.questions.len()
                    );
                    self.datasets.insert(quiz, dataset);
                    loaded.push(quiz);
                }
                Err(e) => {
                    log::error!("fallo al cargar {quiz:?}: {e}");
                    self.failures.insert(quiz, e.to_string());
                }
            }
        }
        loaded.sort();
        loaded
    }

    pub fn is_loaded(&self, quiz: QuizId) -> bool {
        self.datasets.contains_key(&quiz)
    }

    pub fn is_loading(&self, quiz: QuizId) -> bool {
        self.pending.contains_key(&quiz)
    }

    pub fn failure(&self, quiz: QuizId) -> Option<&str> {
        self.failures.get(&quiz).map(String::as_str)
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn next_due(&self) -> Option<f64> {
        self.pending.values().map(Deferred::due).reduce(f64::min)
    }

    #[cfg(test)]
    pub(crate) fn insert_failure(&mut self, quiz: QuizId, message: &str) {
        self.pending.remove(&quiz);
        self.failures.insert(quiz, message.to_owned());
    }
}
