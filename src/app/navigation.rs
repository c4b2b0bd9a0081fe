use super::state::{DatasetLookup, SessionState};
use crate::model::{AppState, QuizId};

impl SessionState {
    /// Solo desde la intro o el carrusel
    pub(super) fn start(self, quiz: Option<QuizId>, datasets: &dyn DatasetLookup) -> Self {
        if !matches!(self.phase, AppState::Intro | AppState::Carousel) {
            log::debug!("start ignorado en fase {:?}", self.phase);
            return self;
        }
        let quiz = quiz.unwrap_or(self.active_quiz);
        self.begin(quiz, datasets)
    }

    fn begin(self, quiz: QuizId, datasets: &dyn DatasetLookup) -> Self {
        if datasets.dataset(quiz).is_none() {
            log::warn!("el quiz {quiz:?} aún no está cargado");
            return self;
        }
        Self::reset(quiz, AppState::InProgress)
    }

    /// La respuesta previa en la nueva posición se conserva
    pub(super) fn go_back(mut self) -> Self {
        if self.phase == AppState::InProgress && self.cursor > 0 {
            self.cursor -= 1;
        }
        self
    }

    /// Abandona lo que hubiera en curso; resultado y recomendación solo viven en `Completed`.
    pub(super) fn show_all_quizzes(self) -> Self {
        Self::reset(self.active_quiz, AppState::Carousel)
    }

    pub(super) fn restart(self) -> Self {
        if self.phase != AppState::Completed {
            return self;
        }
        Self::reset(self.active_quiz, AppState::Intro)
    }

    pub(super) fn accept_recommendation(self, datasets: &dyn DatasetLookup) -> Self {
        if self.phase != AppState::Completed || !self.active_quiz.is_recommender() {
            return self;
        }
        match self.recommendation {
            Some(quiz) => self.begin(quiz, datasets),
            None => self,
        }
    }
}
