use super::state::{DatasetLookup, Intent, SessionState};
use crate::model::{AppState, QuizDataset, QuizId, QuizQuestion, QuizResult};
use std::collections::BTreeMap;

impl SessionState {
    pub fn phase(&self) -> AppState {
        self.phase
    }

    pub fn active_quiz(&self) -> QuizId {
        self.active_quiz
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn answers(&self) -> &BTreeMap<usize, usize> {
        &self.answers
    }

    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }

    pub fn recommendation(&self) -> Option<QuizId> {
        self.recommendation
    }

    /// Respuesta ya guardada en la posición actual (para repintar la selección)
    pub fn prior_answer(&self) -> Option<usize> {
        self.answers.get(&self.cursor).copied()
    }

    pub fn active_dataset<'a>(&self, datasets: &'a dyn DatasetLookup) -> Option<&'a QuizDataset> {
        datasets.dataset(self.active_quiz)
    }

    /// Solo hay pregunta actual mientras el quiz está en curso
    pub fn current_question<'a>(
        &self,
        datasets: &'a dyn DatasetLookup,
    ) -> Option<&'a QuizQuestion> {
        if self.phase != AppState::InProgress {
            return None;
        }
        self.active_dataset(datasets)?.questions.get(self.cursor)
    }

    pub fn total_questions(&self, datasets: &dyn DatasetLookup) -> usize {
        self.active_dataset(datasets)
            .map(|d| d.questions.len())
            .unwrap_or(0)
    }

    /// `(cursor + 1) / total`, en 0.0..=1.0
    pub fn progress(&self, datasets: &dyn DatasetLookup) -> f32 {
        let total = self.total_questions(datasets);
        if total == 0 || self.phase != AppState::InProgress {
            return 0.0;
        }
        (self.cursor + 1) as f32 / total as f32
    }

    pub fn can_go_back(&self) -> bool {
        self.phase == AppState::InProgress && self.cursor > 0
    }

    /// Quiz que necesita estar cargado para que la intención tenga efecto.
    pub fn quiz_to_load(&self, intent: &Intent) -> Option<QuizId> {
        match (intent, self.phase) {
            (Intent::Start(quiz), AppState::Intro | AppState::Carousel) => {
                Some(quiz.unwrap_or(self.active_quiz))
            }
            (Intent::AcceptRecommendation, AppState::Completed)
                if self.active_quiz.is_recommender() =>
            {
                self.recommendation
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::state::test_support::{bank, play};
    use super::*;

    #[test]
    fn progress_fraction_tracks_cursor() {
        let bank = bank();
        let s = play(&bank, QuizId::GeneralKnowledge, &[]);
        assert!((s.progress(&bank) - 0.2).abs() < f32::EPSILON);
        let s = play(&bank, QuizId::GeneralKnowledge, &[0, 0, 0, 0]);
        assert!((s.progress(&bank) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn current_question_only_while_in_progress() {
        let bank = bank();
        assert!(SessionState::default().current_question(&bank).is_none());
        let s = play(&bank, QuizId::Math, &[1]);
        assert_eq!(s.current_question(&bank).map(|q| q.id), Some(2));
        let done = play(&bank, QuizId::Math, &[1, 0, 2, 1, 2, 1]);
        assert!(done.current_question(&bank).is_none());
    }

    #[test]
    fn quiz_to_load_follows_the_transition_table() {
        let bank = bank();
        let intro = SessionState::new(QuizId::Coding);
        assert_eq!(intro.quiz_to_load(&Intent::Start(None)), Some(QuizId::Coding));
        assert_eq!(intro.quiz_to_load(&Intent::Restart), None);

        let rec = play(&bank, QuizId::Recommender, &[1, 1, 1, 1]);
        assert_eq!(rec.quiz_to_load(&Intent::AcceptRecommendation), Some(QuizId::Math));
        assert_eq!(rec.quiz_to_load(&Intent::Start(Some(QuizId::Math))), None);
    }
}
