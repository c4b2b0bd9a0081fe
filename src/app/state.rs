use crate::model::{AppState, QuizDataset, QuizId, QuizResult};
use std::collections::{BTreeMap, HashMap};

/// Acceso de solo lectura a los datasets ya cargados.
pub trait DatasetLookup {
    fn dataset(&self, quiz: QuizId) -> Option<&QuizDataset>;
}

impl DatasetLookup for HashMap<QuizId, QuizDataset> {
    fn dataset(&self, quiz: QuizId) -> Option<&QuizDataset> {
        self.get(&quiz)
    }
}

impl DatasetLookup for BTreeMap<QuizId, QuizDataset> {
    fn dataset(&self, quiz: QuizId) -> Option<&QuizDataset> {
        self.get(&quiz)
    }
}

/// Intenciones que la UI envía a la máquina de estados
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    /// `None` = repetir el quiz activo
    Start(Option<QuizId>),
    SubmitAnswer(usize),
    GoBack,
    ShowAllQuizzes,
    Restart,
    AcceptRecommendation,
}

/// Estado de la sesión de quiz. Solo cambia a través de [`SessionState::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub(super) active_quiz: QuizId,
    pub(super) phase: AppState,
    pub(super) cursor: usize,
    pub(super) answers: BTreeMap<usize, usize>, // posición de pregunta -> opción elegida
    pub(super) result: Option<QuizResult>,
    pub(super) recommendation: Option<QuizId>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(QuizId::Recommender)
    }
}

impl SessionState {
    pub fn new(initial_quiz: QuizId) -> Self {
        Self {
            active_quiz: initial_quiz,
            phase: AppState::Intro,
            cursor: 0,
            answers: BTreeMap::new(),
            result: None,
            recommendation: None,
        }
    }

    /// Reducer: consume el estado y devuelve el siguiente. Las transiciones que
    /// no están permitidas en la fase actual devuelven el estado sin cambios.
    pub fn apply(self, intent: Intent, datasets: &dyn DatasetLookup) -> Self {
        let from = self.phase;
        let next = match intent {
            Intent::Start(quiz) => self.start(quiz, datasets),
            Intent::SubmitAnswer(option) => self.submit_answer(option, datasets),
            Intent::GoBack => self.go_back(),
            Intent::ShowAllQuizzes => self.show_all_quizzes(),
            Intent::Restart => self.restart(),
            Intent::AcceptRecommendation => self.accept_recommendation(datasets),
        };
        log::debug!(
            "{intent:?}: {from:?} -> {:?} (quiz {:?}, cursor {})",
            next.phase,
            next.active_quiz,
            next.cursor
        );
        next
    }

    /// Limpia cursor, respuestas y resultados manteniendo el quiz indicado
    pub(super) fn reset(quiz: QuizId, phase: AppState) -> Self {
        Self {
            phase,
            ..Self::new(quiz)
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn starts_in_intro_with_initial_quiz() {
        let s = SessionState::default();
        assert_eq!(s.phase(), AppState::Intro);
        assert_eq!(s.active_quiz(), QuizId::Recommender);
        assert!(s.answers().is_empty());
    }

    #[test]
    fn start_resets_everything() {
        let bank = bank();
        let s = SessionState::new(QuizId::Math).apply(Intent::Start(None), &bank);
        assert_eq!(s.phase(), AppState::InProgress);
        assert_eq!(s.cursor(), 0);
        assert!(s.answers().is_empty());
        assert!(s.result().is_none());
        assert!(s.recommendation().is_none());
    }

    #[test]
    fn start_without_dataset_is_blocked() {
        let empty: HashMap<QuizId, QuizDataset> = HashMap::new();
        let s = SessionState::default().apply(Intent::Start(Some(QuizId::Math)), &empty);
        assert_eq!(s, SessionState::default());
    }

    #[test]
    fn submit_without_dataset_is_noop() {
        let bank = bank();
        let s = SessionState::new(QuizId::Math).apply(Intent::Start(None), &bank);
        let empty: HashMap<QuizId, QuizDataset> = HashMap::new();
        let after = s.clone().apply(Intent::SubmitAnswer(0), &empty);
        assert_eq!(after, s);
    }

    #[test]
    fn full_general_knowledge_run_scores() {
        let bank = bank();
        // correctas: 2, 1, 2, 3, 1 -> acertamos la 1ª y la 2ª
        let s = play(&bank, QuizId::GeneralKnowledge, &[2, 1, 0, 0, 0]);
        assert_eq!(s.phase(), AppState::Completed);
        let result = s.result().expect("resultado");
        assert_eq!(result.total_questions, 5);
        assert_eq!(result.correct_answers, 2);
        assert_eq!(result.score, 40);
        assert!(s.recommendation().is_none());
    }

    #[test]
    fn recommender_run_yields_recommendation_only() {
        let bank = bank();
        let s = play(&bank, QuizId::Recommender, &[1, 1, 0, 1]);
        assert_eq!(s.phase(), AppState::Completed);
        assert_eq!(s.recommendation(), Some(QuizId::Math));
        assert!(s.result().is_none());
    }

    #[test]
    fn show_all_quizzes_from_any_phase() {
        let bank = bank();
        let phases = [
            SessionState::default(),
            play(&bank, QuizId::Math, &[0]),
            play(&bank, QuizId::Recommender, &[2, 2, 2, 2]),
        ];
        for s in phases {
            let c = s.apply(Intent::ShowAllQuizzes, &bank);
            assert_eq!(c.phase(), AppState::Carousel);
            assert!(c.result().is_none() && c.recommendation().is_none());
        }
    }

    #[test]
    fn illegal_transitions_are_ignored() {
        let bank = bank();
        let intro = SessionState::default();
        assert_eq!(intro.clone().apply(Intent::Restart, &bank), intro);
        assert_eq!(intro.clone().apply(Intent::GoBack, &bank), intro);
        assert_eq!(intro.clone().apply(Intent::SubmitAnswer(0), &bank), intro);
        assert_eq!(intro.clone().apply(Intent::AcceptRecommendation, &bank), intro);

        let running = play(&bank, QuizId::Math, &[1]);
        assert_eq!(
            running.clone().apply(Intent::Start(Some(QuizId::Coding)), &bank),
            running
        );
        assert_eq!(running.clone().apply(Intent::Restart, &bank), running);
    }
}
