use super::completion::completion_message;
use super::{PendingStart, QuizApp, hint_context};
use crate::app::state::Intent;
use crate::model::{AppState, QuizId};

impl QuizApp {
    /// Punto único de entrada de las intenciones de la UI.
    ///
    /// Si la transición necesita un quiz que aún no está cargado, se pide y la
    /// intención queda en espera (la UI enseña "Loading...").
    pub fn dispatch(&mut self, intent: Intent) {
        if let Some(quiz) = self.session.quiz_to_load(&intent) {
            if !self.catalog.is_loaded(quiz) {
                log::info!("{intent:?} espera a que cargue {quiz:?}");
                self.catalog.request(quiz, self.now);
                self.pending_start = Some(PendingStart { quiz, intent });
                return;
            }
        }

        let before = self.session.phase();
        let session = std::mem::take(&mut self.session);
        self.session = session.apply(intent, &self.catalog);
        if self.session.phase() != before {
            self.pending_start = None;
        }
        self.after_transition(before);
    }

    fn after_transition(&mut self, before: AppState) {
        let now = self.session.phase();
        if now == AppState::Completed && before != AppState::Completed {
            self.message = match self.session.result() {
                Some(result) => format!(
                    "Quiz Completed: {} You scored {}%",
                    completion_message(result.score),
                    result.score
                ),
                None => "Quiz Completed: here is your recommendation.".to_owned(),
            };
        } else if now != before {
            self.message.clear();
        }
        self.selected_option = self.session.prior_answer();
        self.refresh_assistant_context();
    }

    /// Avanza el reloj: entrega cargas y respuestas del asistente vencidas.
    pub fn tick(&mut self, now: f64) {
        self.now = now;
        let loaded = self.catalog.poll(now);

        if let Some(pending) = self.pending_start {
            if loaded.contains(&pending.quiz) {
                self.pending_start = None;
                self.dispatch(pending.intent);
            }
        }

        self.assistant.poll(now);
        self.refresh_assistant_context();
    }

    /// Algo vence en el futuro: la UI debe repintar aunque no haya input
    pub fn next_wakeup(&self) -> Option<f64> {
        match (self.catalog.next_due(), self.assistant.next_due()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn is_waiting_for(&self, quiz: QuizId) -> bool {
        self.pending_start.is_some_and(|p| p.quiz == quiz)
    }

    // Atajos usados por las vistas

    pub fn start_quiz(&mut self, quiz: QuizId) {
        self.dispatch(Intent::Start(Some(quiz)));
    }

    /// Envía la opción marcada; sin selección no hace nada.
    pub fn submit_selected(&mut self) {
        if let Some(option) = self.selected_option {
            self.dispatch(Intent::SubmitAnswer(option));
        }
    }

    pub fn go_back(&mut self) {
        self.dispatch(Intent::GoBack);
    }

    pub fn show_all_quizzes(&mut self) {
        self.pending_start = None;
        self.dispatch(Intent::ShowAllQuizzes);
    }

    pub fn restart(&mut self) {
        self.dispatch(Intent::Restart);
    }

    pub fn accept_recommendation(&mut self) {
        self.dispatch(Intent::AcceptRecommendation);
    }

    pub fn retry_load(&mut self, quiz: QuizId) {
        self.catalog.retry(quiz, self.now);
    }

    /// Envía lo escrito en el asistente
    pub fn send_assistant_message(&mut self) {
        let text = std::mem::take(&mut self.assistant.input);
        let ctx = hint_context(&self.session, &self.catalog);
        self.assistant.send(&text, &ctx, &mut self.rng, self.now);
    }
}
