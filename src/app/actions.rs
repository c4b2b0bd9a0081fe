use super::state::{DatasetLookup, SessionState};
use crate::model::AppState;

impl SessionState {
    /// Registra la opción en la posición actual y avanza (o termina el quiz).
    pub(super) fn submit_answer(mut self, option: usize, datasets: &dyn DatasetLookup) -> Self {
        if self.phase != AppState::InProgress {
            return self;
        }
        let Some(dataset) = datasets.dataset(self.active_quiz) else {
            log::warn!("respuesta sin dataset cargado para {:?}", self.active_quiz);
            return self;
        };
        let Some(question) = dataset.questions.get(self.cursor) else {
            log::warn!("cursor {} fuera de rango", self.cursor);
            return self;
        };
        if option >= question.options.len() {
            log::warn!(
                "opción {option} inválida para la pregunta {} ({} opciones)",
                question.id,
                question.options.len()
            );
            return self;
        }

        // Revisar una respuesta anterior no invalida las siguientes.
        self.answers.insert(self.cursor, option);

        if self.cursor + 1 < dataset.questions.len() {
            self.cursor += 1;
        } else {
            self.complete(dataset);
        }
        self
    }
}
