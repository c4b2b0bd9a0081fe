use crate::model::QuizId;

/// Ajustes de la app. No se guardan entre sesiones.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Latencia simulada de la carga de un quiz (segundos)
    pub fetch_delay: f64,
    /// "Pensando..." del asistente antes de responder (segundos)
    pub reply_delay: f64,
    pub initial_quiz: QuizId,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fetch_delay: 1.0,
            reply_delay: 1.0,
            initial_quiz: QuizId::Recommender,
        }
    }
}
