use crate::assistant::{Assistant, HintContext};
use crate::config::Settings;
use crate::data::QuizService;
use crate::model::{AppState, QuizId};
use rand::SeedableRng;
use rand::rngs::StdRng;

// Submódulos
pub mod actions;
pub mod completion;
pub mod intents;
pub mod loading;
pub mod navigation;
pub mod queries;
pub mod state;
pub mod view_models;

pub use loading::QuizCatalog;
pub use state::{DatasetLookup, Intent, SessionState};

/// Intención bloqueada esperando a que llegue el dataset de `quiz`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingStart {
    pub quiz: QuizId,
    pub intent: Intent,
}

/// Clave para detectar cambios de pantalla/pregunta en el asistente
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ContextKey {
    phase: AppState,
    question: Option<u32>,
}

/// Contenedor: dueño de la sesión, la caché de quizzes y el asistente.
pub struct QuizApp {
    session: SessionState,
    pub catalog: QuizCatalog,
    pub assistant: Assistant,
    pub settings: Settings,
    /// Opción marcada en la vista de pregunta (aún sin enviar)
    pub selected_option: Option<usize>,
    /// Tarjeta visible en el carrusel
    pub carousel_index: usize,
    pub message: String,
    pub pending_start: Option<PendingStart>,
    now: f64,
    rng: StdRng,
    last_context: Option<ContextKey>,
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl QuizApp {
    pub fn new(settings: Settings) -> Self {
        Self::with_rng(settings, StdRng::from_entropy())
    }

    /// Para tests: RNG determinista
    pub fn with_rng(settings: Settings, rng: StdRng) -> Self {
        let mut catalog = QuizCatalog::new(QuizService::new(settings.fetch_delay));
        catalog.request_all(0.0);

        let mut app = Self {
            session: SessionState::new(settings.initial_quiz),
            catalog,
            assistant: Assistant::new(settings.reply_delay),
            settings,
            selected_option: None,
            carousel_index: 0,
            message: String::new(),
            pending_start: None,
            now: 0.0,
            rng,
            last_context: None,
        };
        app.refresh_assistant_context();
        app
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn hint_context(&self) -> HintContext<'_> {
        hint_context(&self.session, &self.catalog)
    }

    /// Reenvía el contexto al asistente solo cuando cambia pantalla o pregunta
    pub(crate) fn refresh_assistant_context(&mut self) {
        let ctx = hint_context(&self.session, &self.catalog);
        let key = ContextKey {
            phase: self.session.phase(),
            question: ctx.current_question.map(|q| q.id),
        };
        if self.last_context != Some(key) {
            self.assistant.on_context(&ctx);
            self.last_context = Some(key);
        }
    }
}

fn hint_context<'a>(session: &SessionState, catalog: &'a QuizCatalog) -> HintContext<'a> {
    let phase = session.phase();
    HintContext {
        current_question: session.current_question(catalog),
        is_intro: phase == AppState::Intro,
        is_results: phase == AppState::Completed,
        is_carousel: phase == AppState::Carousel,
    }
}
