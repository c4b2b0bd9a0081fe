use serde::{Deserialize, Serialize};

/// Identificadores cerrados de los quizzes disponibles.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "snake_case")]
pub enum QuizId {
    Recommender,
    GeneralKnowledge,
    Math,
    Coding,
}

impl QuizId {
    /// Orden en el que se muestran en el carrusel
    pub const ALL: [QuizId; 4] = [
        QuizId::Recommender,
        QuizId::GeneralKnowledge,
        QuizId::Math,
        QuizId::Coding,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            QuizId::Recommender => "Quiz Recommender",
            QuizId::GeneralKnowledge => "General Knowledge Quiz",
            QuizId::Math => "Basic Math Quiz",
            QuizId::Coding => "Basic Coding Concepts Quiz",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            QuizId::Recommender => "Find out which quiz matches your interests",
            QuizId::GeneralKnowledge => "Test your knowledge with this fun general knowledge quiz!",
            QuizId::Math => "Challenge yourself with these fun math questions!",
            QuizId::Coding => "Test your understanding of fundamental programming concepts!",
        }
    }

    pub fn is_recommender(self) -> bool {
        self == QuizId::Recommender
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub id: u32,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_option: usize, // índice en `options`
}

impl QuizQuestion {
    pub fn correct_text(&self) -> Option<&str> {
        self.options.get(self.correct_option).map(String::as_str)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuizDataset {
    pub title: String,
    pub description: String,
    pub questions: Vec<QuizQuestion>,
}

/// Fase de la sesión (qué vista se dibuja)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Intro,
    InProgress,
    Completed,
    Carousel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsweredQuestion {
    pub question: String,
    pub user_answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    pub total_questions: usize,
    pub correct_answers: usize,
    pub score: u32, // porcentaje redondeado 0..=100
    pub answered_questions: Vec<AnsweredQuestion>,
}
