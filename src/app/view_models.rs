use super::QuizApp;
use super::state::DatasetLookup;
use crate::model::QuizId;

/// Tarjeta del carrusel
#[derive(Clone, Debug, PartialEq)]
pub struct QuizCard {
    pub quiz: QuizId,
    pub title: String,
    pub description: String,
    pub question_count: Option<usize>, // None mientras carga
    pub blurb: &'static str,
}

impl QuizCard {
    pub fn count_label(&self) -> String {
        match self.question_count {
            Some(n) => format!("{n} questions"),
            None => "Loading...".to_owned(),
        }
    }
}

/// Fila de la revisión de respuestas
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewRow {
    pub number: usize, // 1-based
    pub question: String,
    pub user_answer: String,
    pub correct_answer: Option<String>, // solo si falló
    pub is_correct: bool,
}

impl QuizApp {
    pub fn quiz_cards(&self) -> Vec<QuizCard> {
        QuizId::ALL
            .iter()
            .map(|&quiz| {
                let dataset = self.catalog.dataset(quiz);
                QuizCard {
                    quiz,
                    title: dataset
                        .map(|d| d.title.clone())
                        .unwrap_or_else(|| quiz.display_name().to_owned()),
                    description: dataset
                        .map(|d| d.description.clone())
                        .unwrap_or_else(|| quiz.description().to_owned()),
                    question_count: dataset.map(|d| d.questions.len()),
                    blurb: if quiz.is_recommender() {
                        "Find out which quiz matches your interests"
                    } else {
                        "Test your knowledge and see how well you score"
                    },
                }
            })
            .collect()
    }

    pub fn review_rows(&self) -> Vec<ReviewRow> {
        let Some(result) = self.session().result() else {
            return Vec::new();
        };
        result
            .answered_questions
            .iter()
            .enumerate()
            .map(|(i, a)| ReviewRow {
                number: i + 1,
                question: a.question.clone(),
                user_answer: a.user_answer.clone().unwrap_or_else(|| "-".to_owned()),
                correct_answer: (!a.is_correct).then(|| a.correct_answer.clone()),
                is_correct: a.is_correct,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn cards_show_loading_until_fixtures_arrive() {
        let mut app = QuizApp::with_rng(Settings::default(), StdRng::seed_from_u64(0));
        let cards = app.quiz_cards();
        assert_eq!(cards.len(), 4);
        assert!(cards.iter().all(|c| c.question_count.is_none()));
        assert_eq!(cards[0].count_label(), "Loading...");

        app.tick(1.0);
        let cards = app.quiz_cards();
        assert_eq!(cards[1].title, "General Knowledge Quiz");
        assert_eq!(cards[1].count_label(), "5 questions");
    }

    #[test]
    fn review_rows_only_show_correct_answer_on_mistakes() {
        let mut app = QuizApp::with_rng(Settings::default(), StdRng::seed_from_u64(0));
        app.tick(1.0);
        app.show_all_quizzes();
        app.start_quiz(QuizId::GeneralKnowledge);
        for option in [2, 0, 2, 3, 1] {
            app.selected_option = Some(option);
            app.submit_selected();
        }
        let rows = app.review_rows();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].correct_answer, None);
        assert_eq!(rows[1].user_answer, "Earth");
        assert_eq!(rows[1].correct_answer.as_deref(), Some("Mars"));
    }
}
