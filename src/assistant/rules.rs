// src/assistant/rules.rs

use super::hints::{contains_any, hint_for};
use crate::model::QuizQuestion;
use rand::Rng;
use rand::seq::SliceRandom;

/// Lo que el asistente sabe de la pantalla actual
#[derive(Debug, Clone, Copy, Default)]
pub struct HintContext<'a> {
    pub current_question: Option<&'a QuizQuestion>,
    pub is_intro: bool,
    pub is_results: bool,
    pub is_carousel: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Fixed(&'static str),
    /// "Here's a hint: ..." a partir de la pregunta actual
    Hint,
}

pub struct ResponseRule {
    pub name: &'static str,
    pub applies: fn(&str, &HintContext) -> bool,
    pub reply: Reply,
}

pub const REFUSE_ANSWER: &str = "I can't give you the correct answer directly, but I can provide hints to help you figure it out!";

/// Orden de prioridad: gana la primera regla que aplica.
pub const RESPONSE_RULES: &[ResponseRule] = &[
    ResponseRule {
        name: "question_hint",
        applies: asks_for_hint,
        reply: Reply::Hint,
    },
    ResponseRule {
        name: "question_answer",
        applies: asks_for_answer,
        reply: Reply::Fixed(REFUSE_ANSWER),
    },
    ResponseRule {
        name: "intro_how_it_works",
        applies: intro_how_it_works,
        reply: Reply::Fixed(
            "The quiz will present you with multiple-choice questions. Select your answer and click 'Next' to proceed. At the end, you'll get your score and feedback on each question.",
        ),
    },
    ResponseRule {
        name: "intro_quiz_type",
        applies: intro_quiz_type,
        reply: Reply::Fixed(
            "This is a quiz that will recommend other quizzes based on your interests and preferences. After answering a few questions, you'll get a personalized recommendation!",
        ),
    },
    ResponseRule {
        name: "results_score",
        applies: results_score,
        reply: Reply::Fixed(
            "Your score is calculated based on the number of correct answers. Don't worry if it's not perfect - quizzes are a great way to learn!",
        ),
    },
    ResponseRule {
        name: "results_retry",
        applies: results_retry,
        reply: Reply::Fixed(
            "Yes, you can retry the quiz by clicking the 'Try Again' button. You can also try other quizzes we offer by clicking 'Try Another Quiz'.",
        ),
    },
    ResponseRule {
        name: "carousel_recommend",
        applies: carousel_recommend,
        reply: Reply::Fixed(
            "We have several quizzes available: General Knowledge for trivia lovers, Math for those who enjoy numbers and calculations, and Coding for tech enthusiasts. The Quiz Recommender can also help you find the perfect match!",
        ),
    },
    ResponseRule {
        name: "carousel_difference",
        applies: carousel_difference,
        reply: Reply::Fixed(
            "Each quiz focuses on different topics. General Knowledge covers various facts, Math tests numerical skills, and Coding explores programming concepts. Try the one that matches your interests!",
        ),
    },
];

pub const FALLBACK_RESPONSES: [&str; 4] = [
    "I'm here to help with the quiz. Could you clarify what you'd like to know?",
    "That's an interesting question. Would you like some guidance on the current quiz?",
    "I'm your quiz assistant. I can help explain questions, provide hints, or give information about how the quiz works.",
    "Let me know if you need any clarification about the quiz format or content.",
];

fn asks_for_hint(input: &str, ctx: &HintContext) -> bool {
    ctx.current_question.is_some() && contains_any(input, &["hint", "help", "clue"])
}

fn asks_for_answer(input: &str, ctx: &HintContext) -> bool {
    ctx.current_question.is_some() && contains_any(input, &["correct answer", "solution"])
}

fn intro_how_it_works(input: &str, ctx: &HintContext) -> bool {
    ctx.is_intro && input.contains("how") && input.contains("work")
}

fn intro_quiz_type(input: &str, ctx: &HintContext) -> bool {
    ctx.is_intro && input.contains("type") && input.contains("quiz")
}

fn results_score(input: &str, ctx: &HintContext) -> bool {
    ctx.is_results && contains_any(input, &["score", "result"])
}

fn results_retry(input: &str, ctx: &HintContext) -> bool {
    ctx.is_results && contains_any(input, &["retry", "try again"])
}

fn carousel_recommend(input: &str, ctx: &HintContext) -> bool {
    ctx.is_carousel && contains_any(input, &["recommend", "suggest"])
}

fn carousel_difference(input: &str, ctx: &HintContext) -> bool {
    ctx.is_carousel && input.contains("difference")
}

/// `input` ya en minúsculas
pub fn matching_rule(input: &str, ctx: &HintContext) -> Option<&'static ResponseRule> {
    RESPONSE_RULES.iter().find(|rule| (rule.applies)(input, ctx))
}

pub fn resolve<R: Rng + ?Sized>(text: &str, ctx: &HintContext, rng: &mut R) -> String {
    let input = text.to_lowercase();
    let Some(rule) = matching_rule(&input, ctx) else {
        return fallback(rng).to_owned();
    };
    log::debug!("regla del asistente: {}", rule.name);

    match (rule.reply, ctx.current_question) {
        (Reply::Fixed(text), _) => text.to_owned(),
        (Reply::Hint, Some(question)) => format!("Here's a hint: {}", hint_for(question)),
        (Reply::Hint, None) => fallback(rng).to_owned(),
    }
}

fn fallback<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    FALLBACK_RESPONSES
        .choose(rng)
        .copied()
        .unwrap_or(FALLBACK_RESPONSES[0])
}
