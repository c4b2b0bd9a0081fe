// src/assistant/hints.rs
//
// Pistas derivadas del texto de la pregunta. Todo se compara en minúsculas
// por contención de subcadenas.

use crate::model::QuizQuestion;

pub struct HintRule {
    pub keywords: &'static [&'static str],
    pub hint: &'static str,
}

impl HintRule {
    fn matches(&self, text: &str) -> bool {
        contains_any(text, self.keywords)
    }
}

pub const MATH_KEYWORDS: &[&str] = &[
    "math", "calculate", "solve", "equation", "formula", "value", "sum", "product", "divide",
    "multiply", "subtract", "add",
];

/// Refinamiento dentro de las preguntas de matemáticas
pub const MATH_RULES: &[HintRule] = &[
    HintRule {
        keywords: &["percentage"],
        hint: "Percent means \"per hundred\". Turn it into a decimal and multiply.",
    },
    HintRule {
        keywords: &["fraction"],
        hint: "Rewrite the fractions with a common denominator before combining them.",
    },
    HintRule {
        keywords: &["area", "perimeter", "volume"],
        hint: "Recall the formula for the shape involved and plug in the measurements.",
    },
    HintRule {
        keywords: &["probability"],
        hint: "Count the favorable outcomes and divide by the total number of possible outcomes.",
    },
    HintRule {
        keywords: &["sequence", "pattern"],
        hint: "Look at the difference or the ratio between consecutive terms.",
    },
];

pub const MATH_DEFAULT_HINT: &str =
    "Break down the problem step by step and follow the order of operations (PEMDAS).";

pub const TOPIC_RULES: &[HintRule] = &[
    HintRule {
        keywords: &["capital"],
        hint: "Think about famous European cities and their countries.",
    },
    HintRule {
        keywords: &["planet"],
        hint: "Consider the colors associated with each planet in our solar system.",
    },
    HintRule {
        keywords: &["mona lisa"],
        hint: "This famous painting was created during the Renaissance period.",
    },
    HintRule {
        keywords: &["ocean"],
        hint: "Consider which ocean covers the largest area of Earth's surface.",
    },
    HintRule {
        keywords: &["element", "symbol"],
        hint: "Remember the periodic table and common chemical symbols.",
    },
    HintRule {
        keywords: &["html"],
        hint: "Think about what these letters might stand for in web development.",
    },
    HintRule {
        keywords: &["javascript", "code"],
        hint: "Consider the basic syntax and common patterns in programming.",
    },
];

pub const GENERIC_HINT: &str =
    "Think carefully about the question and consider what you already know about this topic.";

const LAST_RESORT_HINT: &str = "Read every option once more before you choose.";

pub fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| text.contains(n))
}

/// Pista para un enunciado, sin mirar las opciones
pub fn hint_for_text(prompt: &str) -> &'static str {
    let text = prompt.to_lowercase();

    if contains_any(&text, MATH_KEYWORDS) {
        return MATH_RULES
            .iter()
            .find(|r| r.matches(&text))
            .map_or(MATH_DEFAULT_HINT, |r| r.hint);
    }

    TOPIC_RULES
        .iter()
        .find(|r| r.matches(&text))
        .map_or(GENERIC_HINT, |r| r.hint)
}

/// Igual que [`hint_for_text`] pero nunca contiene el texto de la opción correcta.
pub fn hint_for(question: &QuizQuestion) -> &'static str {
    let correct = question
        .correct_text()
        .map(str::to_lowercase)
        .unwrap_or_default();
    let reveals = |hint: &str| !correct.is_empty() && hint.to_lowercase().contains(&correct);

    [hint_for_text(&question.prompt), GENERIC_HINT, LAST_RESORT_HINT]
        .into_iter()
        .find(|h| !reveals(*h))
        .unwrap_or(LAST_RESORT_HINT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_quiz_bank;

    fn question(prompt: &str, options: &[&str], correct: usize) -> QuizQuestion {
        QuizQuestion {
            id: 1,
            prompt: prompt.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_option: correct,
        }
    }

    #[test]
    fn topic_hints() {
        assert!(hint_for_text("What is the capital of France?").contains("European cities"));
        assert!(hint_for_text("Which PLANET is red?").contains("colors"));
        assert!(hint_for_text("Who painted the Mona Lisa?").contains("Renaissance"));
        assert!(hint_for_text("What does HTML stand for?").contains("stand for"));
        assert_eq!(hint_for_text("Who wrote Hamlet?"), GENERIC_HINT);
    }

    #[test]
    fn math_keywords_take_priority_and_refine() {
        // "solve" gana a "capital" por orden de evaluación
        assert_eq!(hint_for_text("Solve for the capital letter x"), MATH_DEFAULT_HINT);
        assert!(hint_for_text("Calculate the percentage of 50").contains("per hundred"));
        assert!(hint_for_text("What is the sum of the fractions?").contains("denominator"));
        assert!(hint_for_text("Calculate the volume of a cube").contains("formula"));
        assert!(hint_for_text("Calculate the probability of heads").contains("outcomes"));
        assert!(hint_for_text("Next value in the pattern").contains("consecutive"));
        // sin palabra de matemáticas no hay refinamiento
        assert_eq!(hint_for_text("What is the probability of rain?"), GENERIC_HINT);
    }

    #[test]
    fn hint_never_reveals_the_correct_option() {
        let q = question("Which symbol is used?", &["table", "periodic table"], 1);
        let hint = hint_for(&q);
        assert!(!hint.to_lowercase().contains("periodic table"));
        assert_eq!(hint, GENERIC_HINT);
    }

    #[test]
    fn fixture_hints_never_reveal_answers() {
        for (quiz, dataset) in read_quiz_bank().unwrap() {
            for q in &dataset.questions {
                let hint = hint_for(q).to_lowercase();
                let correct = q.correct_text().unwrap().to_lowercase();
                assert!(!hint.contains(&correct), "{quiz:?} #{} revela '{correct}'", q.id);
            }
        }
    }
}
