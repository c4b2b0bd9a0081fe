use crate::model::QuizId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("could not parse the embedded quiz bank: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("quiz {0:?} is missing from the quiz bank")]
    MissingQuiz(QuizId),

    #[error("quiz {0:?} has no questions")]
    EmptyQuiz(QuizId),

    #[error("question {id} of quiz {quiz:?} is invalid: {reason}")]
    InvalidQuestion {
        quiz: QuizId,
        id: u32,
        reason: String,
    },

    #[error("quiz {quiz:?} repeats question id {id}")]
    DuplicateQuestion { quiz: QuizId, id: u32 },
}
