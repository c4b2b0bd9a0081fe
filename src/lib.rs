pub mod app;
pub mod assistant;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod scheduler;
pub mod ui;

pub use app::QuizApp;
pub use error::QuizError;
