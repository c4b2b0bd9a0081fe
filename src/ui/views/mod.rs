pub mod assistant;
pub mod carousel;
pub mod intro;
pub mod loading;
pub mod quiz;
pub mod recommendation;
pub mod results;
