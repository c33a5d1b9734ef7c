pub mod game;
pub mod prompt;
