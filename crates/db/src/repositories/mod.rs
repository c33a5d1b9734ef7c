pub mod game_repo;
pub mod prompt_repo;
