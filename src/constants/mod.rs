pub mod game;
pub mod question_prompt;
