pub mod game_service;
pub mod identity_service;
pub mod image_generator;
pub mod image_service;
pub mod progress_service;
pub mod question_generator;
pub mod roster_service;
pub mod user_locks;

pub use game_service::GameService;
pub use identity_service::{AdminCredentials, IdentityService};
pub use image_generator::{HttpImageGenerator, ImageGenerator};
pub use image_service::ImageService;
pub use progress_service::ProgressService;
pub use question_generator::{HttpQuestionGenerator, QuestionGenerator};
pub use roster_service::RosterService;
pub use user_locks::UserLocks;
