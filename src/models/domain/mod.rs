pub mod generated_image;
pub mod math_question;
pub mod medal;
pub mod session;
pub mod student;
pub use generated_image::GeneratedImage;
pub use math_question::{ActiveRound, MathQuestion};
pub use medal::{Medal, MedalProgress};
pub use session::{LoggedInUser, Session, UserRole};
pub use student::{ScoreRecord, Student};
