pub const DB_KEY: &str = "mentalMathsChallengeData";
pub const SESSION_KEY_PREFIX: &str = "mentalMathsChallengeSession";
pub const ROUND_KEY_PREFIX: &str = "mentalMathsChallengeRound";

pub const BRONZE_MEDAL_STREAK: u32 = 7;
pub const SILVER_MEDAL_STREAK: u32 = 14;
pub const GOLD_MEDAL_STREAK: u32 = 30;

pub const QUESTION_TEMPERATURE: f32 = 0.7;

pub const IMAGE_SIZE: &str = "1024x1024";
pub const IMAGE_MIME_TYPE: &str = "image/png";
