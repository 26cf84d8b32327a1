use std::env;
use secrecy::SecretString;

const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Mongo,
}

impl StoreBackend {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => StoreBackend::Mongo,
            _ => StoreBackend::Memory,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub app_env: String,
    pub store_backend: StoreBackend,
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub kv_collection: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: String,
    pub admin_username: String,
    pub admin_password: SecretString,
    pub utc_offset_minutes: i32,
    pub questions_per_round: usize,
    pub question_api_url: String,
    pub question_api_key: SecretString,
    pub question_model: String,
    pub image_model: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            app_env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            store_backend: env::var("STORE_BACKEND")
                .map(|v| StoreBackend::parse(&v))
                .unwrap_or(StoreBackend::Memory),
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "mental-maths-local".to_string()),
            kv_collection: env::var("KV_COLLECTION").unwrap_or_else(|_| "key_values".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            admin_username: env::var("ADMIN_USERNAME")
                .map(|v| v.trim().to_lowercase())
                .unwrap_or_else(|_| "admin".to_string()),
            admin_password: SecretString::from(env::var("ADMIN_PASSWORD")
                .unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string())),
            utc_offset_minutes: env::var("UTC_OFFSET_MINUTES")
                .ok()
                .and_then(|m| m.parse().ok())
                .unwrap_or(0),
            questions_per_round: env::var("GAME_QUESTIONS_COUNT")
                .ok()
                .and_then(|c| c.parse().ok())
                .filter(|c| *c > 0)
                .unwrap_or(10),
            question_api_url: env::var("QUESTION_API_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            question_api_key: SecretString::from(env::var("QUESTION_API_KEY")
                .unwrap_or_default()),
            question_model: env::var("QUESTION_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            image_model: env::var("IMAGE_MODEL").unwrap_or_else(|_| "dall-e-3".to_string()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("production")
    }

    /// Validate that production-critical configuration is set
    /// Panics if required secrets are using default values
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        let admin_password = self.admin_password.expose_secret();

        if admin_password == DEFAULT_ADMIN_PASSWORD {
            panic!(
                "FATAL: ADMIN_PASSWORD is using default value! Set ADMIN_PASSWORD environment variable."
            );
        }

        if admin_password.len() < 12 {
            panic!(
                "FATAL: ADMIN_PASSWORD is too short ({}). Must be at least 12 characters.",
                admin_password.len()
            );
        }

        if self.question_api_key.expose_secret().is_empty() {
            panic!(
                "FATAL: QUESTION_API_KEY is not set! Rounds cannot be generated without it."
            );
        }

        if self.store_backend == StoreBackend::Memory {
            panic!(
                "FATAL: STORE_BACKEND is 'memory'! Student progress would be lost on restart. Set STORE_BACKEND=mongo."
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            app_env: "test".to_string(),
            store_backend: StoreBackend::Memory,
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "mental-maths-test".to_string(),
            kv_collection: "key_values".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origin: "http://localhost:5173".to_string(),
            admin_username: "admin".to_string(),
            admin_password: SecretString::from("test_admin_password".to_string()),
            utc_offset_minutes: 0,
            questions_per_round: 5,
            question_api_url: "http://127.0.0.1:9".to_string(),
            question_api_key: SecretString::from("test_key".to_string()),
            question_model: "test-model".to_string(),
            image_model: "test-image-model".to_string(),
        }
    }
}
