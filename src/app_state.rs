use std::sync::Arc;

use crate::{
    clock::{Clock, SystemClock},
    config::{Config, StoreBackend},
    db::Database,
    errors::AppResult,
    repositories::{
        InMemoryKeyValueStore, KeyValueStore, KvRoundRepository, KvSessionStore,
        KvStudentRepository, MongoKeyValueStore, StudentRepository,
    },
    services::{
        AdminCredentials, GameService, HttpImageGenerator, HttpQuestionGenerator, IdentityService,
        ImageGenerator, ImageService, ProgressService, QuestionGenerator, RosterService, UserLocks,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub identity_service: Arc<IdentityService>,
    pub progress_service: Arc<ProgressService>,
    pub game_service: Arc<GameService>,
    pub roster_service: Arc<RosterService>,
    pub image_service: Arc<ImageService>,
    pub store: Arc<dyn KeyValueStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let store: Arc<dyn KeyValueStore> = match config.store_backend {
            StoreBackend::Memory => {
                log::warn!("Using in-memory store; progress is lost on restart");
                Arc::new(InMemoryKeyValueStore::new())
            }
            StoreBackend::Mongo => {
                let db = Database::connect(&config).await?;
                db.ensure_key_value_indexes().await?;
                Arc::new(MongoKeyValueStore::new(&db))
            }
        };

        let clock: Arc<dyn Clock> = Arc::new(SystemClock::with_offset_minutes(config.utc_offset_minutes));
        let generator: Arc<dyn QuestionGenerator> = Arc::new(HttpQuestionGenerator::new(
            &config.question_api_url,
            config.question_api_key.clone(),
            &config.question_model,
        ));

        let image_generator: Arc<dyn ImageGenerator> = Arc::new(HttpImageGenerator::new(
            &config.question_api_url,
            config.question_api_key.clone(),
            &config.image_model,
        ));

        Self::with_components(config, store, clock, generator, image_generator).await
    }

    /// Wires services over the given store, clock and generators.
    pub async fn with_components(
        config: Config,
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        generator: Arc<dyn QuestionGenerator>,
        image_generator: Arc<dyn ImageGenerator>,
    ) -> AppResult<Self> {
        let student_repository = Arc::new(KvStudentRepository::new(store.clone()));
        student_repository.initialize().await?;

        let session_store = Arc::new(KvSessionStore::new(store.clone()));
        let round_repository = Arc::new(KvRoundRepository::new(store.clone()));
        let locks = Arc::new(UserLocks::new());

        let identity_service = Arc::new(IdentityService::new(
            student_repository.clone(),
            session_store,
            clock.clone(),
            locks.clone(),
            AdminCredentials::new(&config.admin_username, &config.admin_password),
        ));
        let progress_service = Arc::new(ProgressService::new(
            student_repository.clone(),
            clock.clone(),
            locks,
        ));
        let game_service = Arc::new(GameService::new(
            progress_service.clone(),
            round_repository,
            generator,
            clock,
            config.questions_per_round,
        ));
        let roster_service = Arc::new(RosterService::new(student_repository));
        let image_service = Arc::new(ImageService::new(image_generator));

        Ok(Self {
            identity_service,
            progress_service,
            game_service,
            roster_service,
            image_service,
            store,
            config: Arc::new(config),
        })
    }
}
