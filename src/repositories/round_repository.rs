use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    constants::game::ROUND_KEY_PREFIX,
    errors::AppResult,
    models::domain::ActiveRound,
    repositories::KeyValueStore,
};

#[async_trait]
pub trait RoundRepository: Send + Sync {
    async fn find(&self, username: &str) -> AppResult<Option<ActiveRound>>;
    async fn save(&self, round: &ActiveRound) -> AppResult<()>;
    async fn remove(&self, username: &str) -> AppResult<()>;
}

pub struct KvRoundRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvRoundRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn key(username: &str) -> String {
        format!("{}:{}", ROUND_KEY_PREFIX, username)
    }
}

#[async_trait]
impl RoundRepository for KvRoundRepository {
    async fn find(&self, username: &str) -> AppResult<Option<ActiveRound>> {
        match self.store.get(&Self::key(username)).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, round: &ActiveRound) -> AppResult<()> {
        let raw = serde_json::to_string(round)?;
        self.store.set(&Self::key(&round.username), raw).await
    }

    async fn remove(&self, username: &str) -> AppResult<()> {
        self.store.delete(&Self::key(username)).await
    }
}
