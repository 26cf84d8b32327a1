use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    constants::game::SESSION_KEY_PREFIX,
    errors::AppResult,
    models::domain::Session,
    repositories::KeyValueStore,
};

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn find(&self, token: &str) -> AppResult<Option<Session>>;
    async fn save(&self, session: &Session) -> AppResult<()>;
    async fn remove(&self, token: &str) -> AppResult<()>;
}

pub struct KvSessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl KvSessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn key(token: &str) -> String {
        format!("{}:{}", SESSION_KEY_PREFIX, token)
    }
}

#[async_trait]
impl SessionStore for KvSessionStore {
    async fn find(&self, token: &str) -> AppResult<Option<Session>> {
        match self.store.get(&Self::key(token)).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, session: &Session) -> AppResult<()> {
        let raw = serde_json::to_string(session)?;
        self.store.set(&Self::key(&session.token), raw).await
    }

    async fn remove(&self, token: &str) -> AppResult<()> {
        self.store.delete(&Self::key(token)).await
    }
}
