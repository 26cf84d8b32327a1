use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use mongodb::{bson::doc, options::ReplaceOptions, Collection};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::{
    db::{Database, KEY_FIELD},
    errors::AppResult,
};

/// String-keyed storage of JSON-encoded values. A missing key reads as `None`.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> AppResult<Option<String>>;
    async fn set(&self, key: &str, value: String) -> AppResult<()>;
    async fn delete(&self, key: &str) -> AppResult<()>;
    async fn health_check(&self) -> AppResult<()>;
}

#[derive(Clone, Default)]
pub struct InMemoryKeyValueStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> AppResult<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let mut entries = self.entries.write().await;
        entries.remove(key);
        Ok(())
    }

    async fn health_check(&self) -> AppResult<()> {
        Ok(())
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
struct KvEntry {
    key: String,
    value: String,
}

pub struct MongoKeyValueStore {
    db: Database,
    collection: Collection<KvEntry>,
}

impl MongoKeyValueStore {
    /// Expects [`Database::ensure_key_value_indexes`] to have run.
    pub fn new(db: &Database) -> Self {
        Self {
            db: db.clone(),
            collection: db.key_value_collection(),
        }
    }
}

#[async_trait]
impl KeyValueStore for MongoKeyValueStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let entry = self.collection.find_one(doc! { KEY_FIELD: key }).await?;
        Ok(entry.map(|e| e.value))
    }

    async fn set(&self, key: &str, value: String) -> AppResult<()> {
        let entry = KvEntry {
            key: key.to_string(),
            value,
        };
        let options = ReplaceOptions::builder().upsert(true).build();

        self.collection
            .replace_one(doc! { KEY_FIELD: key }, &entry)
            .with_options(options)
            .await?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.collection.delete_one(doc! { KEY_FIELD: key }).await?;
        Ok(())
    }

    async fn health_check(&self) -> AppResult<()> {
        self.db.health_check().await
    }
}
