use std::time::Duration;

use mongodb::{
    bson::doc,
    options::{ClientOptions, IndexOptions, ServerApi, ServerApiVersion},
    Client, Collection, IndexModel,
};

use crate::{config::Config, errors::AppResult};

/// Field holding the lookup key of every key-value document.
pub const KEY_FIELD: &str = "key";
const KEY_INDEX_NAME: &str = "key_unique";

/// MongoDB handle scoped to the database and collection backing the key-value store.
#[derive(Clone)]
pub struct Database {
    client: Client,
    db_name: String,
    kv_collection: String,
}

impl Database {
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let client = Client::with_options(client_options(config).await?)?;
        let db = Self {
            client,
            db_name: config.mongo_db_name.clone(),
            kv_collection: config.kv_collection.clone(),
        };

        db.health_check().await?;
        log::info!(
            "Connected to MongoDB database '{}', key-value collection '{}'",
            db.db_name,
            db.kv_collection
        );

        Ok(db)
    }

    pub fn key_value_collection<T>(&self) -> Collection<T>
    where
        T: Send + Sync,
    {
        self.client
            .database(&self.db_name)
            .collection(&self.kv_collection)
    }

    /// Unique index on the key field: at most one document per key.
    pub async fn ensure_key_value_indexes(&self) -> AppResult<()> {
        self.key_value_collection::<mongodb::bson::Document>()
            .create_index(key_index_model())
            .await?;
        log::info!(
            "Ensured unique index '{}' on {}.{}",
            KEY_INDEX_NAME,
            self.kv_collection,
            KEY_FIELD
        );
        Ok(())
    }

    pub async fn health_check(&self) -> AppResult<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }
}

async fn client_options(config: &Config) -> AppResult<ClientOptions> {
    let mut options = ClientOptions::parse(&config.mongo_conn_string).await?;
    options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());
    options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
    options.max_pool_size = Some(5);
    options.connect_timeout = Some(Duration::from_secs(5));
    options.server_selection_timeout = Some(Duration::from_secs(5));
    Ok(options)
}

fn key_index_model() -> IndexModel {
    let options = IndexOptions::builder()
        .unique(true)
        .name(KEY_INDEX_NAME.to_string())
        .build();
    IndexModel::builder()
        .keys(doc! { KEY_FIELD: 1 })
        .options(options)
        .build()
}
