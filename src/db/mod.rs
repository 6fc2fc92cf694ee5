use mongodb::{
    bson::{doc, Document},
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection,
};

use crate::{config::Config, errors::AppResult};

/// Read handle on the assessment database.
#[derive(Clone)]
pub struct Database {
    client: Client,
    db_name: String,
}

fn ping() -> Document {
    doc! { "ping": 1 }
}

/// Pool and timeout settings taken from `config`.
fn apply_settings(options: &mut ClientOptions, config: &Config) {
    options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());
    options.app_name = Some("assessment-results".to_string());
    options.max_pool_size = Some(config.mongo_max_pool_size);
    options.min_pool_size = Some(config.mongo_min_pool_size.min(config.mongo_max_pool_size));
    options.connect_timeout = Some(config.mongo_timeout);
    options.server_selection_timeout = Some(config.mongo_timeout);
}

impl Database {
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let mut options = ClientOptions::parse(&config.mongo_conn_string).await?;
        apply_settings(&mut options, config);

        let database = Self {
            client: Client::with_options(options)?,
            db_name: config.mongo_db_name.clone(),
        };
        database.health_check().await?;

        log::info!(
            "Connected to MongoDB database '{}' (pool {}..{})",
            database.db_name,
            config.mongo_min_pool_size,
            config.mongo_max_pool_size
        );
        Ok(database)
    }

    pub fn get_collection<T>(&self, collection_name: &str) -> Collection<T>
    where
        T: Send + Sync,
    {
        self.client
            .database(&self.db_name)
            .collection(collection_name)
    }

    /// Pings the assessment database itself rather than `admin`, so a user
    /// scoped to that database passes.
    pub async fn health_check(&self) -> AppResult<()> {
        self.client
            .database(&self.db_name)
            .run_command(ping())
            .await?;
        Ok(())
    }
}
