//! Application state.

use solo_db::{BidRepository, DbConfig, JobRepository, MongoStore};

use crate::auth::TokenKeys;
use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub jobs: JobRepository,
    pub bids: BidRepository,
    pub keys: TokenKeys,
}

impl AppState {
    /// Connect to the database and assemble shared state.
    pub async fn new(config: ApiConfig) -> anyhow::Result<Self> {
        let db_config = DbConfig::from_env()?;
        let store = MongoStore::connect(&db_config).await?;
        Ok(Self::with_store(config, store))
    }

    /// Assemble state around an existing store handle.
    pub fn with_store(config: ApiConfig, store: MongoStore) -> Self {
        let keys = TokenKeys::new(&config.jwt_secret);
        Self {
            jobs: JobRepository::new(store.clone()),
            bids: BidRepository::new(store),
            keys,
            config,
        }
    }
}
