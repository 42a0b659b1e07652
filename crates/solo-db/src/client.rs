//! MongoDB client bootstrap.

use mongodb::bson::doc;
use mongodb::options::{ClientOptions, IndexOptions, ServerApi, ServerApiVersion};
use mongodb::{Client, Collection, Database, IndexModel};
use tracing::info;

use solo_models::{Bid, Job};

use crate::error::DbResult;

/// Database connection settings, read from the environment.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Database user
    pub user: String,
    /// Database password
    pub password: String,
    /// Atlas cluster address, e.g. `cluster0.vpupb.mongodb.net`
    pub cluster: String,
    /// Database name
    pub database: String,
}

impl DbConfig {
    /// Read settings from `DB_USER`, `DB_PASS`, `DB_CLUSTER`, and
    /// optionally `DB_NAME`.
    pub fn from_env() -> Result<Self, std::env::VarError> {
        Ok(Self {
            user: std::env::var("DB_USER")?,
            password: std::env::var("DB_PASS")?,
            cluster: std::env::var("DB_CLUSTER")?,
            database: std::env::var("DB_NAME").unwrap_or_else(|_| "solo-db".to_string()),
        })
    }

    /// Connection string for the configured cluster.
    fn uri(&self) -> String {
        format!(
            "mongodb+srv://{}:{}@{}/?retryWrites=true&w=majority",
            self.user, self.password, self.cluster
        )
    }
}

/// Shared handle to the marketplace database.
///
/// The driver's `Client` is internally pooled; cloning this handle is
/// cheap and done once per repository.
#[derive(Clone)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    /// Connect with the Stable API v1 profile, verify the deployment
    /// answers a ping, and ensure indexes.
    pub async fn connect(config: &DbConfig) -> DbResult<Self> {
        let mut options = ClientOptions::parse(config.uri()).await?;
        options.server_api = Some(
            ServerApi::builder()
                .version(ServerApiVersion::V1)
                .strict(true)
                .deprecation_errors(true)
                .build(),
        );

        let client = Client::with_options(options)?;
        let db = client.database(&config.database);

        db.run_command(doc! { "ping": 1 }).await?;
        info!("Connected to MongoDB database {}", config.database);

        let store = Self { db };
        store.ensure_indexes().await?;
        Ok(store)
    }

    /// Build a handle from a raw connection string without the startup
    /// ping or index pass. The driver connects on first use; `connect`
    /// is the eager variant used at startup.
    pub async fn with_uri(uri: &str, database: &str) -> DbResult<Self> {
        let client = Client::with_uri_str(uri).await?;
        Ok(Self {
            db: client.database(database),
        })
    }

    /// Unique `(email, jobId)` index on bids. This is the authoritative
    /// guard against duplicate bids; the repository's pre-check only
    /// answers the common case early.
    async fn ensure_indexes(&self) -> DbResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "email": 1, "jobId": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.bids().create_index(index).await?;
        Ok(())
    }

    pub fn jobs(&self) -> Collection<Job> {
        self.db.collection("jobs")
    }

    pub fn bids(&self) -> Collection<Bid> {
        self.db.collection("bids")
    }
}
