use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use crate::{DataStore, HttpStore, JsonFileStore, MemoryStore, PgStore, StoreError, StoreResult};

/// Which [`DataStore`] adapter to run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Memory,
    File,
    Http,
    Postgres,
}

impl FromStr for StoreKind {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreKind::Memory),
            "file" | "json" => Ok(StoreKind::File),
            "http" | "json-server" => Ok(StoreKind::Http),
            "postgres" | "pg" => Ok(StoreKind::Postgres),
            other => Err(StoreError::Config(format!(
                "Unknown store '{other}'. Must be one of: memory, file, http, postgres"
            ))),
        }
    }
}

/// Storage configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub kind: StoreKind,
    /// Path of the JSON data file (file store).
    pub data_file: PathBuf,
    /// Base URL of the json-server API (http store).
    pub api_url: String,
    /// PostgreSQL connection string (postgres store).
    pub database_url: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            kind: StoreKind::File,
            data_file: PathBuf::from("data/hivemind.json"),
            api_url: "http://localhost:3001".into(),
            database_url: None,
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var              | Default                 |
    /// |----------------------|-------------------------|
    /// | `HIVEMIND_STORE`     | `file`                  |
    /// | `HIVEMIND_DATA_FILE` | `data/hivemind.json`    |
    /// | `HIVEMIND_API_URL`   | `http://localhost:3001` |
    /// | `DATABASE_URL`       | (required for postgres) |
    pub fn from_env() -> StoreResult<Self> {
        let defaults = Self::default();

        let kind = match std::env::var("HIVEMIND_STORE") {
            Ok(v) => v.parse()?,
            Err(_) => defaults.kind,
        };
        let data_file = std::env::var("HIVEMIND_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_file);
        let api_url = std::env::var("HIVEMIND_API_URL").unwrap_or(defaults.api_url);
        let database_url = std::env::var("DATABASE_URL").ok();

        if kind == StoreKind::Postgres && database_url.is_none() {
            return Err(StoreError::Config(
                "DATABASE_URL must be set when HIVEMIND_STORE=postgres".into(),
            ));
        }

        Ok(Self {
            kind,
            data_file,
            api_url,
            database_url,
        })
    }
}

/// Open the adapter selected by `config`.
pub async fn open_store(config: &StoreConfig) -> StoreResult<Arc<dyn DataStore>> {
    let store: Arc<dyn DataStore> = match config.kind {
        StoreKind::Memory => Arc::new(MemoryStore::new()),
        StoreKind::File => Arc::new(JsonFileStore::open(&config.data_file).await?),
        StoreKind::Http => Arc::new(HttpStore::new(&config.api_url)?),
        StoreKind::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .ok_or_else(|| StoreError::Config("DATABASE_URL is not set".into()))?;
            Arc::new(PgStore::connect(url).await?)
        }
    };
    tracing::info!(backend = store.backend_tag(), "Data store opened");
    Ok(store)
}
