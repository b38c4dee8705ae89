/// Failure of a storage adapter.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// The remote store answered with a status the adapter does not handle.
    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// A stored document could not be read as the expected entity.
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("Collection '{collection}' is not a {expected} collection")]
    WrongCollectionKind {
        collection: &'static str,
        expected: &'static str,
    },

    #[error("Invalid store configuration: {0}")]
    Config(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
