//! PostgreSQL store: each collection is a set of JSONB rows.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::{ensure_document_id, Collection, DataStore, Document, StoreResult};

pub type DbPool = PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Run a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations in `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// [`DataStore`] over the `documents` and `singletons` tables.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Connect, verify, and migrate.
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let pool = create_pool(database_url).await?;
        health_check(&pool).await?;
        run_migrations(&pool).await?;
        tracing::info!("PostgreSQL store ready");
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl DataStore for PgStore {
    fn backend_tag(&self) -> &'static str {
        "postgres"
    }

    async fn list_all(&self, collection: Collection) -> StoreResult<Vec<Document>> {
        collection.ensure_keyed()?;
        let rows = sqlx::query_scalar::<_, Document>(
            "SELECT body FROM documents WHERE collection = $1 ORDER BY seq",
        )
        .bind(collection.name())
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, collection: Collection, id: &str) -> StoreResult<Option<Document>> {
        collection.ensure_keyed()?;
        let row = sqlx::query_scalar::<_, Document>(
            "SELECT body FROM documents WHERE collection = $1 AND id = $2",
        )
        .bind(collection.name())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn upsert(&self, collection: Collection, mut document: Document) -> StoreResult<Document> {
        collection.ensure_keyed()?;
        let id = ensure_document_id(&mut document)?;
        let stored = sqlx::query_scalar::<_, Document>(
            "INSERT INTO documents (collection, id, body)
             VALUES ($1, $2, $3)
             ON CONFLICT (collection, id)
             DO UPDATE SET body = EXCLUDED.body, updated_at = now()
             RETURNING body",
        )
        .bind(collection.name())
        .bind(&id)
        .bind(&document)
        .fetch_one(&self.pool)
        .await?;
        Ok(stored)
    }

    async fn delete(&self, collection: Collection, id: &str) -> StoreResult<bool> {
        collection.ensure_keyed()?;
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection.name())
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn get_singleton(&self, collection: Collection) -> StoreResult<Option<Document>> {
        collection.ensure_singleton()?;
        let row =
            sqlx::query_scalar::<_, Document>("SELECT body FROM singletons WHERE collection = $1")
                .bind(collection.name())
                .fetch_optional(&self.pool)
                .await?;
        Ok(row)
    }

    async fn set_singleton(&self, collection: Collection, document: Document) -> StoreResult<()> {
        collection.ensure_singleton()?;
        sqlx::query(
            "INSERT INTO singletons (collection, body)
             VALUES ($1, $2)
             ON CONFLICT (collection)
             DO UPDATE SET body = EXCLUDED.body, updated_at = now()",
        )
        .bind(collection.name())
        .bind(&document)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn clear_singleton(&self, collection: Collection) -> StoreResult<()> {
        collection.ensure_singleton()?;
        sqlx::query("DELETE FROM singletons WHERE collection = $1")
            .bind(collection.name())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        health_check(&self.pool).await?;
        Ok(())
    }
}
