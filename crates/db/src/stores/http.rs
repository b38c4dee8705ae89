//! Remote store speaking the json-server REST layout.
//!
//! ```text
//! GET    /{collection}          list
//! GET    /{collection}/{id}     fetch (404 = absent)
//! PUT    /{collection}/{id}     replace
//! POST   /{collection}          insert
//! DELETE /{collection}/{id}     remove (404 = absent)
//! ```
//!
//! The session singleton lives in the `/currentUser` array resource, which
//! holds at most one record.

use async_trait::async_trait;
use reqwest::{Response, StatusCode, Url};
use serde_json::Value;

use crate::{ensure_document_id, Collection, DataStore, Document, StoreError, StoreResult};

/// Id given to the single record of the `/currentUser` resource.
const SESSION_RECORD_ID: &str = "current";

/// [`DataStore`] backed by a json-server style REST API.
#[derive(Debug, Clone)]
pub struct HttpStore {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpStore {
    pub fn new(base_url: &str) -> StoreResult<Self> {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Fails with [`StoreError::Config`] unless `base_url` is an absolute
    /// URL that can carry path segments.
    pub fn with_client(base_url: &str, client: reqwest::Client) -> StoreResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| StoreError::Config(format!("invalid store URL '{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(StoreError::Config(format!(
                "store URL '{base_url}' cannot hold a path"
            )));
        }
        Ok(Self { base_url, client })
    }

    fn resource(collection: Collection) -> &'static str {
        match collection {
            Collection::Users => "users",
            Collection::Projects => "projects",
            Collection::Tasks => "tasks",
            Collection::Session => "currentUser",
        }
    }

    /// Base URL with `segments` appended, each percent-encoded as one segment.
    fn url(&self, segments: &[&str]) -> StoreResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                StoreError::Config(format!("store URL '{}' cannot hold a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn collection_url(&self, collection: Collection) -> StoreResult<Url> {
        self.url(&[Self::resource(collection)])
    }

    fn item_url(&self, collection: Collection, id: &str) -> StoreResult<Url> {
        self.url(&[Self::resource(collection), id])
    }

    /// Turn a non-success response into [`StoreError::UnexpectedStatus`].
    fn check(response: Response) -> StoreResult<Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(StoreError::UnexpectedStatus {
                status: response.status().as_u16(),
                url: response.url().to_string(),
            })
        }
    }

    async fn fetch_list(&self, collection: Collection) -> StoreResult<Vec<Document>> {
        let url = self.collection_url(collection)?;
        tracing::debug!(%url, "GET");
        let response = Self::check(self.client.get(url.clone()).send().await?)?;
        match response.json::<Value>().await? {
            Value::Array(items) => Ok(items),
            other => Err(StoreError::MalformedDocument(format!(
                "expected an array from {url}, got {other}"
            ))),
        }
    }

    async fn post(&self, collection: Collection, document: &Document) -> StoreResult<Document> {
        let url = self.collection_url(collection)?;
        tracing::debug!(%url, "POST");
        let response = Self::check(self.client.post(url).json(document).send().await?)?;
        Ok(response.json().await?)
    }

    async fn remove(&self, collection: Collection, id: &str) -> StoreResult<bool> {
        if !addressable(id) {
            return Ok(false);
        }
        let url = self.item_url(collection, id)?;
        tracing::debug!(%url, "DELETE");
        let response = self.client.delete(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        Self::check(response)?;
        Ok(true)
    }

    /// Delete every record of the session resource.
    async fn clear_session_records(&self) -> StoreResult<()> {
        for record in self.fetch_list(Collection::Session).await? {
            if let Some(id) = record.get("id").and_then(id_string) {
                self.remove(Collection::Session, &id).await?;
            }
        }
        Ok(())
    }
}

/// Dot segments would be resolved away by URL normalization.
fn addressable(id: &str) -> bool {
    !matches!(id, "" | "." | "..")
}

/// json-server may hand back numeric ids for records it created itself.
fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[async_trait]
impl DataStore for HttpStore {
    fn backend_tag(&self) -> &'static str {
        "http"
    }

    async fn list_all(&self, collection: Collection) -> StoreResult<Vec<Document>> {
        collection.ensure_keyed()?;
        self.fetch_list(collection).await
    }

    async fn get_by_id(&self, collection: Collection, id: &str) -> StoreResult<Option<Document>> {
        collection.ensure_keyed()?;
        if !addressable(id) {
            return Ok(None);
        }
        let url = self.item_url(collection, id)?;
        tracing::debug!(%url, "GET");
        let response = self.client.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(Self::check(response)?.json().await?))
    }

    async fn upsert(&self, collection: Collection, mut document: Document) -> StoreResult<Document> {
        collection.ensure_keyed()?;
        let id = ensure_document_id(&mut document)?;
        if !addressable(&id) {
            return Err(StoreError::MalformedDocument(format!(
                "document id '{id}' cannot be used as a path segment"
            )));
        }
        let url = self.item_url(collection, &id)?;
        tracing::debug!(%url, "PUT");
        let response = self.client.put(url).json(&document).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return self.post(collection, &document).await;
        }
        Ok(Self::check(response)?.json().await?)
    }

    async fn delete(&self, collection: Collection, id: &str) -> StoreResult<bool> {
        collection.ensure_keyed()?;
        self.remove(collection, id).await
    }

    async fn get_singleton(&self, collection: Collection) -> StoreResult<Option<Document>> {
        collection.ensure_singleton()?;
        let mut records = self.fetch_list(collection).await?;
        if records.len() > 1 {
            tracing::warn!(count = records.len(), "Multiple session records, using the first");
        }
        let Some(mut record) = records.drain(..).next() else {
            return Ok(None);
        };
        if let Some(object) = record.as_object_mut() {
            object.remove("id");
        }
        Ok(Some(record))
    }

    async fn set_singleton(&self, collection: Collection, mut document: Document) -> StoreResult<()> {
        collection.ensure_singleton()?;
        let object = document.as_object_mut().ok_or_else(|| {
            StoreError::MalformedDocument("session document is not a JSON object".into())
        })?;
        object.insert("id".into(), Value::String(SESSION_RECORD_ID.into()));
        self.clear_session_records().await?;
        self.post(collection, &document).await?;
        Ok(())
    }

    async fn clear_singleton(&self, collection: Collection) -> StoreResult<()> {
        collection.ensure_singleton()?;
        self.clear_session_records().await
    }

    async fn health_check(&self) -> StoreResult<()> {
        let url = self.collection_url(Collection::Users)?;
        Self::check(self.client.head(url).send().await?)?;
        Ok(())
    }
}
