//! In-process document state shared by the memory and JSON file stores.

use serde::{Deserialize, Serialize};

use crate::{document_id, ensure_document_id, Collection, Document, StoreResult};

/// All collections held in memory.
///
/// Field names are the keys of the JSON file layout, which match the keys the
/// browser build keeps in local storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct Collections {
    #[serde(rename = "hivemind_users", default)]
    users: Vec<Document>,
    #[serde(rename = "hivemind_projects", default)]
    projects: Vec<Document>,
    #[serde(rename = "hivemind_tasks", default)]
    tasks: Vec<Document>,
    #[serde(rename = "hivemind_current_user", default)]
    session: Option<Document>,
}

impl Collections {
    fn keyed(&self, collection: Collection) -> StoreResult<&Vec<Document>> {
        collection.ensure_keyed()?;
        Ok(match collection {
            Collection::Users => &self.users,
            Collection::Projects => &self.projects,
            _ => &self.tasks,
        })
    }

    fn keyed_mut(&mut self, collection: Collection) -> StoreResult<&mut Vec<Document>> {
        collection.ensure_keyed()?;
        Ok(match collection {
            Collection::Users => &mut self.users,
            Collection::Projects => &mut self.projects,
            _ => &mut self.tasks,
        })
    }

    fn position(docs: &[Document], id: &str) -> Option<usize> {
        docs.iter()
            .position(|d| d.get("id").and_then(|v| v.as_str()) == Some(id))
    }

    pub fn list(&self, collection: Collection) -> StoreResult<Vec<Document>> {
        Ok(self.keyed(collection)?.clone())
    }

    pub fn get(&self, collection: Collection, id: &str) -> StoreResult<Option<Document>> {
        let docs = self.keyed(collection)?;
        Ok(Self::position(docs, id).map(|i| docs[i].clone()))
    }

    pub fn upsert(&mut self, collection: Collection, mut document: Document) -> StoreResult<Document> {
        let id = ensure_document_id(&mut document)?;
        let docs = self.keyed_mut(collection)?;
        match Self::position(docs, &id) {
            Some(i) => docs[i] = document.clone(),
            None => docs.push(document.clone()),
        }
        Ok(document)
    }

    pub fn delete(&mut self, collection: Collection, id: &str) -> StoreResult<bool> {
        let docs = self.keyed_mut(collection)?;
        match Self::position(docs, id) {
            Some(i) => {
                docs.remove(i);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn singleton(&self, collection: Collection) -> StoreResult<Option<Document>> {
        collection.ensure_singleton()?;
        Ok(self.session.clone())
    }

    pub fn set_singleton(&mut self, collection: Collection, document: Document) -> StoreResult<()> {
        collection.ensure_singleton()?;
        // Validates the document shape; singletons need no id.
        document_id(&document)?;
        self.session = Some(document);
        Ok(())
    }

    pub fn clear_singleton(&mut self, collection: Collection) -> StoreResult<()> {
        collection.ensure_singleton()?;
        self.session = None;
        Ok(())
    }
}
