//! Contract tests for the in-process and file-backed stores.

mod common;

use hivemind_db::{Collection, DataStore, JsonFileStore, MemoryStore};
use serde_json::json;

#[tokio::test]
async fn memory_store_satisfies_contract() {
    let store = MemoryStore::new();
    common::assert_store_contract(&store).await;
    assert_eq!(store.backend_tag(), "memory");
}

#[tokio::test]
async fn json_file_store_satisfies_contract() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::open(dir.path().join("db.json")).await.unwrap();
    common::assert_store_contract(&store).await;
}

#[tokio::test]
async fn json_file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("db.json");

    {
        let store = JsonFileStore::open(&path).await.unwrap();
        store
            .upsert(Collection::Users, json!({"id": "u1", "name": "Ada"}))
            .await
            .unwrap();
        store
            .set_singleton(Collection::Session, json!({"userId": "u1"}))
            .await
            .unwrap();
    }

    let reopened = JsonFileStore::open(&path).await.unwrap();
    let user = reopened
        .get_by_id(Collection::Users, "u1")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user["name"], "Ada");
    let session = reopened
        .get_singleton(Collection::Session)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(session["userId"], "u1");
}

#[tokio::test]
async fn json_file_uses_local_storage_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db.json");
    let store = JsonFileStore::open(&path).await.unwrap();
    store
        .upsert(Collection::Tasks, json!({"id": "t1"}))
        .await
        .unwrap();

    let raw: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(raw["hivemind_tasks"][0]["id"], "t1");
    assert!(raw["hivemind_users"].as_array().unwrap().is_empty());
    assert!(raw["hivemind_current_user"].is_null());
    assert!(!dir.path().join("db.json.tmp").exists());
}

#[tokio::test]
async fn json_file_reads_partial_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db.json");
    std::fs::write(&path, r#"{"hivemind_projects": [{"id": "p1"}]}"#).unwrap();

    let store = JsonFileStore::open(&path).await.unwrap();
    assert_eq!(store.list_all(Collection::Projects).await.unwrap().len(), 1);
    assert!(store.list_all(Collection::Users).await.unwrap().is_empty());
}

#[tokio::test]
async fn json_file_rejects_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db.json");
    std::fs::write(&path, "{not json").unwrap();
    assert!(JsonFileStore::open(&path).await.is_err());
}
