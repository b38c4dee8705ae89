use assert_matches::assert_matches;
use hivemind_db::{Collection, DataStore, StoreError};
use serde_json::json;

/// Exercise the full [`DataStore`] contract against a fresh, empty store.
pub async fn assert_store_contract(store: &dyn DataStore) {
    // Empty collections.
    for collection in Collection::KEYED {
        assert!(store.list_all(collection).await.unwrap().is_empty());
    }
    assert!(store.get_by_id(Collection::Users, "nope").await.unwrap().is_none());
    assert!(store.get_singleton(Collection::Session).await.unwrap().is_none());

    // Upsert assigns ids and preserves insertion order.
    let first = store
        .upsert(Collection::Projects, json!({"name": "first"}))
        .await
        .unwrap();
    let first_id = first["id"].as_str().unwrap().to_string();
    store
        .upsert(Collection::Projects, json!({"id": "p2", "name": "second"}))
        .await
        .unwrap();
    let names: Vec<_> = store
        .list_all(Collection::Projects)
        .await
        .unwrap()
        .into_iter()
        .map(|d| d["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["first", "second"]);

    // Upsert with an existing id replaces in place.
    store
        .upsert(Collection::Projects, json!({"id": first_id, "name": "renamed"}))
        .await
        .unwrap();
    let fetched = store
        .get_by_id(Collection::Projects, &first_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched["name"], "renamed");
    let all = store.list_all(Collection::Projects).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0]["name"], "renamed");

    // Collections are independent.
    assert!(store.list_all(Collection::Tasks).await.unwrap().is_empty());

    // Delete.
    assert!(store.delete(Collection::Projects, "p2").await.unwrap());
    assert!(!store.delete(Collection::Projects, "p2").await.unwrap());
    assert_eq!(store.list_all(Collection::Projects).await.unwrap().len(), 1);

    // Singleton.
    store
        .set_singleton(Collection::Session, json!({"userId": "u1"}))
        .await
        .unwrap();
    store
        .set_singleton(Collection::Session, json!({"userId": "u2"}))
        .await
        .unwrap();
    let session = store.get_singleton(Collection::Session).await.unwrap().unwrap();
    assert_eq!(session["userId"], "u2");
    store.clear_singleton(Collection::Session).await.unwrap();
    store.clear_singleton(Collection::Session).await.unwrap();
    assert!(store.get_singleton(Collection::Session).await.unwrap().is_none());

    // Wrong collection kinds.
    assert_matches!(
        store.list_all(Collection::Session).await,
        Err(StoreError::WrongCollectionKind { .. })
    );
    assert_matches!(
        store.get_singleton(Collection::Users).await,
        Err(StoreError::WrongCollectionKind { .. })
    );
}
