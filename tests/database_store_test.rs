use chrono::Utc;
use item_api::store::{DatabaseStore, ItemStore, StoreError};
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

fn row(id: i32, name: &str, price: f64) -> entity::item::Model {
    let now = Utc::now().into();
    entity::item::Model {
        id,
        name: name.to_string(),
        price,
        created_at: now,
        updated_at: now,
    }
}

#[tokio::test]
async fn test_list_maps_rows_to_items() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row(1, "Widget", 10.0), row(2, "Freebie", 0.0)]])
        .into_connection();
    let store = DatabaseStore::with_connection(db);

    let items = store.list().await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, 1);
    assert_eq!(items[0].name, "Widget");
    assert_eq!(items[0].price, 10.0);
    assert!(items[0].created_at.is_some());
    assert_eq!(items[1].price, 0.0);
}

#[tokio::test]
async fn test_list_failure_reports_unavailable() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Custom("connection reset".to_string())])
        .into_connection();
    let store = DatabaseStore::with_connection(db);

    let err = store.list().await.unwrap_err();
    assert!(matches!(err, StoreError::Unavailable(_)));
}

#[tokio::test]
async fn test_insert_returns_the_stored_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row(7, "Widget", 10.0)]])
        .append_exec_results([MockExecResult {
            last_insert_id: 7,
            rows_affected: 1,
        }])
        .into_connection();
    let store = DatabaseStore::with_connection(db);

    let item = store.insert("Widget".to_string(), 10.0).await.unwrap();

    assert_eq!(item.id, 7);
    assert_eq!(item.name, "Widget");
    assert!(item.created_at.is_some());
    assert!(item.updated_at.is_some());
}

#[tokio::test]
async fn test_update_rewrites_the_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row(7, "Widget", 10.0)], vec![row(7, "Gadget", 12.5)]])
        .append_exec_results([MockExecResult {
            last_insert_id: 7,
            rows_affected: 1,
        }])
        .into_connection();
    let store = DatabaseStore::with_connection(db);

    let item = store
        .update(7, "Gadget".to_string(), 12.5)
        .await
        .unwrap();

    assert_eq!(item.id, 7);
    assert_eq!(item.name, "Gadget");
    assert_eq!(item.price, 12.5);
}

#[tokio::test]
async fn test_update_unknown_id_reports_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<entity::item::Model>::new()])
        .into_connection();
    let store = DatabaseStore::with_connection(db);

    let err = store
        .update(42, "Gadget".to_string(), 12.5)
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(42)));
}

#[tokio::test]
async fn test_delete_reports_affected_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();
    let store = DatabaseStore::with_connection(db);

    assert!(store.delete(7).await.unwrap());
    assert!(!store.delete(7).await.unwrap());
}

#[tokio::test]
async fn test_missing_connection_string_reports_unavailable() {
    let store = DatabaseStore::new(None);

    let err = store.list().await.unwrap_err();
    match err {
        StoreError::Unavailable(detail) => assert!(detail.contains("DATABASE_URL")),
        other => panic!("expected Unavailable, got {other:?}"),
    }
}
