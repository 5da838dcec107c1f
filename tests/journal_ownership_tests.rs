//! Journal delete ownership against a live database.

mod common;

use common::TestDb;
use mindtrack::error::Error;
use mindtrack::models::journal::NewJournalEntry;
use mindtrack::queries::journal;
use mindtrack::services::journal::{delete_entry, list_entries};

async fn insert_entry(test_db: &TestDb, user_id: i64) -> i64 {
    let mut conn = test_db.get_connection().await;
    let entry = journal::create_entry(
        &mut conn,
        NewJournalEntry {
            user_id,
            content: "Quiet day, mostly reading".to_string(),
            score: 7.0,
            explanation: "Calm and reflective".to_string(),
            recommendation: "Keep the routine".to_string(),
        },
    )
    .await
    .unwrap();
    entry.id
}

#[tokio::test]
async fn test_non_owner_delete_is_forbidden() {
    let test_db = TestDb::new("test_non_owner_delete_is_forbidden").await;

    let owner = test_db.register_test_user().await;
    let intruder = test_db.register_test_user().await;
    let entry_id = insert_entry(&test_db, owner.id).await;

    let mut conn = test_db.get_connection().await;
    let err = delete_entry(&mut conn, entry_id, intruder.id).await.unwrap_err();
    assert!(matches!(err, Error::Forbidden(_)));

    // The entry survives the failed delete.
    let remaining = list_entries(&mut conn, owner.id).await.unwrap();
    assert!(remaining.iter().any(|e| e.id == entry_id));
}

#[tokio::test]
async fn test_owner_delete_removes_entry_from_listing() {
    let test_db = TestDb::new("test_owner_delete_removes_entry_from_listing").await;

    let owner = test_db.register_test_user().await;
    let entry_id = insert_entry(&test_db, owner.id).await;

    let mut conn = test_db.get_connection().await;
    delete_entry(&mut conn, entry_id, owner.id).await.unwrap();

    let remaining = list_entries(&mut conn, owner.id).await.unwrap();
    assert!(remaining.iter().all(|e| e.id != entry_id));
}

#[tokio::test]
async fn test_delete_unknown_entry_is_not_found() {
    let test_db = TestDb::new("test_delete_unknown_entry_is_not_found").await;

    let owner = test_db.register_test_user().await;

    let mut conn = test_db.get_connection().await;
    let err = delete_entry(&mut conn, i64::MAX, owner.id).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}
