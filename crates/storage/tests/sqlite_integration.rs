use storage::repository::{SlotRepository, Storage};
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn sqlite_slot_roundtrip_and_overwrite() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_slots?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert!(repo.get_slot("dsaMasterProgress").await.unwrap().is_none());

    repo.put_slot("dsaMasterProgress", r#"{"completedDays":[1],"currentDay":2}"#)
        .await
        .unwrap();
    repo.put_slot("dsaMasterProgress", r#"{"completedDays":[1,2],"currentDay":3}"#)
        .await
        .unwrap();

    let stored = repo.get_slot("dsaMasterProgress").await.unwrap();
    assert_eq!(
        stored.as_deref(),
        Some(r#"{"completedDays":[1,2],"currentDay":3}"#)
    );
}

#[tokio::test]
async fn sqlite_slots_are_independent_and_removable() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_remove?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    repo.put_slot("darkMode", "true").await.unwrap();
    repo.put_slot("other", "x").await.unwrap();
    repo.remove_slot("darkMode").await.unwrap();
    repo.remove_slot("darkMode").await.unwrap();

    assert!(repo.get_slot("darkMode").await.unwrap().is_none());
    assert_eq!(repo.get_slot("other").await.unwrap().as_deref(), Some("x"));
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let url = "sqlite:file:memdb_migrate_twice?mode=memory&cache=shared";
    let repo = SqliteRepository::connect(url).await.expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.migrate().await.expect("second migrate");

    let storage = Storage::sqlite(url).await.expect("storage");
    storage.slots.put_slot("k", "v").await.unwrap();
    assert_eq!(repo.get_slot("k").await.unwrap().as_deref(), Some("v"));
}
