use chrono::NaiveDate;
use recordbook_core::{InventoryItem, InventoryLogger, LoadError};
use std::fs;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

#[test]
fn saved_log_is_restored_by_a_new_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");

    let mut first = InventoryLogger::<InventoryItem>::new(&path);
    first.seed_sample_data(today()).unwrap();
    first.save_to_store().unwrap();

    let mut second = InventoryLogger::<InventoryItem>::new(&path);
    assert!(second.list_all().is_empty());
    assert_eq!(second.load_from_store().unwrap(), 5);

    let mut restored = second.list_all();
    let mut original = first.list_all();
    restored.sort_by_key(|item| item.id);
    original.sort_by_key(|item| item.id);
    assert_eq!(restored, original);
    assert_eq!(restored[0].date_added, NaiveDate::from_ymd_opt(2024, 6, 5).unwrap());
}

#[test]
fn load_without_store_gives_empty_log() {
    let dir = tempfile::tempdir().unwrap();
    let mut logger = InventoryLogger::<InventoryItem>::new(dir.path().join("inventory.json"));
    logger
        .add(InventoryItem::new(1, "Laptop", 10, today()))
        .unwrap();

    assert_eq!(logger.load_from_store().unwrap(), 0);
    assert!(logger.list_all().is_empty());
}

#[test]
fn store_with_duplicate_ids_is_rejected_and_log_kept() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    fs::write(
        &path,
        r#"[
  {"id": 1, "name": "Laptop", "quantity": 10, "date_added": "2024-06-01"},
  {"id": 1, "name": "Laptop copy", "quantity": 3, "date_added": "2024-06-02"}
]"#,
    )
    .unwrap();

    let mut logger = InventoryLogger::<InventoryItem>::new(&path);
    logger
        .add(InventoryItem::new(9, "Cable", 100, today()))
        .unwrap();

    let err = logger.load_from_store().unwrap_err();
    assert!(matches!(err, LoadError::Repo(_)));
    assert_eq!(logger.list_all().len(), 1);
    assert_eq!(logger.list_all()[0].id, 9);
}

#[test]
fn unreadable_store_surfaces_store_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    fs::write(&path, "[{\"id\": \"one\"}]").unwrap();

    let mut logger = InventoryLogger::<InventoryItem>::new(&path);
    let err = logger.load_from_store().unwrap_err();
    assert!(matches!(err, LoadError::Store(_)));
}
