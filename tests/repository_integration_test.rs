// ==========================================
// Repository 层集成测试
// ==========================================
// 测试目标: JSON/SQLite 快照存储 + 备份/恢复/重置
// ==========================================


use banking_dashboard::domain::metrics::{CategoryMetrics, Dataset};
use banking_dashboard::domain::sample::default_dataset;
use banking_dashboard::repository::{
    DatasetBackupManager, DatasetStore, JsonFileDatasetStore, RepositoryError,
    SqliteDatasetStore,
};
use indexmap::IndexMap;
use test_helpers::create_test_db;

fn single_category_dataset() -> Dataset {
    let mut data = IndexMap::new();
    data.insert(
        "Biaya".to_string(),
        CategoryMetrics::new(1_000.0, 2_000.0, 900.0, 800.0, 700.0),
    );
    Dataset::new(data)
}

fn assert_store_roundtrip(store: &dyn DatasetStore) {
    assert!(matches!(store.load(), Err(RepositoryError::NotFound(_))));

    let first = default_dataset();
    store.save(&first).unwrap();
    assert_eq!(store.load().unwrap(), first);

    // 整体替换，最后一次写入生效
    let second = single_category_dataset();
    store.save(&second).unwrap();
    let loaded = store.load().unwrap();
    assert_eq!(loaded, second);
    assert!(loaded.get("Pinjaman").is_none());
}

#[test]
fn test_json_store_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileDatasetStore::new(dir.path().join("nested/banking-data.json"));
    assert_store_roundtrip(&store);
}

#[test]
fn test_sqlite_store_roundtrip() {
    let (_temp_dir, db_path) = create_test_db().unwrap();
    let store = SqliteDatasetStore::new(&db_path).unwrap();
    assert_store_roundtrip(&store);

    // 重新打开后数据仍在
    let reopened = SqliteDatasetStore::new(&db_path).unwrap();
    assert_eq!(reopened.load().unwrap(), single_category_dataset());
}

#[test]
fn test_json_store_malformed_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("banking-data.json");
    std::fs::write(&path, "{ not json").unwrap();

    let store = JsonFileDatasetStore::new(&path);
    assert!(matches!(store.load(), Err(RepositoryError::ReadError(_))));
}

#[test]
fn test_backup_restore_reset_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileDatasetStore::new(dir.path().join("banking-data.json"));
    let manager = DatasetBackupManager::new(&store, dir.path().join("backups"));

    // 没有数据时不产生备份，也无法恢复
    assert!(manager.backup().unwrap().is_none());
    assert!(manager.restore().unwrap().is_none());

    let custom = single_category_dataset();
    store.save(&custom).unwrap();
    let backup = manager.backup().unwrap().expect("应生成备份");
    assert!(backup
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with("banking-data-") && n.ends_with(".json"))
        .unwrap_or(false));

    // 备份文件名精确到毫秒
    std::thread::sleep(std::time::Duration::from_millis(5));

    // reset 先备份再写入默认数据
    let reset = manager.reset().unwrap();
    assert_eq!(reset.len(), 5);
    assert_eq!(manager.list_backups().unwrap().len(), 2);
    assert_eq!(manager.view().unwrap().len(), 5);

    // restore 取最新备份（即 reset 前的自定义数据）
    manager.restore().unwrap().expect("应从备份恢复");
    assert_eq!(store.load().unwrap(), custom);
}
