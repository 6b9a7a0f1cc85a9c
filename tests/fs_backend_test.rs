use recordkeep::config::{CorruptBlobPolicy, RecordkeepConfig, CONFIG_FILENAME};
use recordkeep::error::RecordkeepError;
use recordkeep::model::{EditableRecord, Record, RecordDraft, RecordId, RecordType};
use recordkeep::store::backend::StorageBackend;
use recordkeep::store::fs_backend::FsBackend;
use recordkeep::store::RecordStore;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

#[test]
fn test_fs_backend_missing_key_is_none() {
    let (_dir, backend) = setup();
    assert_eq!(backend.get("records").unwrap(), None);
}

#[test]
fn test_fs_backend_set_and_get() {
    let (dir, backend) = setup();
    backend.set("records", "[]").unwrap();

    assert_eq!(backend.get("records").unwrap(), Some("[]".to_string()));
    let on_disk = fs::read_to_string(dir.path().join("records.json")).unwrap();
    assert_eq!(on_disk, "[]");
}

#[test]
fn test_fs_backend_creates_missing_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b");
    let backend = FsBackend::new(nested.clone());

    backend.set("records", "[]").unwrap();
    assert!(nested.join("records.json").exists());
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (dir, backend) = setup();
    backend.set("records", "[1]").unwrap();
    backend.set("records", "[2]").unwrap();

    // Verify NO .tmp files are left behind
    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
    assert_eq!(backend.get("records").unwrap(), Some("[2]".to_string()));
}

#[test]
fn test_fs_backend_rejects_path_like_keys() {
    let (_dir, backend) = setup();
    assert!(backend.set("../escape", "[]").is_err());
    assert!(backend.get("nested/key").is_err());
}

#[test]
fn test_store_persists_across_sessions() {
    let (dir, backend) = setup();
    let mut store = RecordStore::with_backend(backend);
    store.load().unwrap();
    store
        .add(EditableRecord::new(
            Record::new(1, RecordType::Ssh, "root", "pw"),
            Some("prod ; db".to_string()),
        ))
        .unwrap();
    store.save().unwrap();

    let mut reopened = RecordStore::with_backend(FsBackend::new(dir.path().to_path_buf()));
    reopened.load().unwrap();

    let record = reopened.get(&RecordId::from(1)).unwrap();
    assert_eq!(record.record.login, "root");
    assert_eq!(record.raw_mark.as_deref(), Some("prod;db"));
}

#[test]
fn test_staged_add_is_lost_without_flush() {
    let (dir, backend) = setup();
    let mut store = RecordStore::with_backend(backend);
    store.load().unwrap();
    store.add_empty().unwrap();

    let mut reopened = RecordStore::with_backend(FsBackend::new(dir.path().to_path_buf()));
    reopened.load().unwrap();
    assert!(reopened.is_empty());
}

#[test]
fn test_update_scenario_on_disk() {
    let (dir, backend) = setup();
    let mut store = RecordStore::with_backend(backend);
    store.load().unwrap();

    let id = store.add_empty().unwrap();
    let mut draft = RecordDraft::from_editable(store.get(&id).unwrap());
    draft.raw_mark = Some(" work; personal ".to_string());
    store.update(draft).unwrap();

    let blob = fs::read_to_string(dir.path().join("records.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&blob).unwrap();
    assert_eq!(value[0]["marks"][0]["text"], "work");
    assert_eq!(value[0]["marks"][1]["text"], "personal");
    assert!(!blob.contains("raw"));
}

#[test]
fn test_config_file_drives_store() {
    let (dir, backend) = setup();
    fs::write(
        dir.path().join(CONFIG_FILENAME),
        "storage_key = \"vault\"\non_corrupt = \"reset\"\n",
    )
    .unwrap();
    fs::write(dir.path().join("vault.json"), "not json").unwrap();

    let config = RecordkeepConfig::load(dir.path()).unwrap();
    assert_eq!(config.on_corrupt, CorruptBlobPolicy::Reset);

    let mut store = RecordStore::from_config(backend, &config);
    store.load().unwrap();
    assert!(store.is_empty());

    store.save().unwrap();
    assert_eq!(
        fs::read_to_string(dir.path().join("vault.json")).unwrap(),
        "[]"
    );
}

#[test]
fn test_corrupt_blob_is_fatal_by_default() {
    let (dir, backend) = setup();
    fs::write(dir.path().join("records.json"), "[{").unwrap();

    let mut store = RecordStore::with_backend(backend);
    assert!(matches!(
        store.load(),
        Err(RecordkeepError::Serialization(_))
    ));
}
