use ticklist_core::{JsonFileStorage, MemoryStorage, SnapshotStorage, StorageError, Task};

fn sample_tasks() -> Vec<Task> {
    let mut done = Task::new(1_700_000_000_001, "ship release", 1_700_000_000_001);
    done.completed = true;
    vec![done, Task::new(1_700_000_000_000, "buy milk", 1_700_000_000_000)]
}

#[test]
fn json_file_roundtrip_preserves_tasks_elementwise() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = JsonFileStorage::new(dir.path().join("tasks.json"));

    let tasks = sample_tasks();
    storage.save(&tasks).unwrap();
    let loaded = storage.load().unwrap();

    assert_eq!(loaded, tasks);
}

#[test]
fn missing_file_loads_as_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    let storage = JsonFileStorage::new(dir.path().join("absent.json"));

    assert_eq!(storage.load().unwrap(), Vec::new());
}

#[test]
fn save_overwrites_the_slot_wholesale() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = JsonFileStorage::new(dir.path().join("tasks.json"));

    storage.save(&sample_tasks()).unwrap();
    let replacement = vec![Task::new(9, "only survivor", 9)];
    storage.save(&replacement).unwrap();

    assert_eq!(storage.load().unwrap(), replacement);
}

#[test]
fn save_leaves_no_temp_file_behind() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    let mut storage = JsonFileStorage::new(&path);

    storage.save(&sample_tasks()).unwrap();

    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("tasks.json")]);
}

#[test]
fn malformed_snapshot_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    std::fs::write(&path, b"{not json").unwrap();

    let err = JsonFileStorage::new(&path).load().unwrap_err();
    assert!(matches!(err, StorageError::Malformed(_)));
}

#[test]
fn duplicate_ids_in_snapshot_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    let twins = vec![Task::new(5, "a", 5), Task::new(5, "b", 5)];
    std::fs::write(&path, serde_json::to_vec(&twins).unwrap()).unwrap();

    let err = JsonFileStorage::new(&path).load().unwrap_err();
    assert!(matches!(err, StorageError::DuplicateId(5)));
}

#[test]
fn snapshot_wire_format_is_a_json_task_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    let mut storage = JsonFileStorage::new(&path);
    storage.save(&sample_tasks()).unwrap();

    let value: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["id"], 1_700_000_000_001_i64);
    assert_eq!(entries[0]["text"], "ship release");
    assert_eq!(entries[0]["completed"], true);
    assert_eq!(entries[0]["created_at"], 1_700_000_000_001_i64);
}

#[test]
fn memory_storage_roundtrips_and_validates() {
    let mut storage = MemoryStorage::new();
    let tasks = sample_tasks();
    storage.save(&tasks).unwrap();
    assert_eq!(storage.load().unwrap(), tasks);

    let seeded = MemoryStorage::with_tasks(vec![Task::new(3, "a", 3), Task::new(3, "b", 3)]);
    let err = seeded.load().unwrap_err();
    assert!(matches!(err, StorageError::DuplicateId(3)));
}
