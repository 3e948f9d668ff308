use ticklist_core::{
    Filter, JsonFileStorage, MemoryStorage, SessionError, SnapshotStorage, StorageError,
    StorageResult, Task, TaskSession, TaskValidationError,
};

/// Storage whose slot always fails to write, as a full disk would.
struct FailingStorage;

impl SnapshotStorage for FailingStorage {
    fn load(&self) -> StorageResult<Vec<Task>> {
        Ok(Vec::new())
    }

    fn save(&mut self, _tasks: &[Task]) -> StorageResult<()> {
        Err(StorageError::Io(std::io::Error::other("disk full")))
    }
}

#[test]
fn worked_example_add_toggle_clear() {
    let mut session = TaskSession::open(MemoryStorage::new()).unwrap();
    assert!(session.store().is_empty());

    let id = session.add("buy milk").unwrap();
    let view = session.view();
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].text, "buy milk");
    assert!(!view.rows[0].completed);

    assert!(session.toggle(id).unwrap());
    assert!(session.view().rows[0].completed);
    assert_eq!(session.store().remaining_count(), 0);

    assert_eq!(session.clear_completed().unwrap(), 1);
    assert!(session.store().is_empty());
}

#[test]
fn empty_text_surfaces_validation_error_and_changes_nothing() {
    let mut session = TaskSession::open(MemoryStorage::new()).unwrap();
    session.add("keep").unwrap();

    let err = session.add("   ").unwrap_err();
    assert!(matches!(
        err,
        SessionError::Validation(TaskValidationError::EmptyText)
    ));
    assert_eq!(session.store().len(), 1);
}

#[test]
fn failed_save_surfaces_error_and_keeps_the_mutation() {
    let mut session = TaskSession::open(FailingStorage).unwrap();

    let err = session.add("survives the failed save").unwrap_err();
    assert!(matches!(err, SessionError::Storage(StorageError::Io(_))));

    // The mutation is not rolled back; only the save failed.
    assert_eq!(session.store().len(), 1);
    assert_eq!(session.store().tasks()[0].text, "survives the failed save");

    let id = session.store().tasks()[0].id;
    let err = session.toggle(id).unwrap_err();
    assert!(matches!(err, SessionError::Storage(StorageError::Io(_))));
    assert!(session.store().tasks()[0].completed);
}

#[test]
fn mutations_persist_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");

    let first_id;
    {
        let mut session = TaskSession::open(JsonFileStorage::new(&path)).unwrap();
        first_id = session.add("write tests").unwrap();
        session.add("review patch").unwrap();
        session.toggle(first_id).unwrap();
    }

    let session = TaskSession::open(JsonFileStorage::new(&path)).unwrap();
    let tasks = session.store().tasks();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].text, "review patch");
    assert_eq!(tasks[1].text, "write tests");
    assert!(tasks[1].completed);
    assert_eq!(tasks[1].id, first_id);
}

#[test]
fn noop_mutations_do_not_rewrite_the_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");

    let mut session = TaskSession::open(JsonFileStorage::new(&path)).unwrap();
    assert!(!session.delete(42).unwrap());
    assert!(!session.toggle(42).unwrap());
    assert_eq!(session.clear_completed().unwrap(), 0);

    // Nothing changed, so the slot was never written.
    assert!(!path.exists());
}

#[test]
fn filter_is_session_state_and_not_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");

    {
        let mut session = TaskSession::open(JsonFileStorage::new(&path)).unwrap();
        session.add("a").unwrap();
        session.set_filter(Filter::Completed);
        assert_eq!(session.filter(), Filter::Completed);
    }

    let session = TaskSession::open(JsonFileStorage::new(&path)).unwrap();
    assert_eq!(session.filter(), Filter::All);
}

#[test]
fn view_projection_is_idempotent() {
    let mut session = TaskSession::open(MemoryStorage::new()).unwrap();
    let id = session.add("stable").unwrap();
    session.add("other").unwrap();
    session.toggle(id).unwrap();
    session.set_filter(Filter::Active);

    let first = session.view();
    let second = session.view();
    assert_eq!(first, second);
    assert_eq!(first.render_text(), second.render_text());
}

#[test]
fn view_reflects_filter_and_counters() {
    let mut session = TaskSession::open(MemoryStorage::new()).unwrap();
    let a = session.add("a").unwrap();
    session.add("b").unwrap();
    session.toggle(a).unwrap();

    session.set_filter(Filter::Active);
    let view = session.view();
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].text, "b");
    assert_eq!(view.remaining_label, "1 task remaining");
    assert!(view.clear_enabled);

    session.set_filter(Filter::Completed);
    let view = session.view();
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].text, "a");
    assert!(view.rows[0].completed);
}
