//! Task store
//!
//! Owns the task collection. Every mutation is written through the
//! persistence adapter before it returns, and the in-memory collection only
//! changes once that write succeeded.

use std::rc::Rc;

use tracing::{info, warn};

use super::model::Task;
use crate::schedule::Clock;
use crate::storage::TaskPersistence;
use crate::{Error, Result};

/// The single source of truth for task data
pub struct TaskStore {
    tasks: Vec<Task>,
    persistence: TaskPersistence,
    clock: Rc<dyn Clock>,
}

impl TaskStore {
    /// Open the store, loading whatever the persistence adapter holds.
    ///
    /// Unreadable or corrupt data is discarded and the store starts empty.
    pub fn open(persistence: TaskPersistence, clock: Rc<dyn Clock>) -> Self {
        let tasks = match persistence.load() {
            Ok(tasks) => tasks,
            Err(e) => {
                warn!("Discarding stored tasks under `{}`: {}", persistence.key(), e);
                Vec::new()
            }
        };
        info!("Loaded {} tasks", tasks.len());

        Self {
            tasks,
            persistence,
            clock,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Create a task from raw form input
    pub fn add(&mut self, text: &str, date: &str) -> Result<Task> {
        let (text, date) = Task::validate_input(text, date)?;

        // Creation times never run backwards, even if the wall clock does
        let mut created_at = self.clock.utc();
        if let Some(latest) = self.tasks.iter().map(Task::created_at).max() {
            created_at = created_at.max(latest);
        }

        let task = Task::new(text, Some(date), created_at);
        let mut next = self.tasks.clone();
        next.push(task.clone());
        self.commit(next)?;

        info!("Added task {}", task.id());
        Ok(task)
    }

    /// Flip the completion flag of a task
    pub fn toggle_done(&mut self, id: &str) -> Result<Task> {
        let index = self.position(id)?;
        let mut next = self.tasks.clone();
        next[index].toggle();
        let task = next[index].clone();
        self.commit(next)?;

        info!("Task {} marked done={}", id, task.is_done());
        Ok(task)
    }

    /// Delete a task
    pub fn remove(&mut self, id: &str) -> Result<()> {
        self.take(id)?;
        info!("Removed task {}", id);
        Ok(())
    }

    /// Delete every task
    pub fn clear(&mut self) -> Result<()> {
        let count = self.tasks.len();
        self.commit(Vec::new())?;
        info!("Cleared {} tasks", count);
        Ok(())
    }

    /// Remove a task so it can be re-entered through the creation form.
    ///
    /// Returns the removed task, or `None` when the id is unknown.
    pub fn take_for_edit(&mut self, id: &str) -> Result<Option<Task>> {
        match self.take(id) {
            Ok(task) => {
                info!("Took task {} for editing", id);
                Ok(Some(task))
            }
            Err(Error::TaskNotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn take(&mut self, id: &str) -> Result<Task> {
        let index = self.position(id)?;
        let mut next = self.tasks.clone();
        let task = next.remove(index);
        self.commit(next)?;
        Ok(task)
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.tasks
            .iter()
            .position(|t| t.id() == id)
            .ok_or_else(|| Error::TaskNotFound(id.to_string()))
    }

    /// Persist `next`, then make it the live collection
    fn commit(&mut self, next: Vec<Task>) -> Result<()> {
        self.persistence.save(&next)?;
        self.tasks = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::schedule::FixedClock;
    use crate::storage::{BlobSlot, FileSlot, MemorySlot, STORAGE_KEY};
    use chrono::{Duration, NaiveDate};
    use std::collections::HashSet;
    use tempfile::TempDir;

    fn test_clock() -> Rc<FixedClock> {
        let now = NaiveDate::from_ymd_opt(2024, 6, 10)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        Rc::new(FixedClock::at(now))
    }

    fn create_test_store() -> (TaskStore, MemorySlot) {
        let slot = MemorySlot::new();
        let store = TaskStore::open(TaskPersistence::new(slot.clone()), test_clock());
        (store, slot)
    }

    fn stored(slot: &MemorySlot) -> Vec<Task> {
        TaskPersistence::new(slot.clone()).load().unwrap()
    }

    /// Slot whose writes always fail
    struct ReadOnlySlot;

    impl BlobSlot for ReadOnlySlot {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _blob: &str) -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
        }

        fn clear(&mut self, _key: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_add_task() {
        let (mut store, slot) = create_test_store();

        let task = store.add("  Buy milk  ", "2024-01-01").unwrap();
        assert_eq!(task.text(), "Buy milk");
        assert_eq!(task.date(), Some("2024-01-01"));
        assert!(!task.is_done());

        assert_eq!(store.len(), 1);
        assert_eq!(stored(&slot), vec![task]);
    }

    #[test]
    fn test_add_validation() {
        let (mut store, slot) = create_test_store();

        match store.add("", "2024-01-01").unwrap_err() {
            Error::Validation(ValidationError::EmptyText) => {}
            e => panic!("Expected EmptyText, got: {:?}", e),
        }
        match store.add("Buy milk", "").unwrap_err() {
            Error::Validation(ValidationError::MissingDate) => {}
            e => panic!("Expected MissingDate, got: {:?}", e),
        }

        assert!(store.is_empty());
        assert_eq!(slot.raw(STORAGE_KEY), None);
    }

    #[test]
    fn test_ids_stay_unique() {
        let (mut store, _slot) = create_test_store();
        for i in 0..50 {
            store.add(&format!("Task {i}"), "2024-06-10").unwrap();
        }

        let ids: HashSet<&str> = store.tasks().iter().map(Task::id).collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_created_at_is_non_decreasing() {
        let clock = test_clock();
        let mut store = TaskStore::open(TaskPersistence::new(MemorySlot::new()), clock.clone());

        let first = store.add("first", "2024-06-10").unwrap();
        clock.advance(Duration::hours(-3));
        let second = store.add("second", "2024-06-10").unwrap();
        clock.advance(Duration::hours(5));
        let third = store.add("third", "2024-06-10").unwrap();

        assert_eq!(second.created_at(), first.created_at());
        assert!(third.created_at() > second.created_at());
    }

    #[test]
    fn test_toggle_done() {
        let (mut store, slot) = create_test_store();
        let task = store.add("Walk dog", "2024-06-11").unwrap();

        let toggled = store.toggle_done(task.id()).unwrap();
        assert!(toggled.is_done());
        assert!(stored(&slot)[0].is_done());

        let toggled = store.toggle_done(task.id()).unwrap();
        assert!(!toggled.is_done());
        assert!(!stored(&slot)[0].is_done());
    }

    #[test]
    fn test_missing_id_leaves_collection_unchanged() {
        let (mut store, slot) = create_test_store();
        store.add("Keep me", "2024-06-11").unwrap();
        let before = store.tasks().to_vec();

        assert!(store.toggle_done("nonexistent").unwrap_err().is_not_found());
        assert!(store.remove("nonexistent").unwrap_err().is_not_found());
        assert_eq!(store.take_for_edit("nonexistent").unwrap(), None);

        assert_eq!(store.tasks(), before.as_slice());
        assert_eq!(stored(&slot), before);
    }

    #[test]
    fn test_remove() {
        let (mut store, slot) = create_test_store();
        let a = store.add("A", "2024-06-11").unwrap();
        let b = store.add("B", "2024-06-12").unwrap();

        store.remove(a.id()).unwrap();
        assert!(store.get(a.id()).is_none());
        assert_eq!(stored(&slot), vec![b]);
    }

    #[test]
    fn test_clear() {
        let (mut store, slot) = create_test_store();
        store.add("A", "2024-06-11").unwrap();
        store.add("B", "2024-06-12").unwrap();

        store.clear().unwrap();
        assert!(store.is_empty());
        assert!(stored(&slot).is_empty());

        // Clearing an empty store is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_take_for_edit() {
        let (mut store, slot) = create_test_store();
        let task = store.add("Draft report", "2024-06-14").unwrap();

        let taken = store.take_for_edit(task.id()).unwrap().unwrap();
        assert_eq!(taken.text(), "Draft report");
        assert_eq!(taken.date(), Some("2024-06-14"));
        assert!(store.is_empty());
        assert!(stored(&slot).is_empty());

        // Re-entering produces a brand new task
        let readded = store.add(taken.text(), taken.date().unwrap()).unwrap();
        assert_ne!(readded.id(), task.id());
    }

    #[test]
    fn test_corrupt_data_starts_empty() {
        let slot = MemorySlot::with_blob(STORAGE_KEY, "[{ definitely not json");
        let mut store = TaskStore::open(TaskPersistence::new(slot.clone()), test_clock());
        assert!(store.is_empty());

        // The next write replaces the corrupt blob
        store.add("Fresh start", "2024-06-10").unwrap();
        assert_eq!(stored(&slot).len(), 1);
    }

    #[test]
    fn test_failed_write_keeps_memory_and_disk_in_step() {
        let mut store = TaskStore::open(TaskPersistence::new(ReadOnlySlot), test_clock());

        match store.add("Never stored", "2024-06-10").unwrap_err() {
            Error::Io(_) => {}
            e => panic!("Expected Io error, got: {:?}", e),
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_persistence_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let task_id;

        {
            let mut store =
                TaskStore::open(TaskPersistence::new(FileSlot::new(temp_dir.path())), test_clock());
            let task = store.add("Persistent task", "2024-06-20").unwrap();
            store.toggle_done(task.id()).unwrap();
            task_id = task.id().to_string();
        }

        {
            let store =
                TaskStore::open(TaskPersistence::new(FileSlot::new(temp_dir.path())), test_clock());
            let task = store.get(&task_id).unwrap();
            assert_eq!(task.text(), "Persistent task");
            assert!(task.is_done());
        }
    }
}
