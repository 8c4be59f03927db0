//! Shared technician-task store
//!
//! The side channel between the customer-issues view (producer) and the
//! technician-tasks view (consumer). Reads and writes go through one storage
//! key; there is no locking and the last writer wins, which is acceptable for
//! a single-operator console.

use super::task::TechTask;
use crate::storage::Storage;
use anyhow::Result;

pub const TASKS_STORAGE_KEY: &str = "technician_tasks";

pub struct TaskStore {
    storage: Box<dyn Storage>,
}

impl TaskStore {
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Missing or unreadable state loads as an empty board.
    pub fn load(&self) -> Vec<TechTask> {
        self.storage
            .get(TASKS_STORAGE_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    pub fn save(&mut self, tasks: &[TechTask]) -> Result<()> {
        let raw = serde_json::to_string_pretty(tasks)?;
        self.storage.set(TASKS_STORAGE_KEY, &raw)?;
        Ok(())
    }

    /// Read-modify-write append.
    pub fn push(&mut self, task: TechTask) -> Result<()> {
        let mut tasks = self.load();
        tasks.push(task);
        self.save(&tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::TaskStatus;
    use crate::model::Priority;
    use crate::storage::MemoryStorage;
    use chrono::NaiveDate;

    fn task(id: &str) -> TechTask {
        TechTask {
            id: id.to_string(),
            technician: "Jane Smith".to_string(),
            description: "Repair faulty connection".to_string(),
            priority: Priority::Medium,
            status: TaskStatus::Pending,
            due_date: NaiveDate::from_ymd_opt(2023, 6, 16).unwrap(),
        }
    }

    #[test]
    fn test_push_then_load_roundtrip() {
        let mut store = TaskStore::new(Box::new(MemoryStorage::new()));
        assert!(store.load().is_empty());

        store.push(task("1")).unwrap();
        store.push(task("2")).unwrap();

        let tasks = store.load();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].id, "2");
    }

    #[test]
    fn test_save_replaces_the_whole_board() {
        let mut store = TaskStore::new(Box::new(MemoryStorage::new()));
        store.push(task("1")).unwrap();
        store.push(task("2")).unwrap();

        store.save(&[task("9")]).unwrap();
        let tasks = store.load();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, "9");
    }

    #[test]
    fn test_unreadable_state_loads_empty() {
        let mut storage = MemoryStorage::new();
        storage.set(TASKS_STORAGE_KEY, "{broken").unwrap();
        let store = TaskStore::new(Box::new(storage));
        assert!(store.load().is_empty());
    }
}
