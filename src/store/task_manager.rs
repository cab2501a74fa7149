use std::path::Path;

use tracing::{debug, info};

use crate::error::TasktunesError;
use crate::models::Task;

use super::json_file;

/// Ordered task list. Insertion order is the order tasks are shown and numbered in.
#[derive(Debug, Default)]
pub struct TaskManager {
    tasks: Vec<Task>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a manager from the file at `path`, empty if the file does not exist.
    pub fn open(path: &Path) -> Result<Self, TasktunesError> {
        let mut manager = Self::new();
        manager.load(path)?;
        Ok(manager)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn add(&mut self, task: Task) {
        info!(title = %task.title, priority = %task.priority, "task added");
        self.tasks.push(task);
    }

    /// Tasks paired with their 1-based number in the full list.
    ///
    /// `None` yields every task; `Some(done)` only tasks whose `completed` equals `done`.
    pub fn list(&self, filter: Option<bool>) -> impl Iterator<Item = (usize, &Task)> + '_ {
        self.tasks
            .iter()
            .enumerate()
            .filter(move |(_, t)| filter.map_or(true, |done| t.completed == done))
            .map(|(i, t)| (i + 1, t))
    }

    /// Mark the task at 0-based `index` complete. Returns false, changing nothing,
    /// when the index is out of range.
    pub fn complete(&mut self, index: usize) -> bool {
        match self.tasks.get_mut(index) {
            Some(task) => {
                task.mark_complete();
                info!(index, title = %task.title, "task completed");
                true
            }
            None => {
                debug!(index, len = self.tasks.len(), "complete ignored, index out of range");
                false
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), TasktunesError> {
        json_file::write_records(path, &self.tasks)?;
        debug!(path = %path.display(), count = self.tasks.len(), "tasks saved");
        Ok(())
    }

    /// Replace the in-memory list with the file contents. A missing file resets to empty;
    /// on any error the current list is left untouched.
    pub fn load(&mut self, path: &Path) -> Result<(), TasktunesError> {
        let Some(records) = json_file::read_records(path)? else {
            debug!(path = %path.display(), "no task file, starting empty");
            self.tasks.clear();
            return Ok(());
        };
        let tasks = records
            .iter()
            .map(Task::from_json)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| TasktunesError::malformed(path, &e))?;
        debug!(path = %path.display(), count = tasks.len(), "tasks loaded");
        self.tasks = tasks;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::fs;

    fn sample() -> TaskManager {
        let mut m = TaskManager::new();
        m.add(Task::new("first", "High", None));
        m.add(Task::new("second", "Low", Some("2025-01-01".into())));
        m.add(Task::new("third", "Medium", None));
        m.add(Task::new("fourth", "Low", None));
        m
    }

    fn titles<'a>(entries: impl Iterator<Item = (usize, &'a Task)>) -> Vec<(usize, String)> {
        entries.map(|(n, t)| (n, t.title.clone())).collect()
    }

    #[test]
    fn test_list_all_is_one_based() {
        let m = sample();
        let all = titles(m.list(None));
        assert_eq!(all.len(), 4);
        assert_eq!(all[0], (1, "first".to_string()));
        assert_eq!(all[3], (4, "fourth".to_string()));
    }

    #[test]
    fn test_list_filter_keeps_order_and_numbers() {
        let mut m = sample();
        assert!(m.complete(3));
        assert!(m.complete(1));

        let done = titles(m.list(Some(true)));
        assert_eq!(done, vec![(2, "second".to_string()), (4, "fourth".to_string())]);

        let pending = titles(m.list(Some(false)));
        assert_eq!(pending, vec![(1, "first".to_string()), (3, "third".to_string())]);
    }

    #[test]
    fn test_complete_is_idempotent() {
        let mut m = sample();
        assert!(m.complete(0));
        assert!(m.tasks()[0].completed);
        assert!(m.complete(0));
        assert!(m.tasks()[0].completed);
    }

    #[test]
    fn test_complete_out_of_range_is_noop() {
        let mut m = sample();
        assert!(!m.complete(4));
        assert!(!m.complete(usize::MAX));
        assert!(m.tasks().iter().all(|t| !t.completed));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut m = sample();
        m.load(&dir.path().join("tasks.json")).unwrap();
        assert!(m.is_empty());
    }

    #[test]
    fn test_buy_milk_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        let mut m = TaskManager::open(&path).unwrap();
        assert!(m.is_empty());

        m.add(Task::new("Buy milk", "Low", None));
        m.save(&path).unwrap();

        let saved: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let arr = saved.as_array().unwrap();
        assert_eq!(arr.len(), 1);
        assert_eq!(arr[0]["title"], "Buy milk");
        assert_eq!(arr[0]["priority"], "Low");
        assert!(arr[0]["due_date"].is_null());
        assert_eq!(arr[0]["completed"], false);
    }

    #[test]
    fn test_save_keeps_field_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        let mut m = TaskManager::new();
        m.add(Task::new("Buy milk", "Low", None));
        m.save(&path).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "[\n    {\n        \"title\": \"Buy milk\",\n        \"priority\": \"Low\",\n        \"due_date\": null,\n        \"completed\": false\n    }\n]"
        );
    }

    #[test]
    fn test_save_load_save_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.json");
        let second = dir.path().join("b.json");

        let mut m = sample();
        m.complete(2);
        m.save(&first).unwrap();

        let reloaded = TaskManager::open(&first).unwrap();
        assert_eq!(reloaded.tasks(), m.tasks());
        reloaded.save(&second).unwrap();

        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    }

    #[test]
    fn test_load_missing_field_keeps_current_tasks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(&path, r#"[{"title": "x", "priority": "Low", "due_date": null}]"#).unwrap();

        let mut m = sample();
        let err = m.load(&path).unwrap_err();
        assert_eq!(err.code, ErrorCode::MalformedData);
        assert!(err.message.contains("completed"), "{}", err.message);
        assert_eq!(m.len(), 4);
    }
}
