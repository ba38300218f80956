use super::{KeyValueStore, StorageError};
use crate::task::{Task, TaskList};
use crate::theme::DisplayMode;
use thiserror::Error;

pub const DEFAULT_TASKS_KEY: &str = "todos";
pub const DEFAULT_DISPLAY_MODE_KEY: &str = "theme";

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Failed to encode state: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Storage keys used by [`Persistence`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub tasks: String,
    pub display_mode: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        StorageKeys {
            tasks: DEFAULT_TASKS_KEY.to_string(),
            display_mode: DEFAULT_DISPLAY_MODE_KEY.to_string(),
        }
    }
}

/// Loads and saves application state against a [`KeyValueStore`].
///
/// Loading never fails: missing or corrupt data yields an empty task list
/// and the light display mode. Saving always rewrites the whole value.
#[derive(Debug)]
pub struct Persistence<S> {
    backend: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(backend: S) -> Self {
        Self::with_keys(backend, StorageKeys::default())
    }

    pub fn with_keys(backend: S, keys: StorageKeys) -> Self {
        Persistence { backend, keys }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Restores the task list.
    ///
    /// Records that fail to parse, carry a corrupt timestamp, have blank
    /// text or repeat an earlier id are skipped; the rest keep their order.
    pub fn load_tasks(&self) -> TaskList {
        let raw = match self.backend.get_item(&self.keys.tasks) {
            Ok(Some(raw)) => raw,
            Ok(None) => return TaskList::new(),
            Err(e) => {
                tracing::warn!(key = %self.keys.tasks, error = %e, "failed to read tasks, starting empty");
                return TaskList::new();
            }
        };
        let list = decode_tasks(&raw);
        tracing::debug!(count = list.len(), "tasks loaded");
        list
    }

    pub fn save_tasks(&mut self, tasks: &TaskList) -> Result<(), PersistenceError> {
        let encoded = serde_json::to_string(tasks.tasks())?;
        self.backend.set_item(&self.keys.tasks, &encoded)?;
        tracing::trace!(count = tasks.len(), "tasks saved");
        Ok(())
    }

    /// Restores the display mode, defaulting to light.
    pub fn load_display_mode(&self) -> DisplayMode {
        match self.backend.get_item(&self.keys.display_mode) {
            Ok(Some(raw)) => decode_display_mode(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "unrecognized display mode, using light");
                DisplayMode::default()
            }),
            Ok(None) => DisplayMode::default(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read display mode, using light");
                DisplayMode::default()
            }
        }
    }

    pub fn save_display_mode(&mut self, mode: DisplayMode) -> Result<(), PersistenceError> {
        let encoded = serde_json::to_string(&mode)?;
        self.backend.set_item(&self.keys.display_mode, &encoded)?;
        Ok(())
    }
}

fn decode_tasks(raw: &str) -> TaskList {
    let records: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(error = %e, "stored tasks are malformed, starting empty");
            return TaskList::new();
        }
    };
    let tasks = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Task>(record) {
            Ok(task) => Some(task),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping malformed task record");
                None
            }
        });
    TaskList::from_tasks(tasks)
}

fn decode_display_mode(raw: &str) -> Option<DisplayMode> {
    serde_json::from_str::<DisplayMode>(raw)
        .ok()
        .or_else(|| DisplayMode::from_literal(raw.trim().trim_matches('"')))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, MockKeyValueStore};
    use crate::task::TaskId;
    use chrono::{TimeZone, Utc};

    fn sample_list() -> TaskList {
        TaskList::from_tasks(vec![
            Task::from_parts(
                TaskId::from("b"),
                "Walk dog",
                true,
                Utc.with_ymd_and_hms(2025, 2, 1, 18, 30, 5).unwrap(),
            ),
            Task::from_parts(
                TaskId::from("a"),
                "Buy milk",
                false,
                Utc.with_ymd_and_hms(2025, 1, 31, 9, 15, 0).unwrap(),
            ),
        ])
    }

    #[test]
    fn save_then_load_restores_tasks_in_order() {
        // Arrange
        let mut persistence = Persistence::new(MemoryStore::new());
        let list = sample_list();

        // Act
        persistence.save_tasks(&list).unwrap();
        let restored = persistence.load_tasks();

        // Assert
        assert_eq!(restored, list);
    }

    #[test]
    fn saved_tasks_use_documented_layout() {
        let mut persistence = Persistence::new(MemoryStore::new());

        persistence.save_tasks(&sample_list()).unwrap();

        let raw = persistence.backend().get_item("todos").unwrap().unwrap();
        assert_eq!(
            raw,
            concat!(
                r#"[{"id":"b","text":"Walk dog","completed":true,"createdAt":"2025-02-01T18:30:05.000Z"},"#,
                r#"{"id":"a","text":"Buy milk","completed":false,"createdAt":"2025-01-31T09:15:00.000Z"}]"#
            )
        );
    }

    #[test]
    fn missing_key_loads_empty_list() {
        let persistence = Persistence::new(MemoryStore::new());

        assert!(persistence.load_tasks().is_empty());
    }

    #[test]
    fn malformed_payload_loads_empty_list() {
        for raw in ["not json", "{\"id\":\"a\"}", "[1, 2", "null", ""] {
            let persistence = Persistence::new(MemoryStore::with_item("todos", raw));

            assert!(persistence.load_tasks().is_empty(), "payload {raw:?}");
        }
    }

    #[test]
    fn invalid_records_are_skipped() {
        // Arrange
        let raw = r#"[
            {"id":"1","text":"good","completed":false,"createdAt":"2025-01-31T09:15:00.000Z"},
            {"id":"2","text":"bad time","completed":false,"createdAt":"not a date"},
            {"id":"3","completed":false,"createdAt":"2025-01-31T09:15:00.000Z"},
            {"id":"4","text":"   ","completed":false,"createdAt":"2025-01-31T09:15:00.000Z"},
            {"id":"1","text":"dupe","completed":true,"createdAt":"2025-01-31T09:15:00.000Z"},
            42,
            {"id":"5","text":"also good","completed":true,"createdAt":"2025-01-30T08:00:00Z"}
        ]"#;
        let persistence = Persistence::new(MemoryStore::with_item("todos", raw));

        // Act
        let list = persistence.load_tasks();

        // Assert
        let ids: Vec<&str> = list.tasks().iter().map(|t| t.id().as_str()).collect();
        assert_eq!(ids, vec!["1", "5"]);
    }

    #[test]
    fn read_failure_loads_empty_list() {
        let mut backend = MockKeyValueStore::new();
        backend
            .expect_get_item()
            .times(1)
            .returning(|_| Err(StorageError::Unavailable));
        let persistence = Persistence::new(backend);

        assert!(persistence.load_tasks().is_empty());
    }

    #[test]
    fn write_failure_is_reported() {
        let mut backend = MockKeyValueStore::new();
        backend
            .expect_set_item()
            .times(1)
            .returning(|_, _| Err(StorageError::Backend("quota exceeded".to_string())));
        let mut persistence = Persistence::new(backend);

        let result = persistence.save_tasks(&sample_list());

        assert!(matches!(
            result,
            Err(PersistenceError::Storage(StorageError::Backend(_)))
        ));
    }

    #[test]
    fn custom_keys_are_respected() {
        let keys = StorageKeys {
            tasks: "my_tasks".to_string(),
            display_mode: "my_theme".to_string(),
        };
        let mut persistence = Persistence::with_keys(MemoryStore::new(), keys);

        persistence.save_tasks(&sample_list()).unwrap();
        persistence.save_display_mode(DisplayMode::Dark).unwrap();

        assert!(persistence.backend().get_item("my_tasks").unwrap().is_some());
        assert_eq!(
            persistence.backend().get_item("my_theme").unwrap(),
            Some("\"dark\"".to_string())
        );
        assert_eq!(persistence.backend().get_item("todos").unwrap(), None);
    }

    #[test]
    fn display_mode_defaults_to_light() {
        let persistence = Persistence::new(MemoryStore::new());

        assert_eq!(persistence.load_display_mode(), DisplayMode::Light);
    }

    #[test]
    fn display_mode_round_trips() {
        let mut persistence = Persistence::new(MemoryStore::new());

        persistence.save_display_mode(DisplayMode::Dark).unwrap();

        assert_eq!(persistence.load_display_mode(), DisplayMode::Dark);
    }

    #[test]
    fn display_mode_accepts_bare_literal_and_rejects_garbage() {
        let bare = Persistence::new(MemoryStore::with_item("theme", "dark"));
        let garbage = Persistence::new(MemoryStore::with_item("theme", "\"sepia\""));

        assert_eq!(bare.load_display_mode(), DisplayMode::Dark);
        assert_eq!(garbage.load_display_mode(), DisplayMode::Light);
    }
}
