//! Single-owner store tying the task list to its persistence.
use crate::storage::{KeyValueStore, Persistence};
use crate::task::{Stats, TaskId, TaskList};
use crate::theme::DisplayMode;

/// Owns the task list and display mode and writes every change through to
/// storage.
///
/// A failed write is logged and the in-memory change is kept, so the
/// application stays usable when storage is full or unavailable.
#[derive(Debug)]
pub struct TaskStore<S> {
    tasks: TaskList,
    display_mode: DisplayMode,
    persistence: Persistence<S>,
}

impl<S: KeyValueStore> TaskStore<S> {
    /// Opens the store, loading any previously saved state.
    pub fn open(persistence: Persistence<S>) -> Self {
        let tasks = persistence.load_tasks();
        let display_mode = persistence.load_display_mode();
        tracing::info!(tasks = tasks.len(), %display_mode, "task store opened");
        TaskStore {
            tasks,
            display_mode,
            persistence,
        }
    }

    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let id = self.tasks.add(text)?;
        self.persist_tasks();
        Some(id)
    }

    pub fn toggle(&mut self, id: &TaskId) -> bool {
        if !self.tasks.toggle(id) {
            return false;
        }
        self.persist_tasks();
        true
    }

    pub fn edit(&mut self, id: &TaskId, new_text: &str) -> bool {
        if !self.tasks.edit(id, new_text) {
            return false;
        }
        self.persist_tasks();
        true
    }

    pub fn delete(&mut self, id: &TaskId) -> bool {
        if !self.tasks.delete(id) {
            return false;
        }
        self.persist_tasks();
        true
    }

    pub fn toggle_display_mode(&mut self) -> DisplayMode {
        self.set_display_mode(self.display_mode.toggled());
        self.display_mode
    }

    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.display_mode = mode;
        if let Err(e) = self.persistence.save_display_mode(mode) {
            tracing::warn!(error = %e, "failed to persist display mode");
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn stats(&self) -> Stats {
        self.tasks.stats()
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    fn persist_tasks(&mut self) {
        if let Err(e) = self.persistence.save_tasks(&self.tasks) {
            tracing::warn!(error = %e, "failed to persist tasks");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStore, MemoryStore, MockKeyValueStore, StorageError};

    fn open_empty() -> TaskStore<MemoryStore> {
        TaskStore::open(Persistence::new(MemoryStore::new()))
    }

    fn stored_tasks(store: &TaskStore<MemoryStore>) -> TaskList {
        Persistence::new(store.persistence().backend().clone()).load_tasks()
    }

    #[test]
    fn every_mutation_is_written_through() {
        let mut store = open_empty();

        let id = store.add("Buy milk").unwrap();
        assert_eq!(&stored_tasks(&store), store.tasks());

        store.toggle(&id);
        assert!(stored_tasks(&store).get(&id).unwrap().is_completed());

        store.edit(&id, "Buy oat milk");
        assert_eq!(stored_tasks(&store).get(&id).unwrap().text(), "Buy oat milk");

        store.delete(&id);
        assert!(stored_tasks(&store).is_empty());
    }

    #[test]
    fn rejected_mutations_do_not_write() {
        let mut store = open_empty();

        assert_eq!(store.add("   "), None);
        assert!(!store.toggle(&TaskId::from("missing")));
        assert!(!store.delete(&TaskId::from("missing")));

        assert!(store.persistence().backend().is_empty());
    }

    #[test]
    fn rejected_edits_do_not_write() {
        // Arrange
        let mut store = open_empty();
        let id = store.add("a").unwrap();
        let before = store.persistence().backend().clone();

        // Act
        let padded = store.edit(&id, " a ");
        let blank = store.edit(&id, "   ");

        // Assert
        assert!(!padded);
        assert!(!blank);
        assert_eq!(store.persistence().backend(), &before);
    }

    #[test]
    fn delete_after_toggle_still_removes_task() {
        let mut store = open_empty();
        let id = store.add("fading").unwrap();

        store.toggle(&id);
        assert!(store.delete(&id));

        assert!(store.tasks().is_empty());
        assert!(stored_tasks(&store).is_empty());
    }

    #[test]
    fn reopening_restores_state() {
        // Arrange
        let mut store = open_empty();
        store.add("A");
        let b = store.add("B").unwrap();
        store.toggle(&b);
        store.toggle_display_mode();
        let backend = store.persistence().backend().clone();

        // Act
        let reopened = TaskStore::open(Persistence::new(backend));

        // Assert
        assert_eq!(reopened.tasks(), store.tasks());
        assert_eq!(reopened.display_mode(), DisplayMode::Dark);
        assert_eq!(reopened.stats(), Stats::new(2, 1));
    }

    #[test]
    fn toggle_display_mode_persists() {
        let mut store = open_empty();

        assert_eq!(store.toggle_display_mode(), DisplayMode::Dark);
        assert_eq!(
            store.persistence().backend().get_item("theme").unwrap(),
            Some("\"dark\"".to_string())
        );

        assert_eq!(store.toggle_display_mode(), DisplayMode::Light);
        assert_eq!(store.persistence().load_display_mode(), DisplayMode::Light);
    }

    #[test]
    fn write_failure_keeps_in_memory_change() {
        // Arrange
        let mut backend = MockKeyValueStore::new();
        backend.expect_get_item().returning(|_| Ok(None));
        backend
            .expect_set_item()
            .returning(|_, _| Err(StorageError::Unavailable));
        let mut store = TaskStore::open(Persistence::new(backend));

        // Act
        let id = store.add("Still here");

        // Assert
        assert!(id.is_some());
        assert_eq!(store.tasks().len(), 1);
    }
}
