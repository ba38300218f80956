//! Client-side application state for Tasklist.
//!
//! The task store lives in a single signal provided at the root of the app.
//! Components reach it through [`use_task_store`]; every mutation goes through
//! the store, which writes the change to `localStorage` before returning.

use crate::settings::AppConfig;
use crate::storage::BrowserStorage;
use dioxus::prelude::*;
use tasklist_core::{DisplayMode, Persistence, Stats, TaskId, TaskList, TaskStore};

/// Handle to the shared task store.
#[derive(Copy, Clone)]
pub struct UseTaskStore {
    inner: Signal<TaskStore<BrowserStorage>>,
}

impl UseTaskStore {
    /// Snapshot of the current task list.
    pub fn tasks(&self) -> TaskList {
        self.inner.read().tasks().clone()
    }

    pub fn stats(&self) -> Stats {
        self.inner.read().stats()
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.inner.read().display_mode()
    }

    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        self.inner.write().add(text)
    }

    pub fn toggle(&mut self, id: &TaskId) -> bool {
        self.inner.write().toggle(id)
    }

    pub fn edit(&mut self, id: &TaskId, new_text: &str) -> bool {
        self.inner.write().edit(id, new_text)
    }

    pub fn delete(&mut self, id: &TaskId) -> bool {
        self.inner.write().delete(id)
    }

    pub fn toggle_display_mode(&mut self) -> DisplayMode {
        self.inner.write().toggle_display_mode()
    }
}

/// Opens the store from `localStorage` and makes it available to descendants.
///
/// Call once, from the root component.
pub fn use_task_store_provider(config: &AppConfig) -> UseTaskStore {
    let keys = config.storage_keys();
    use_context_provider(move || UseTaskStore {
        inner: Signal::new(TaskStore::open(Persistence::with_keys(BrowserStorage, keys))),
    })
}

/// Convenience hook for accessing the task store provided by the root.
pub fn use_task_store() -> UseTaskStore {
    use_context::<UseTaskStore>()
}

/// Convenience hook for the application configuration provided by the root.
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>()
}
