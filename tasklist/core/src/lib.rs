//! Core domain models and persistence for Tasklist.
pub mod storage;
pub mod store;
pub mod task;
pub mod theme;

pub use storage::{KeyValueStore, MemoryStore, Persistence, PersistenceError, StorageError};
pub use store::TaskStore;
pub use task::{ProgressTier, Stats, Task, TaskId, TaskList};
pub use theme::DisplayMode;
