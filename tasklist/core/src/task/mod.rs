use chrono::{DateTime, Local, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

mod stats;

pub use stats::{ProgressTier, Stats};

/// Opaque identifier of a task. Newly created ids are UUID v4 strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        TaskId(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        TaskId(value.to_string())
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        TaskId(value)
    }
}

/// A single to-do item.
///
/// `id` and `created_at` are fixed at creation; only `text` and `completed`
/// change afterwards, and only through [`TaskList`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    text: String,
    completed: bool,
    #[serde(with = "timestamp")]
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a pending task stamped with the current time.
    ///
    /// The caller is responsible for passing non-empty, trimmed text.
    fn new(text: String) -> Self {
        Task {
            id: TaskId::generate(),
            text,
            completed: false,
            created_at: Utc::now().trunc_subsecs(3),
        }
    }

    /// Rebuilds a task from already known parts, e.g. when restoring state.
    pub fn from_parts(
        id: TaskId,
        text: impl Into<String>,
        completed: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Task {
            id,
            text: text.into(),
            completed,
            created_at,
        }
    }

    pub fn id(&self) -> &TaskId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Human readable creation stamp in local time, e.g. `Created 3/14/2025 • 09:26`.
    pub fn created_label(&self) -> String {
        self.created_at
            .with_timezone(&Local)
            .format("Created %-m/%-d/%Y • %H:%M")
            .to_string()
    }
}

/// Ordered collection of tasks, newest first.
///
/// Ids are unique within a list. Mutations that do not apply (blank text,
/// unknown id, unchanged text) leave the list untouched and report `false`
/// or `None` so callers can skip persisting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from restored tasks, keeping their order.
    ///
    /// Tasks with blank text and tasks repeating an earlier id are dropped.
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();
        for task in tasks {
            if task.text.trim().is_empty() {
                tracing::warn!(id = %task.id, "dropping task with empty text");
                continue;
            }
            if !seen.insert(task.id.clone()) {
                tracing::warn!(id = %task.id, "dropping task with duplicate id");
                continue;
            }
            kept.push(task);
        }
        TaskList { tasks: kept }
    }

    /// Adds a new pending task at the front of the list.
    ///
    /// Returns the new id, or `None` if `text` is blank.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let task = Task::new(text.to_string());
        let id = task.id.clone();
        self.tasks.insert(0, task);
        tracing::debug!(%id, "task added");
        Some(id)
    }

    /// Flips the completion flag of the task with `id`.
    pub fn toggle(&mut self, id: &TaskId) -> bool {
        match self.get_mut(id) {
            Some(task) => {
                task.completed = !task.completed;
                tracing::debug!(%id, completed = task.completed, "task toggled");
                true
            }
            None => false,
        }
    }

    /// Replaces the text of the task with `id`.
    ///
    /// Applies only when the trimmed text is non-empty and differs from the
    /// current text.
    pub fn edit(&mut self, id: &TaskId, new_text: &str) -> bool {
        let new_text = new_text.trim();
        if new_text.is_empty() {
            return false;
        }
        match self.get_mut(id) {
            Some(task) if task.text != new_text => {
                task.text = new_text.to_string();
                tracing::debug!(%id, "task edited");
                true
            }
            _ => false,
        }
    }

    /// Removes the task with `id`.
    pub fn delete(&mut self, id: &TaskId) -> bool {
        match self.tasks.iter().position(|task| &task.id == id) {
            Some(index) => {
                self.tasks.remove(index);
                tracing::debug!(%id, "task deleted");
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    fn get_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| &task.id == id)
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

    /// Tasks not yet completed, in list order.
    pub fn pending(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|task| !task.completed)
    }

    /// Completed tasks, in list order.
    pub fn completed(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|task| task.completed)
    }

    pub fn stats(&self) -> Stats {
        Stats::new(self.len(), self.completed().count())
    }
}

/// RFC 3339 timestamps with millisecond precision and a `Z` suffix, which
/// sort lexically in time order.
mod timestamp {
    use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    /// Sub-millisecond digits are dropped so a loaded value saves back unchanged.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| parsed.with_timezone(&Utc).trunc_subsecs(3))
            .map_err(serde::de::Error::custom)
    }
}
