//! Task list management for tick.
//!
//! The task list is an ordered, in-memory collection persisted as a single
//! JSON snapshot (see `storage`). All list operations are synchronous and
//! infallible; invalid input (empty name, unknown id) is a no-op.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::Storage;

/// Identifier for a task, unique among currently-held tasks.
pub type TaskId = u64;

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub completed: bool,
}

/// Completion-status projection over the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskFilter {
    All,
    Active,
    Completed,
}

impl TaskFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskFilter::All => "all",
            TaskFilter::Active => "active",
            TaskFilter::Completed => "completed",
        }
    }

    /// Whether a task belongs to this view.
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Active => !task.completed,
            TaskFilter::Completed => task.completed,
        }
    }
}

impl std::str::FromStr for TaskFilter {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(TaskFilter::All),
            "active" => Ok(TaskFilter::Active),
            "completed" => Ok(TaskFilter::Completed),
            _ => Err(crate::error::Error::InvalidArgument(format!(
                "invalid view '{}': must be all, active, or completed",
                s
            ))),
        }
    }
}

/// The ordered task collection, insertion order preserved.
///
/// Ids come from a monotonically increasing counter seeded with
/// `max(id) + 1` at load, so an id is never reused while its task exists.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl TaskList {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuild a list from deserialized tasks, reseeding the id counter.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks
            .iter()
            .map(|task| task.id)
            .max()
            .unwrap_or(0)
            .saturating_add(1);
        Self { tasks, next_id }
    }

    /// Id the next added task will receive.
    pub fn next_id(&self) -> TaskId {
        self.next_id
    }

    /// Raise the id counter so ids stay monotonic across reloads even when
    /// the highest-id task was removed.
    pub fn ensure_next_id(&mut self, at_least: TaskId) {
        if at_least > self.next_id {
            self.next_id = at_least;
        }
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

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Append a new, uncompleted task. Returns `None` without changing the
    /// list when the trimmed name is empty.
    pub fn add(&mut self, name: &str) -> Option<&Task> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let task = Task {
            id: self.next_id,
            name: name.to_string(),
            completed: false,
        };
        self.next_id = self.next_id.saturating_add(1);
        self.tasks.push(task);
        self.tasks.last()
    }

    /// Flip the completion flag of the matching task. Returns `false` if no
    /// task matches.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Delete the matching task, preserving the order of the rest. Returns
    /// `false` if no task matches.
    pub fn remove(&mut self, id: TaskId) -> bool {
        match self.tasks.iter().position(|task| task.id == id) {
            Some(idx) => {
                self.tasks.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Overwrite the name of the matching task; id and completion flag are
    /// untouched. Returns `false` on an empty trimmed name or unknown id.
    pub fn rename(&mut self, id: TaskId, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.name = name.to_string();
                true
            }
            None => false,
        }
    }

    /// Order-preserving projection by completion status, computed on demand.
    pub fn view(&self, filter: TaskFilter) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| filter.matches(task))
            .collect()
    }
}

/// Explicit editing-mode state owned by the presentation layer.
///
/// Tracks which task is under edit and the pending input text, so the list
/// itself stays free of UI state.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    editing: Option<TaskId>,
    pending: String,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn editing(&self) -> Option<TaskId> {
        self.editing
    }

    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Enter editing mode for a task, seeding the pending input with its
    /// current name. Does not mutate the list.
    pub fn begin(&mut self, id: TaskId, current_name: &str) {
        self.editing = Some(id);
        self.pending = current_name.to_string();
    }

    pub fn set_pending(&mut self, text: impl Into<String>) {
        self.pending = text.into();
    }

    /// Apply the pending name to the task under edit, then leave editing
    /// mode and clear the input. No-op (session kept) when not editing, the
    /// pending name trims to empty, or the task is gone.
    pub fn save(&mut self, list: &mut TaskList) -> Option<TaskId> {
        let id = self.editing?;
        if !list.rename(id, &self.pending) {
            return None;
        }
        self.editing = None;
        self.pending.clear();
        Some(id)
    }
}

/// Storage-coupled task store: loads the snapshot at open and rewrites it
/// after every mutation that changes the collection, including transitions
/// to the empty list.
#[derive(Debug)]
pub struct TaskStore {
    storage: Storage,
    list: TaskList,
}

impl TaskStore {
    /// Open the store, loading the persisted snapshot. A missing snapshot
    /// means an empty list; a malformed one is an error.
    pub fn open(storage: Storage) -> Result<Self> {
        let tasks = storage.read_tasks()?;
        tracing::debug!(count = tasks.len(), "loaded task snapshot");
        let mut list = TaskList::from_tasks(tasks);
        if let Some(next_id) = storage.read_next_id() {
            list.ensure_next_id(next_id);
        }
        Ok(Self { storage, list })
    }

    pub fn list(&self) -> &TaskList {
        &self.list
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn add(&mut self, name: &str) -> Result<Option<Task>> {
        let created = self.list.add(name).cloned();
        if created.is_some() {
            self.persist()?;
        }
        Ok(created)
    }

    pub fn toggle(&mut self, id: TaskId) -> Result<bool> {
        let changed = self.list.toggle(id);
        if changed {
            self.persist()?;
        }
        Ok(changed)
    }

    pub fn remove(&mut self, id: TaskId) -> Result<bool> {
        let changed = self.list.remove(id);
        if changed {
            self.persist()?;
        }
        Ok(changed)
    }

    pub fn rename(&mut self, id: TaskId, name: &str) -> Result<bool> {
        let changed = self.list.rename(id, name);
        if changed {
            self.persist()?;
        }
        Ok(changed)
    }

    /// Save an in-progress edit session against the stored list.
    pub fn save_edit(&mut self, session: &mut EditSession) -> Result<Option<TaskId>> {
        let saved = session.save(&mut self.list);
        if saved.is_some() {
            self.persist()?;
        }
        Ok(saved)
    }

    fn persist(&self) -> Result<()> {
        tracing::debug!(count = self.list.len(), "writing task snapshot");
        self.storage.write_tasks(self.list.tasks())?;
        self.storage.write_next_id(self.list.next_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn list_with(names: &[&str]) -> TaskList {
        let mut list = TaskList::new();
        for name in names {
            list.add(name);
        }
        list
    }

    #[test]
    fn add_appends_uncompleted_task() {
        let mut list = TaskList::new();
        let task = list.add("Buy milk").expect("task created");
        assert_eq!(task.id, 1);
        assert_eq!(task.name, "Buy milk");
        assert!(!task.completed);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn add_rejects_whitespace_name() {
        let mut list = list_with(&["One"]);
        assert!(list.add("   ").is_none());
        assert!(list.add("").is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn add_trims_name() {
        let mut list = TaskList::new();
        let task = list.add("  Walk dog  ").expect("task created");
        assert_eq!(task.name, "Walk dog");
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut list = list_with(&["One", "Two", "Three"]);
        assert!(list.remove(3));
        let task = list.add("Four").expect("task created");
        assert_eq!(task.id, 4);
    }

    #[test]
    fn from_tasks_reseeds_counter_past_max_id() {
        let tasks = vec![
            Task {
                id: 2,
                name: "Two".to_string(),
                completed: false,
            },
            Task {
                id: 7,
                name: "Seven".to_string(),
                completed: true,
            },
        ];
        let mut list = TaskList::from_tasks(tasks);
        let task = list.add("Eight").expect("task created");
        assert_eq!(task.id, 8);
    }

    #[test]
    fn from_tasks_saturates_at_max_id() {
        let tasks = vec![Task {
            id: u64::MAX,
            name: "Last".to_string(),
            completed: false,
        }];
        let list = TaskList::from_tasks(tasks);
        assert_eq!(list.next_id(), u64::MAX);
    }

    #[test]
    fn toggle_twice_restores_state() {
        let mut list = list_with(&["One"]);
        assert!(list.toggle(1));
        assert!(list.get(1).unwrap().completed);
        assert!(list.toggle(1));
        assert!(!list.get(1).unwrap().completed);
    }

    #[test]
    fn toggle_unknown_id_changes_nothing() {
        let mut list = list_with(&["One"]);
        assert!(!list.toggle(99));
        assert!(!list.get(1).unwrap().completed);
    }

    #[test]
    fn remove_preserves_order_of_rest() {
        let mut list = list_with(&["One", "Two", "Three"]);
        assert!(list.remove(2));
        let names: Vec<_> = list.tasks().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["One", "Three"]);
        assert!(list.get(2).is_none());
    }

    #[test]
    fn remove_unknown_id_changes_nothing() {
        let mut list = list_with(&["One"]);
        assert!(!list.remove(99));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn rename_changes_only_the_name() {
        let mut list = list_with(&["One"]);
        list.toggle(1);
        assert!(list.rename(1, "Uno"));
        let task = list.get(1).unwrap();
        assert_eq!(task.id, 1);
        assert_eq!(task.name, "Uno");
        assert!(task.completed);
    }

    #[test]
    fn rename_rejects_empty_and_unknown() {
        let mut list = list_with(&["One"]);
        assert!(!list.rename(1, "  "));
        assert!(!list.rename(99, "Nope"));
        assert_eq!(list.get(1).unwrap().name, "One");
    }

    #[test]
    fn views_are_disjoint_and_cover_all() {
        let mut list = list_with(&["One", "Two", "Three"]);
        list.toggle(2);

        let active = list.view(TaskFilter::Active);
        let completed = list.view(TaskFilter::Completed);
        let all = list.view(TaskFilter::All);

        for task in &active {
            assert!(!completed.iter().any(|t| t.id == task.id));
        }
        assert_eq!(active.len() + completed.len(), all.len());

        let mut union: Vec<TaskId> = active
            .iter()
            .chain(completed.iter())
            .map(|t| t.id)
            .collect();
        union.sort_unstable();
        let mut all_ids: Vec<TaskId> = all.iter().map(|t| t.id).collect();
        all_ids.sort_unstable();
        assert_eq!(union, all_ids);
    }

    #[test]
    fn views_preserve_insertion_order() {
        let mut list = list_with(&["One", "Two", "Three", "Four"]);
        list.toggle(1);
        list.toggle(3);

        let active: Vec<_> = list
            .view(TaskFilter::Active)
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(active, [2, 4]);
        let completed: Vec<_> = list
            .view(TaskFilter::Completed)
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(completed, [1, 3]);
    }

    #[test]
    fn edit_session_begin_seeds_pending() {
        let mut session = EditSession::new();
        session.begin(1, "One");
        assert_eq!(session.editing(), Some(1));
        assert_eq!(session.pending(), "One");
    }

    #[test]
    fn edit_session_save_applies_and_clears() {
        let mut list = list_with(&["One"]);
        let mut session = EditSession::new();
        session.begin(1, "One");
        session.set_pending("Uno");

        assert_eq!(session.save(&mut list), Some(1));
        assert_eq!(list.get(1).unwrap().name, "Uno");
        assert_eq!(session.editing(), None);
        assert_eq!(session.pending(), "");
    }

    #[test]
    fn edit_session_save_is_noop_without_edit_or_name() {
        let mut list = list_with(&["One"]);

        let mut idle = EditSession::new();
        assert_eq!(idle.save(&mut list), None);

        let mut blank = EditSession::new();
        blank.begin(1, "One");
        blank.set_pending("   ");
        assert_eq!(blank.save(&mut list), None);
        // Session stays open so the user can correct the input.
        assert_eq!(blank.editing(), Some(1));
        assert_eq!(list.get(1).unwrap().name, "One");
    }

    #[test]
    fn scenario_add_toggle_add_filter_remove() {
        let mut list = TaskList::new();

        list.add("Buy milk");
        assert_eq!(
            list.tasks(),
            [Task {
                id: 1,
                name: "Buy milk".to_string(),
                completed: false
            }]
        );

        list.toggle(1);
        assert!(list.get(1).unwrap().completed);

        list.add("Walk dog");
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(2).unwrap().name, "Walk dog");
        assert!(!list.get(2).unwrap().completed);

        let active: Vec<_> = list.view(TaskFilter::Active).iter().map(|t| t.id).collect();
        assert_eq!(active, [2]);
        let completed: Vec<_> = list
            .view(TaskFilter::Completed)
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(completed, [1]);

        list.remove(1);
        let remaining: Vec<_> = list.tasks().iter().map(|t| t.id).collect();
        assert_eq!(remaining, [2]);
    }

    #[test]
    fn store_persists_after_each_mutation() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().to_path_buf());

        let mut store = TaskStore::open(storage.clone()).unwrap();
        store.add("One").unwrap();
        store.add("Two").unwrap();
        store.toggle(1).unwrap();

        let reloaded = TaskStore::open(storage).unwrap();
        assert_eq!(reloaded.list().len(), 2);
        assert!(reloaded.list().get(1).unwrap().completed);
        assert!(!reloaded.list().get(2).unwrap().completed);
    }

    #[test]
    fn store_skips_write_on_noop() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().to_path_buf());

        let mut store = TaskStore::open(storage.clone()).unwrap();
        assert!(store.add("   ").unwrap().is_none());
        assert!(!store.toggle(99).unwrap());
        assert!(!storage.tasks_file().exists());
    }

    #[test]
    fn store_persists_transition_to_empty_list() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().to_path_buf());

        let mut store = TaskStore::open(storage.clone()).unwrap();
        store.add("Only").unwrap();
        store.remove(1).unwrap();

        // The empty snapshot must overwrite the old one; a reload must not
        // resurrect the deleted task.
        let reloaded = TaskStore::open(storage).unwrap();
        assert!(reloaded.list().is_empty());
    }

    #[test]
    fn store_ids_stay_monotonic_across_reopen() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().to_path_buf());

        let mut store = TaskStore::open(storage.clone()).unwrap();
        store.add("One").unwrap();
        store.add("Two").unwrap();
        store.remove(2).unwrap();

        // The persisted counter keeps id 2 retired even though the
        // snapshot's max id is now 1.
        let mut reopened = TaskStore::open(storage).unwrap();
        let task = reopened.add("Three").unwrap().expect("task created");
        assert_eq!(task.id, 3);
    }

    #[test]
    fn store_save_edit_persists() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().to_path_buf());

        let mut store = TaskStore::open(storage.clone()).unwrap();
        store.add("One").unwrap();

        let mut session = EditSession::new();
        let current = store.list().get(1).unwrap().name.clone();
        session.begin(1, &current);
        session.set_pending("Uno");
        assert_eq!(store.save_edit(&mut session).unwrap(), Some(1));

        let reloaded = TaskStore::open(storage).unwrap();
        assert_eq!(reloaded.list().get(1).unwrap().name, "Uno");
    }

    #[test]
    fn filter_parses_known_names() {
        assert_eq!("all".parse::<TaskFilter>().unwrap(), TaskFilter::All);
        assert_eq!("Active".parse::<TaskFilter>().unwrap(), TaskFilter::Active);
        assert_eq!(
            "COMPLETED".parse::<TaskFilter>().unwrap(),
            TaskFilter::Completed
        );
        assert!("done".parse::<TaskFilter>().is_err());
    }
}
