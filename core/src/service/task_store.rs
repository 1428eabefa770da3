use std::sync::Arc;

use tracing::{debug, info};

use crate::dialog::{Alert, Answer, Dialogs, RemovalPrompt};
use crate::model::task::{IdGenerator, Task, TaskId};

/// The whole ordered task collection at one instant. Never mutated once
/// published.
pub type Snapshot = Arc<[Task]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added(TaskId),
    Duplicate,
    Empty,
}

/// Callbacks a row view may invoke on the task collection.
pub trait TaskActions {
    fn toggle_task_done(&mut self, id: TaskId);
    fn remove_task(&mut self, id: TaskId);
    fn edit_task(&mut self, id: TaskId, new_title: String);
}

pub struct TaskStore<D: Dialogs> {
    tasks: Snapshot,
    revision: u64,
    ids: IdGenerator,
    dialogs: D,
}

impl<D: Dialogs> TaskStore<D> {
    pub fn new(dialogs: D) -> Self {
        Self {
            tasks: Arc::from(Vec::new()),
            revision: 0,
            ids: IdGenerator::new(),
            dialogs,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.tasks)
    }

    /// Bumped every time a new snapshot is published.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    pub fn dialogs_mut(&mut self) -> &mut D {
        &mut self.dialogs
    }

    pub fn add_task(&mut self, title: &str) -> AddOutcome {
        if title.is_empty() {
            return AddOutcome::Empty;
        }

        if self.tasks.iter().any(|t| t.title == title) {
            info!(title, "rejected duplicate task title");
            self.dialogs.alert(Alert::DuplicateTitle {
                title: title.to_string(),
            });
            return AddOutcome::Duplicate;
        }

        let id = self.ids.next_id();
        let mut next = self.tasks.to_vec();
        next.push(Task::new(id, title.to_string()));
        self.publish(next);
        debug!(%id, title, "task added");
        AddOutcome::Added(id)
    }

    pub fn toggle_task_done(&mut self, id: TaskId) {
        let Some(pos) = self.position(id) else {
            return;
        };

        let mut next = self.tasks.to_vec();
        next[pos].done = !next[pos].done;
        let done = next[pos].done;
        self.publish(next);
        debug!(%id, done, "task toggled");
    }

    /// Asks the dialog service to confirm the removal. Nothing changes until
    /// the prompt is resolved with [`Answer::Yes`].
    pub fn remove_task(&mut self, id: TaskId) {
        debug!(%id, "removal requested");
        self.dialogs.confirm(RemovalPrompt::new(id));
    }

    pub fn resolve_removal(&mut self, prompt: RemovalPrompt, answer: Answer) {
        let id = prompt.id();
        if answer != Answer::Yes {
            debug!(%id, ?answer, "removal declined");
            return;
        }

        let Some(pos) = self.position(id) else {
            return;
        };

        let mut next = self.tasks.to_vec();
        next.remove(pos);
        self.publish(next);
        info!(%id, "task removed");
    }

    pub fn edit_task(&mut self, id: TaskId, new_title: String) {
        let Some(pos) = self.position(id) else {
            return;
        };

        let mut next = self.tasks.to_vec();
        next[pos].title = new_title;
        self.publish(next);
        debug!(%id, "task edited");
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    fn publish(&mut self, tasks: Vec<Task>) {
        self.tasks = Arc::from(tasks);
        self.revision += 1;
    }
}

impl<D: Dialogs> TaskActions for TaskStore<D> {
    fn toggle_task_done(&mut self, id: TaskId) {
        TaskStore::toggle_task_done(self, id);
    }

    fn remove_task(&mut self, id: TaskId) {
        TaskStore::remove_task(self, id);
    }

    fn edit_task(&mut self, id: TaskId, new_title: String) {
        TaskStore::edit_task(self, id, new_title);
    }
}
