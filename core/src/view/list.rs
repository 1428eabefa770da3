use std::collections::HashMap;

use crate::model::task::{Task, TaskId};
use crate::view::row::RowView;

/// One task bound to its row state, in snapshot order.
#[derive(Debug, Clone, Copy)]
pub struct RowBinding<'a> {
    pub index: usize,
    pub task: &'a Task,
    pub row: &'a RowView,
}

/// Row states for every task on screen, keyed by task id so a row keeps its
/// editing state across snapshots.
#[derive(Debug, Default)]
pub struct TaskListView {
    rows: HashMap<TaskId, RowView>,
}

impl TaskListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets the state of rows whose task is gone.
    pub fn sync(&mut self, tasks: &[Task]) {
        self.rows.retain(|id, _| tasks.iter().any(|t| t.id == *id));
    }

    pub fn rows<'a>(&'a self, tasks: &'a [Task]) -> impl Iterator<Item = RowBinding<'a>> + 'a {
        static VIEWING: RowView = RowView::viewing();
        tasks.iter().enumerate().map(move |(index, task)| RowBinding {
            index,
            task,
            row: self.rows.get(&task.id).unwrap_or(&VIEWING),
        })
    }

    pub fn row_mut(&mut self, id: TaskId) -> &mut RowView {
        self.rows.entry(id).or_default()
    }
}
