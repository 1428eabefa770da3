//! Wires the new-task input, the counter and the task list to one store.
//!
//! Rows are addressed by their index in the current snapshot, which is what a
//! front-end with a cursor has at hand. Out-of-range indices are ignored.

use tracing::debug;

use crate::dialog::{Answer, Dialogs, RemovalPrompt};
use crate::model::task::Task;
use crate::service::task_store::{AddOutcome, Snapshot, TaskStore};
use crate::view::list::{RowBinding, TaskListView};
use crate::view::row::RowView;
use crate::view::text_field::TextField;

pub struct Screen<D: Dialogs> {
    store: TaskStore<D>,
    input: TextField,
    list: TaskListView,
    snapshot: Snapshot,
    seen_revision: u64,
}

impl<D: Dialogs> Screen<D> {
    pub fn new(dialogs: D) -> Self {
        let store = TaskStore::new(dialogs);
        let snapshot = store.snapshot();
        let seen_revision = store.revision();
        Self {
            store,
            input: TextField::new(),
            list: TaskListView::new(),
            snapshot,
            seen_revision,
        }
    }

    pub fn store(&self) -> &TaskStore<D> {
        &self.store
    }

    pub fn dialogs_mut(&mut self) -> &mut D {
        self.store.dialogs_mut()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.snapshot
    }

    pub fn counter(&self) -> usize {
        self.snapshot.len()
    }

    pub fn counter_label(&self) -> String {
        match self.counter() {
            1 => "You have 1 task".to_string(),
            n => format!("You have {} tasks", n),
        }
    }

    pub fn input(&self) -> &TextField {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut TextField {
        &mut self.input
    }

    pub fn rows(&self) -> impl Iterator<Item = RowBinding<'_>> + '_ {
        self.list.rows(&self.snapshot)
    }

    pub fn row(&self, index: usize) -> Option<(&Task, &RowView)> {
        self.rows().nth(index).map(|b| (b.task, b.row))
    }

    pub fn draft_mut(&mut self, index: usize) -> Option<&mut TextField> {
        let id = self.snapshot.get(index)?.id;
        self.list.row_mut(id).draft_mut()
    }

    pub fn submit_input(&mut self) -> Option<AddOutcome> {
        if self.input.is_blank() {
            return None;
        }

        let outcome = self.store.add_task(self.input.text());
        if matches!(outcome, AddOutcome::Added(_)) {
            self.input.clear();
        }
        self.refresh();
        Some(outcome)
    }

    pub fn toggle_row(&mut self, index: usize) {
        let Some(task) = self.snapshot.get(index).cloned() else {
            return;
        };
        self.list.row_mut(task.id).press_body(&task, &mut self.store);
        self.refresh();
    }

    pub fn start_editing_row(&mut self, index: usize) {
        let Some(task) = self.snapshot.get(index).cloned() else {
            return;
        };
        self.list.row_mut(task.id).start_editing(&task);
    }

    pub fn cancel_editing_row(&mut self, index: usize) {
        let Some(task) = self.snapshot.get(index) else {
            return;
        };
        self.list.row_mut(task.id).cancel_editing();
    }

    pub fn commit_row(&mut self, index: usize) {
        let Some(task) = self.snapshot.get(index).cloned() else {
            return;
        };
        self.list.row_mut(task.id).commit(&task, &mut self.store);
        self.refresh();
    }

    /// Returns `false` when the row's remove affordance is disabled.
    pub fn remove_row(&mut self, index: usize) -> bool {
        let Some(task) = self.snapshot.get(index).cloned() else {
            return false;
        };
        self.list.row_mut(task.id).press_remove(&task, &mut self.store)
    }

    pub fn resolve_removal(&mut self, prompt: RemovalPrompt, answer: Answer) {
        self.store.resolve_removal(prompt, answer);
        self.refresh();
    }

    fn refresh(&mut self) {
        if self.store.revision() == self.seen_revision {
            return;
        }
        self.snapshot = self.store.snapshot();
        self.seen_revision = self.store.revision();
        self.list.sync(&self.snapshot);
        debug!(revision = self.seen_revision, tasks = self.snapshot.len(), "screen refreshed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::{Alert, RecordingDialogs};

    fn screen_with(titles: &[&str]) -> Screen<RecordingDialogs> {
        let mut screen = Screen::new(RecordingDialogs::new());
        for title in titles {
            for c in title.chars() {
                screen.input_mut().insert_char(c);
            }
            screen.submit_input();
        }
        screen
    }

    #[test]
    fn test_submit_adds_and_clears_input() {
        let screen = screen_with(&["Buy milk", "Walk the dog"]);
        assert_eq!(screen.counter(), 2);
        assert_eq!(screen.counter_label(), "You have 2 tasks");
        assert_eq!(screen.input().text(), "");
        assert_eq!(screen.tasks()[1].title, "Walk the dog");
    }

    #[test]
    fn test_counter_label_singular() {
        assert_eq!(screen_with(&[]).counter_label(), "You have 0 tasks");
        assert_eq!(screen_with(&["a"]).counter_label(), "You have 1 task");
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut screen = screen_with(&[]);
        screen.input_mut().insert_char(' ');
        assert_eq!(screen.submit_input(), None);
        assert_eq!(screen.counter(), 0);
    }

    #[test]
    fn test_duplicate_keeps_input_text() {
        let mut screen = screen_with(&["Buy milk"]);
        for c in "Buy milk".chars() {
            screen.input_mut().insert_char(c);
        }
        assert_eq!(screen.submit_input(), Some(AddOutcome::Duplicate));
        assert_eq!(screen.input().text(), "Buy milk");
        assert_eq!(screen.counter(), 1);
        assert_eq!(screen.store().dialogs().alerts.len(), 1);
        assert!(matches!(
            screen.store().dialogs().alerts[0],
            Alert::DuplicateTitle { .. }
        ));
    }

    #[test]
    fn test_edit_row_flow() {
        let mut screen = screen_with(&["Buy milk", "Walk the dog"]);
        screen.toggle_row(0);
        screen.start_editing_row(0);
        assert!(screen.row(0).unwrap().1.wants_focus());

        let draft = screen.draft_mut(0).unwrap();
        draft.move_cursor_home();
        for c in "Go ".chars() {
            draft.insert_char(c);
        }
        // Removing is disabled mid-edit, toggling is not.
        assert!(!screen.remove_row(0));
        screen.toggle_row(0);
        screen.toggle_row(0);

        screen.commit_row(0);
        assert!(!screen.row(0).unwrap().1.is_editing());
        assert_eq!(screen.tasks()[0].title, "Go Buy milk");
        assert!(screen.tasks()[0].done);
        assert_eq!(screen.tasks()[1].title, "Walk the dog");
    }

    #[test]
    fn test_cancel_editing_row_leaves_store_untouched() {
        let mut screen = screen_with(&["Buy milk"]);
        let revision = screen.store().revision();
        screen.start_editing_row(0);
        screen.draft_mut(0).unwrap().clear();
        screen.cancel_editing_row(0);

        assert_eq!(screen.store().revision(), revision);
        assert_eq!(screen.row(0).unwrap().0.title, "Buy milk");
        assert!(!screen.row(0).unwrap().1.is_editing());
    }

    #[test]
    fn test_remove_row_after_confirmation() {
        let mut screen = screen_with(&["Buy milk", "Walk the dog"]);

        assert!(screen.remove_row(0));
        assert_eq!(screen.counter(), 2);
        let prompt = screen.dialogs_mut().take_prompt().unwrap();
        screen.resolve_removal(prompt, Answer::No);
        assert_eq!(screen.counter(), 2);

        assert!(screen.remove_row(0));
        let prompt = screen.dialogs_mut().take_prompt().unwrap();
        screen.resolve_removal(prompt, Answer::Yes);
        assert_eq!(screen.counter(), 1);
        assert_eq!(screen.tasks()[0].title, "Walk the dog");
    }

    #[test]
    fn test_out_of_range_rows_are_ignored() {
        let mut screen = screen_with(&["Buy milk"]);
        screen.toggle_row(5);
        screen.start_editing_row(5);
        screen.commit_row(5);
        assert!(!screen.remove_row(5));
        assert!(screen.draft_mut(5).is_none());
        assert!(!screen.tasks()[0].done);
    }
}
