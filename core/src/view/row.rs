//! One task row and its private editing sub-state.
//!
//! The row owns nothing of the task itself. It keeps only whether the title
//! is being edited and, if so, the draft text. The draft reaches the store
//! only through [`RowView::commit`].

use crate::model::task::Task;
use crate::service::task_store::TaskActions;
use crate::view::text_field::TextField;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum RowMode {
    #[default]
    Viewing,
    Editing(TextField),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Empty,
    Checked,
}

/// The affordance shown next to the remove button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trailing {
    Edit,
    Cancel,
}

/// Everything the rendering layer needs to draw one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowModel<'a> {
    pub marker: Marker,
    pub text: &'a str,
    pub title_editable: bool,
    pub struck_through: bool,
    pub trailing: Trailing,
    pub remove_enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowView {
    mode: RowMode,
}

impl RowView {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn viewing() -> Self {
        Self {
            mode: RowMode::Viewing,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, RowMode::Editing(_))
    }

    /// An editing row holds input focus.
    pub fn wants_focus(&self) -> bool {
        self.is_editing()
    }

    pub fn draft(&self) -> Option<&TextField> {
        match &self.mode {
            RowMode::Editing(draft) => Some(draft),
            RowMode::Viewing => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut TextField> {
        match &mut self.mode {
            RowMode::Editing(draft) => Some(draft),
            RowMode::Viewing => None,
        }
    }

    pub fn start_editing(&mut self, task: &Task) {
        if !self.is_editing() {
            self.mode = RowMode::Editing(TextField::with_text(&task.title));
        }
    }

    pub fn cancel_editing(&mut self) {
        self.mode = RowMode::Viewing;
    }

    /// Sends the draft to the store and leaves edit mode.
    pub fn commit(&mut self, task: &Task, actions: &mut dyn TaskActions) {
        if let RowMode::Editing(draft) = std::mem::take(&mut self.mode) {
            actions.edit_task(task.id, draft.into_text());
        }
    }

    /// The row body toggles completion in either mode.
    pub fn press_body(&self, task: &Task, actions: &mut dyn TaskActions) {
        actions.toggle_task_done(task.id);
    }

    /// Returns `false` when the remove affordance is disabled.
    pub fn press_remove(&self, task: &Task, actions: &mut dyn TaskActions) -> bool {
        if self.is_editing() {
            return false;
        }
        actions.remove_task(task.id);
        true
    }

    pub fn render<'a>(&'a self, task: &'a Task) -> RowModel<'a> {
        let (text, editing) = match &self.mode {
            RowMode::Editing(draft) => (draft.text(), true),
            RowMode::Viewing => (task.title.as_str(), false),
        };

        RowModel {
            marker: if task.done { Marker::Checked } else { Marker::Empty },
            text,
            title_editable: editing,
            struck_through: task.done,
            trailing: if editing { Trailing::Cancel } else { Trailing::Edit },
            remove_enabled: !editing,
        }
    }
}
