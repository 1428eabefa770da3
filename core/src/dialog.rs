//! Modal/alert presentation contract between the store and the front-end.
//!
//! The store never blocks on the user. It hands an [`Alert`] or a
//! [`RemovalPrompt`] to its [`Dialogs`] implementation and returns; a
//! confirmation is answered later by passing the prompt back to
//! [`TaskStore::resolve_removal`](crate::service::task_store::TaskStore::resolve_removal).

use crate::model::task::TaskId;

pub const DUPLICATE_TITLE: &str = "Task already exists";
pub const DUPLICATE_MESSAGE: &str = "You cannot add a task with the same name";
pub const REMOVE_TITLE: &str = "Remove item";
pub const REMOVE_MESSAGE: &str = "Are you sure you want to remove this item?";

/// Informational dialog with a single dismiss action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    DuplicateTitle { title: String },
}

impl Alert {
    pub fn title(&self) -> &'static str {
        match self {
            Alert::DuplicateTitle { .. } => DUPLICATE_TITLE,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Alert::DuplicateTitle { .. } => DUPLICATE_MESSAGE,
        }
    }
}

/// A pending yes/no confirmation for removing one task.
///
/// Only the store creates prompts, and resolving one consumes it, so a task
/// can never be removed without going through a prompt and a prompt can never
/// be answered twice.
#[derive(Debug, PartialEq, Eq)]
pub struct RemovalPrompt {
    id: TaskId,
}

impl RemovalPrompt {
    pub(crate) fn new(id: TaskId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn title(&self) -> &'static str {
        REMOVE_TITLE
    }

    pub fn message(&self) -> &'static str {
        REMOVE_MESSAGE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    Dismissed,
}

pub trait Dialogs {
    fn alert(&mut self, alert: Alert);
    fn confirm(&mut self, prompt: RemovalPrompt);
}

/// Dialog service that records everything it is asked to show.
///
/// Used by tests and by callers that present dialogs themselves after each
/// operation (the script runner does this).
#[derive(Debug, Default)]
pub struct RecordingDialogs {
    pub alerts: Vec<Alert>,
    pub prompts: Vec<RemovalPrompt>,
}

impl RecordingDialogs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the oldest unanswered prompt.
    pub fn take_prompt(&mut self) -> Option<RemovalPrompt> {
        if self.prompts.is_empty() {
            None
        } else {
            Some(self.prompts.remove(0))
        }
    }
}

impl Dialogs for RecordingDialogs {
    fn alert(&mut self, alert: Alert) {
        self.alerts.push(alert);
    }

    fn confirm(&mut self, prompt: RemovalPrompt) {
        self.prompts.push(prompt);
    }
}
