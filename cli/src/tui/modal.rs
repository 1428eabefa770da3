use std::collections::VecDeque;

use todolist_core::{Alert, Dialogs, RemovalPrompt};

#[derive(Debug)]
pub enum Modal {
    Alert(Alert),
    Confirm(RemovalPrompt),
}

impl Modal {
    pub fn title(&self) -> &'static str {
        match self {
            Modal::Alert(alert) => alert.title(),
            Modal::Confirm(prompt) => prompt.title(),
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Modal::Alert(alert) => alert.message(),
            Modal::Confirm(prompt) => prompt.message(),
        }
    }
}

/// Dialogs shown one at a time, oldest first. While one is open every key
/// goes to it.
#[derive(Debug, Default)]
pub struct ModalQueue {
    queue: VecDeque<Modal>,
}

impl ModalQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Modal> {
        self.queue.front()
    }

    pub fn close(&mut self) -> Option<Modal> {
        self.queue.pop_front()
    }

    pub fn is_open(&self) -> bool {
        !self.queue.is_empty()
    }
}

impl Dialogs for ModalQueue {
    fn alert(&mut self, alert: Alert) {
        self.queue.push_back(Modal::Alert(alert));
    }

    fn confirm(&mut self, prompt: RemovalPrompt) {
        self.queue.push_back(Modal::Confirm(prompt));
    }
}
