use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::TableState;
use todolist_core::{AddOutcome, Answer, Screen, TextField};
use tracing::debug;

use crate::tui::modal::{Modal, ModalQueue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    List,
}

pub struct App {
    pub screen: Screen<ModalQueue>,
    pub state: TableState,
    pub focus: Focus,
    pub status: Option<&'static str>,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> App {
        App {
            screen: Screen::new(ModalQueue::new()),
            state: TableState::default(),
            focus: Focus::Input,
            status: None,
            should_quit: false,
        }
    }

    pub fn modal(&self) -> Option<&Modal> {
        self.screen.store().dialogs().current()
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// The row whose draft receives keystrokes, if the selected row is editing.
    pub fn editing_row(&self) -> Option<usize> {
        let i = self.selected()?;
        let (_, row) = self.screen.row(i)?;
        (self.focus == Focus::List && row.wants_focus()).then_some(i)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.screen.store().dialogs().is_open() {
            self.handle_modal_key(key);
            return;
        }

        self.status = None;
        match self.focus {
            Focus::Input => self.handle_input_key(key),
            Focus::List => match self.editing_row() {
                Some(i) => self.handle_editing_key(i, key),
                None => self.handle_list_key(key),
            },
        }
    }

    fn handle_modal_key(&mut self, key: KeyEvent) {
        let is_alert = matches!(self.modal(), Some(Modal::Alert(_)));
        if is_alert {
            self.screen.dialogs_mut().close();
            return;
        }

        let answer = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Answer::Yes,
            KeyCode::Char('n') | KeyCode::Char('N') => Answer::No,
            KeyCode::Esc => Answer::Dismissed,
            _ => return,
        };

        if let Some(Modal::Confirm(prompt)) = self.screen.dialogs_mut().close() {
            debug!(id = %prompt.id(), ?answer, "removal answered");
            self.screen.resolve_removal(prompt, answer);
            self.clamp_selection();
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_input(),
            KeyCode::Tab | KeyCode::Down | KeyCode::Esc => self.focus_list(),
            KeyCode::Char(c) => self.screen.input_mut().insert_char(c),
            KeyCode::Backspace => self.screen.input_mut().delete_char(),
            _ => edit_cursor(self.screen.input_mut(), key.code),
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => self.next(),
            KeyCode::Up | KeyCode::Char('k') => self.previous(),
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_selected(),
            KeyCode::Char('e') => {
                if let Some(i) = self.selected() {
                    self.screen.start_editing_row(i);
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => self.remove_selected(),
            KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Tab => self.focus = Focus::Input,
            _ => {}
        }
    }

    fn handle_editing_key(&mut self, i: usize, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('t') {
                self.toggle_selected();
            }
            return;
        }

        match key.code {
            KeyCode::Enter => self.screen.commit_row(i),
            KeyCode::Esc => self.screen.cancel_editing_row(i),
            KeyCode::Up => self.previous(),
            KeyCode::Down => self.next(),
            KeyCode::Delete => self.remove_selected(),
            code => {
                if let Some(draft) = self.screen.draft_mut(i) {
                    match code {
                        KeyCode::Char(c) => draft.insert_char(c),
                        KeyCode::Backspace => draft.delete_char(),
                        other => edit_cursor(draft, other),
                    }
                }
            }
        }
    }

    fn submit_input(&mut self) {
        if let Some(AddOutcome::Added(_)) = self.screen.submit_input() {
            let last = self.screen.counter().saturating_sub(1);
            self.state.select(Some(last));
        }
    }

    fn focus_list(&mut self) {
        if self.screen.counter() == 0 {
            return;
        }
        self.focus = Focus::List;
        if self.state.selected().is_none() {
            self.state.select(Some(0));
        }
    }

    pub fn next(&mut self) {
        let len = self.screen.counter();
        if len == 0 {
            return;
        }

        let i = match self.state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.screen.counter();
        if len == 0 {
            return;
        }

        let i = match self.state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    fn toggle_selected(&mut self) {
        if let Some(i) = self.selected() {
            self.screen.toggle_row(i);
        }
    }

    fn remove_selected(&mut self) {
        if let Some(i) = self.selected() {
            if !self.screen.remove_row(i) {
                self.status = Some("Finish editing before removing this task");
            }
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.screen.counter();
        match self.state.selected() {
            _ if len == 0 => {
                self.state.select(None);
                self.focus = Focus::Input;
            }
            Some(i) if i >= len => self.state.select(Some(len - 1)),
            _ => {}
        }
    }
}

fn edit_cursor(field: &mut TextField, code: KeyCode) {
    match code {
        KeyCode::Left => field.move_cursor_left(),
        KeyCode::Right => field.move_cursor_right(),
        KeyCode::Home => field.move_cursor_home(),
        KeyCode::End => field.move_cursor_end(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn app_with(titles: &[&str]) -> App {
        let mut app = App::new();
        for title in titles {
            type_text(&mut app, title);
            press(&mut app, KeyCode::Enter);
        }
        app
    }

    #[test]
    fn test_add_from_input() {
        let app = app_with(&["Buy milk", "Walk the dog"]);
        assert_eq!(app.screen.counter(), 2);
        assert_eq!(app.selected(), Some(1));
        assert_eq!(app.focus, Focus::Input);
        assert_eq!(app.screen.input().text(), "");
    }

    #[test]
    fn test_duplicate_opens_alert_that_blocks_keys() {
        let mut app = app_with(&["Buy milk", "Buy milk"]);
        assert_eq!(app.screen.counter(), 1);
        assert!(matches!(app.modal(), Some(Modal::Alert(_))));

        // The key closing the alert is swallowed.
        press(&mut app, KeyCode::Char('x'));
        assert!(app.modal().is_none());
        assert_eq!(app.screen.input().text(), "Buy milk");
    }

    #[test]
    fn test_toggle_from_list() {
        let mut app = app_with(&["Buy milk"]);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::List);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.screen.tasks()[0].done);
        press(&mut app, KeyCode::Enter);
        assert!(!app.screen.tasks()[0].done);
    }

    #[test]
    fn test_focus_list_needs_tasks() {
        let mut app = App::new();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Input);
    }

    #[test]
    fn test_edit_commit_and_cancel() {
        let mut app = app_with(&["Buy milk"]);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.editing_row(), Some(0));

        press(&mut app, KeyCode::Home);
        type_text(&mut app, "Go ");
        // While editing, 'd' and 'q' are just text.
        type_text(&mut app, "dq");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.editing_row(), None);
        assert_eq!(app.screen.tasks()[0].title, "Go Buy milk");

        press(&mut app, KeyCode::Char('e'));
        type_text(&mut app, "!!!");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.editing_row(), None);
        assert_eq!(app.screen.tasks()[0].title, "Go Buy milk");
        assert!(!app.should_quit);
    }

    #[test]
    fn test_toggle_and_blocked_remove_while_editing() {
        let mut app = app_with(&["Buy milk"]);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('e'));

        app.handle_key(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL));
        assert!(app.screen.tasks()[0].done);

        press(&mut app, KeyCode::Delete);
        assert!(app.modal().is_none());
        assert!(app.status.is_some());
        assert_eq!(app.screen.counter(), 1);
    }

    #[test]
    fn test_remove_confirmation() {
        let mut app = app_with(&["a", "b"]);
        press(&mut app, KeyCode::Tab);

        press(&mut app, KeyCode::Char('d'));
        assert!(matches!(app.modal(), Some(Modal::Confirm(_))));
        // Unrelated keys leave the question open.
        press(&mut app, KeyCode::Char('q'));
        assert!(app.modal().is_some());
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.screen.counter(), 2);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen.counter(), 2);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.screen.counter(), 1);
        assert_eq!(app.screen.tasks()[0].title, "a");
        assert_eq!(app.selected(), Some(0));

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.screen.counter(), 0);
        assert_eq!(app.selected(), None);
        assert_eq!(app.focus, Focus::Input);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut app = app_with(&["a", "b", "c"]);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.selected(), Some(2));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.selected(), Some(0));
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.selected(), Some(2));
    }

    #[test]
    fn test_quit() {
        let mut app = app_with(&["a"]);
        type_text(&mut app, "q");
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = App::new();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
