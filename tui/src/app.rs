//! Application state around the store: focus, selection and key bindings.
//!
//! Keys are translated into `UiEvent`s and dispatched to the store; the
//! bits that are purely about the terminal (which pane has focus, which row
//! is highlighted, quitting) stay here.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use todo_core::{render, Body, Completion, Outcome, PendingRequest, TodoId, TodoStore, UiEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    List,
}

#[derive(Debug)]
pub struct App {
    store: TodoStore,
    focus: Focus,
    selected: usize,
    should_quit: bool,
}

impl App {
    pub fn new(store: TodoStore) -> Self {
        Self {
            store,
            focus: Focus::Input,
            selected: 0,
            should_quit: false,
        }
    }

    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_id(&self) -> Option<TodoId> {
        self.store.state().todos.get(self.selected).map(|t| t.id)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press. Returns the request to execute, if any.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<PendingRequest> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return None;
        }
        let event = self.key_to_event(key)?;
        self.store.dispatch(event)
    }

    pub fn complete(&mut self, completion: Completion, outcome: Outcome) {
        self.store.complete(completion, outcome);
        self.clamp_selection();
    }

    fn key_to_event(&mut self, key: KeyEvent) -> Option<UiEvent> {
        if let Some(session) = &self.store.state().editing {
            // The inline editor captures every key while open.
            let id = session.id;
            let mut draft = session.draft.clone();
            if is_chord(&key) {
                return None;
            }
            return match key.code {
                KeyCode::Enter => Some(UiEvent::SaveEdit(id)),
                KeyCode::Esc => Some(UiEvent::CancelEdit),
                KeyCode::Backspace => {
                    draft.pop();
                    Some(UiEvent::DraftChanged(draft))
                }
                KeyCode::Char(c) => {
                    draft.push(c);
                    Some(UiEvent::DraftChanged(draft))
                }
                _ => None,
            };
        }

        match self.focus {
            Focus::Input => self.input_key(key),
            Focus::List => self.list_key(key),
        }
    }

    fn input_key(&mut self, key: KeyEvent) -> Option<UiEvent> {
        if is_chord(&key) {
            return None;
        }
        let mut text = self.store.state().input.clone();
        match key.code {
            KeyCode::Enter => Some(UiEvent::Submit),
            KeyCode::Tab | KeyCode::Esc | KeyCode::Down => {
                self.focus = Focus::List;
                None
            }
            KeyCode::Backspace => {
                text.pop();
                Some(UiEvent::InputChanged(text))
            }
            KeyCode::Char(c) => {
                text.push(c);
                Some(UiEvent::InputChanged(text))
            }
            _ => None,
        }
    }

    fn list_key(&mut self, key: KeyEvent) -> Option<UiEvent> {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                None
            }
            KeyCode::Tab | KeyCode::Char('i') | KeyCode::Char('a') => {
                self.focus = Focus::Input;
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected += 1;
                self.clamp_selection();
                None
            }
            KeyCode::Char('r') => Some(UiEvent::Reload),
            KeyCode::Char(' ') => self.row_action(|e| matches!(e, UiEvent::Toggle(_))),
            KeyCode::Char('e') | KeyCode::Enter => {
                self.row_action(|e| matches!(e, UiEvent::BeginEdit(_)))
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                self.row_action(|e| matches!(e, UiEvent::Delete(_)))
            }
            _ => None,
        }
    }

    /// Picks one of the selected row's controls. Only rows that are drawn
    /// have controls, so nothing fires while a reload hides the list.
    fn row_action(&self, pick: impl Fn(&UiEvent) -> bool) -> Option<UiEvent> {
        let Body::List(rows) = render(self.store.state()).body else {
            return None;
        };
        rows.get(self.selected)?.controls().into_iter().find(|e| pick(e))
    }

    fn clamp_selection(&mut self) {
        let len = self.store.state().todos.len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

/// Ctrl/Alt combinations are shortcuts, never text.
fn is_chord(key: &KeyEvent) -> bool {
    key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
