//! Renderer: a pure mapping from `ViewState` to a view tree, plus the event
//! vocabulary the view feeds back into `TodoStore::dispatch`.
//!
//! The tree is presentation-agnostic. A host draws it with whatever surface
//! it has and translates its own input into `UiEvent`s.

use crate::store::ViewState;
use crate::types::TodoId;

pub const INPUT_PLACEHOLDER: &str = "Add a new todo...";
pub const LOADING_TEXT: &str = "Loading todos...";
pub const EMPTY_TEXT: &str = "No todos yet. Add one above!";

/// User intents produced by the view's controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The input field's text changed.
    InputChanged(String),
    /// Add control clicked or Enter pressed in the input field.
    Submit,
    Reload,
    /// Checkbox flipped.
    Toggle(TodoId),
    BeginEdit(TodoId),
    DraftChanged(String),
    SaveEdit(TodoId),
    CancelEdit,
    Delete(TodoId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub error_banner: Option<String>,
    pub input: InputRow,
    pub body: Body,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRow {
    pub text: String,
    pub placeholder: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Loading,
    Empty,
    List(Vec<Row>),
}

/// One todo row. The checkbox is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: TodoId,
    pub completed: bool,
    pub content: RowContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowContent {
    /// Static title with edit and delete controls.
    Display { title: String },
    /// Inline editor with save and cancel controls.
    Editing { draft: String },
}

impl Row {
    /// Events the row's controls can emit, in on-screen order.
    pub fn controls(&self) -> Vec<UiEvent> {
        let mut events = vec![UiEvent::Toggle(self.id)];
        match self.content {
            RowContent::Display { .. } => {
                events.push(UiEvent::BeginEdit(self.id));
                events.push(UiEvent::Delete(self.id));
            }
            RowContent::Editing { .. } => {
                events.push(UiEvent::SaveEdit(self.id));
                events.push(UiEvent::CancelEdit);
            }
        }
        events
    }
}

pub fn render(state: &ViewState) -> View {
    let body = if state.loading {
        Body::Loading
    } else if state.todos.is_empty() {
        Body::Empty
    } else {
        Body::List(
            state
                .todos
                .iter()
                .map(|todo| {
                    let content = match &state.editing {
                        Some(session) if session.id == todo.id => RowContent::Editing {
                            draft: session.draft.clone(),
                        },
                        _ => RowContent::Display {
                            title: todo.title.clone(),
                        },
                    };
                    Row {
                        id: todo.id,
                        completed: todo.completed,
                        content,
                    }
                })
                .collect(),
        )
    };

    View {
        error_banner: state.error.clone(),
        input: InputRow {
            text: state.input.clone(),
            placeholder: INPUT_PLACEHOLDER,
        },
        body,
    }
}
