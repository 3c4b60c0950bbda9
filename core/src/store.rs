//! View state store.
//!
//! # Design
//! `TodoStore` owns the whole view state and is the only thing that mutates
//! it. Operations that need the server do not perform I/O: they return a
//! `PendingRequest` for the host to execute, and the host hands the outcome
//! back through [`TodoStore::complete`]. State therefore only changes in
//! synchronous handlers and completion callbacks, never mid-flight.
//!
//! Overlapping requests are not sequenced. Whichever response the host
//! delivers last wins, even if it belongs to an older request.

use tracing::{debug, warn};

use crate::client::TodoClient;
use crate::error::{ApiError, Operation, ViewError};
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{CreateTodo, Todo, TodoId};
use crate::view::UiEvent;

/// The single inline-edit session. Holding it in one `Option` keeps at most
/// one item editable at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: TodoId,
    pub draft: String,
}

/// Everything the renderer needs to draw the component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub todos: Vec<Todo>,
    pub input: String,
    pub loading: bool,
    pub error: Option<String>,
    pub editing: Option<EditSession>,
}

impl ViewState {
    pub fn find(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn is_editing(&self, id: TodoId) -> bool {
        self.editing.as_ref().is_some_and(|s| s.id == id)
    }
}

/// How a finished request is folded back into the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Load,
    Add,
    Toggle(TodoId),
    SaveEdit(TodoId),
    Delete(TodoId),
}

impl Completion {
    pub fn operation(self) -> Operation {
        match self {
            Completion::Load => Operation::Load,
            Completion::Add => Operation::Add,
            Completion::Toggle(_) | Completion::SaveEdit(_) => Operation::Update,
            Completion::Delete(_) => Operation::Delete,
        }
    }
}

/// A request the host must execute, tagged with its completion.
#[derive(Debug, Clone)]
pub struct PendingRequest {
    pub request: HttpRequest,
    pub completion: Completion,
}

/// Result of executing a `PendingRequest`.
pub type Outcome = Result<HttpResponse, ApiError>;

#[derive(Debug, Clone)]
pub struct TodoStore {
    client: TodoClient,
    state: ViewState,
}

impl TodoStore {
    pub fn new(client: TodoClient) -> Self {
        Self {
            client,
            state: ViewState::default(),
        }
    }

    /// Fresh store plus the initial list request.
    pub fn mount(client: TodoClient) -> (Self, PendingRequest) {
        let mut store = Self::new(client);
        let pending = store.load();
        (store, pending)
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.state.input = text.into();
    }

    /// Replaces the draft of the active edit session. No-op outside edit mode.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let Some(session) = self.state.editing.as_mut() {
            session.draft = text.into();
        }
    }

    pub fn load(&mut self) -> PendingRequest {
        self.state.loading = true;
        let request = self.client.build_list_todos();
        issued(request, Completion::Load)
    }

    /// Submits the input field as a new todo.
    pub fn add(&mut self) -> Option<PendingRequest> {
        if self.state.input.trim().is_empty() {
            self.fail(ViewError::BlankTitle);
            return None;
        }
        let built = self.client.build_create_todo(&CreateTodo::new(self.state.input.clone()));
        self.issue(built, Completion::Add)
    }

    /// Requests the negation of the item's current completion flag.
    pub fn toggle_completion(&mut self, id: TodoId) -> Option<PendingRequest> {
        let completed = self.state.find(id)?.completed;
        let built = self.client.build_set_completion(id, !completed);
        self.issue(built, Completion::Toggle(id))
    }

    pub fn delete(&mut self, id: TodoId) -> PendingRequest {
        issued(self.client.build_delete_todo(id), Completion::Delete(id))
    }

    /// Moves the edit cursor to `id`, seeding the draft with its title.
    /// Returns `false` if the item is not in the list.
    pub fn begin_edit(&mut self, id: TodoId) -> bool {
        let Some(todo) = self.state.find(id) else {
            return false;
        };
        self.state.editing = Some(EditSession {
            id,
            draft: todo.title.clone(),
        });
        true
    }

    pub fn save_edit(&mut self, id: TodoId) -> Option<PendingRequest> {
        let draft = self
            .state
            .editing
            .as_ref()
            .filter(|session| session.id == id)
            .map(|session| session.draft.clone())?;
        if draft.trim().is_empty() {
            self.fail(ViewError::BlankTitle);
            return None;
        }
        let built = self.client.build_set_title(id, &draft);
        self.issue(built, Completion::SaveEdit(id))
    }

    pub fn cancel_edit(&mut self) {
        self.state.editing = None;
    }

    /// Routes a renderer event to its handler.
    pub fn dispatch(&mut self, event: UiEvent) -> Option<PendingRequest> {
        match event {
            UiEvent::InputChanged(text) => {
                self.set_input(text);
                None
            }
            UiEvent::Submit => self.add(),
            UiEvent::Reload => Some(self.load()),
            UiEvent::Toggle(id) => self.toggle_completion(id),
            UiEvent::BeginEdit(id) => {
                self.begin_edit(id);
                None
            }
            UiEvent::DraftChanged(text) => {
                self.set_draft(text);
                None
            }
            UiEvent::SaveEdit(id) => self.save_edit(id),
            UiEvent::CancelEdit => {
                self.cancel_edit();
                None
            }
            UiEvent::Delete(id) => Some(self.delete(id)),
        }
    }

    /// Folds the outcome of an executed request into the state.
    pub fn complete(&mut self, completion: Completion, outcome: Outcome) {
        if completion == Completion::Load {
            self.state.loading = false;
        }
        let applied = outcome.and_then(|response| self.apply(completion, response));
        match applied {
            Ok(()) => self.state.error = None,
            Err(source) => self.fail(ViewError::Request {
                op: completion.operation(),
                source,
            }),
        }
    }

    fn apply(&mut self, completion: Completion, response: HttpResponse) -> Result<(), ApiError> {
        match completion {
            Completion::Load => {
                self.state.todos = self.client.parse_list_todos(response)?;
                if let Some(session) = &self.state.editing {
                    if self.state.find(session.id).is_none() {
                        self.state.editing = None;
                    }
                }
            }
            Completion::Add => {
                let todo = self.client.parse_create_todo(response)?;
                self.state.todos.push(todo);
                self.state.input.clear();
            }
            Completion::Toggle(id) => {
                let todo = self.client.parse_update_todo(response)?;
                self.replace(id, todo);
            }
            Completion::SaveEdit(id) => {
                let todo = self.client.parse_update_todo(response)?;
                self.replace(id, todo);
                self.state.editing = None;
            }
            Completion::Delete(id) => {
                self.client.parse_delete_todo(response)?;
                self.state.todos.retain(|t| t.id != id);
                if self.state.is_editing(id) {
                    self.state.editing = None;
                }
            }
        }
        Ok(())
    }

    fn replace(&mut self, id: TodoId, todo: Todo) {
        if let Some(slot) = self.state.todos.iter_mut().find(|t| t.id == id) {
            *slot = todo;
        }
    }

    fn issue(
        &mut self,
        built: Result<HttpRequest, ApiError>,
        completion: Completion,
    ) -> Option<PendingRequest> {
        match built {
            Ok(request) => Some(issued(request, completion)),
            Err(source) => {
                self.fail(ViewError::Request {
                    op: completion.operation(),
                    source,
                });
                None
            }
        }
    }

    fn fail(&mut self, err: ViewError) {
        match &err {
            ViewError::BlankTitle => debug!("rejected blank title"),
            ViewError::Request { op, source } => warn!(?op, error = %source, "request failed"),
        }
        self.state.error = Some(err.to_string());
    }
}

fn issued(request: HttpRequest, completion: Completion) -> PendingRequest {
    debug!(method = %request.method, path = %request.path, ?completion, "issuing request");
    PendingRequest {
        request,
        completion,
    }
}
