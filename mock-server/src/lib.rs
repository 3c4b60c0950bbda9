//! In-memory stand-in for the remote todo API, used by tests and for local
//! manual runs of the terminal client.
//!
//! Ids are assigned sequentially and listing returns items in creation order.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Default)]
pub struct Todos {
    items: BTreeMap<u64, Todo>,
    last_id: u64,
}

pub type Db = Arc<RwLock<Todos>>;

pub fn app() -> Router {
    app_with(Db::default())
}

/// Router over an existing store, so tests can seed or inspect it.
pub fn app_with(db: Db) -> Router {
    let todos = Router::new()
        .route("/todos/", get(list_todos))
        .route("/todos/add/", post(create_todo))
        .route("/todos/{id}/", get(get_todo))
        .route("/todos/update/{id}/", put(update_todo))
        .route("/todos/delete/{id}/", delete(delete_todo))
        .with_state(db);
    Router::new().nest("/api", todos)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

impl Todos {
    pub fn insert(&mut self, title: impl Into<String>, completed: bool) -> Todo {
        self.last_id += 1;
        let todo = Todo {
            id: self.last_id,
            title: title.into(),
            completed,
        };
        self.items.insert(todo.id, todo.clone());
        todo
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn blank_title() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "title": ["This field may not be blank."] })),
    )
        .into_response()
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Todo not found" }))).into_response()
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let todos = db.read().await;
    Json(todos.items.values().cloned().collect())
}

async fn create_todo(State(db): State<Db>, Json(input): Json<CreateTodo>) -> Response {
    if input.title.trim().is_empty() {
        return blank_title();
    }
    let todo = db.write().await.insert(input.title, input.completed);
    debug!(id = todo.id, "created todo");
    (StatusCode::CREATED, Json(todo)).into_response()
}

async fn get_todo(State(db): State<Db>, Path(id): Path<u64>) -> Response {
    let todos = db.read().await;
    match todos.items.get(&id) {
        Some(todo) => Json(todo.clone()).into_response(),
        None => not_found(),
    }
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateTodo>,
) -> Response {
    if input.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
        return blank_title();
    }
    let mut todos = db.write().await;
    let Some(todo) = todos.items.get_mut(&id) else {
        return not_found();
    };
    if let Some(title) = input.title {
        todo.title = title;
    }
    if let Some(completed) = input.completed {
        todo.completed = completed;
    }
    Json(todo.clone()).into_response()
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<u64>) -> StatusCode {
    let mut todos = db.write().await;
    match todos.items.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT,
        None => StatusCode::NOT_FOUND,
    }
}
