//! Todo list view core.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), and keeps the view state of
//! a todo list component: the items, the input field, the loading flag, the
//! shared error banner and the single inline-edit session.
//!
//! # Design
//! - `TodoClient` is stateless and holds only `base_url`.
//! - Each CRUD operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - `TodoStore` turns user intents into `PendingRequest`s and applies the
//!   host-reported outcomes; `view::render` maps its state to a view tree.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod store;
pub mod types;
pub mod view;

pub use client::TodoClient;
pub use error::{ApiError, Operation, ViewError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use store::{Completion, EditSession, Outcome, PendingRequest, TodoStore, ViewState};
pub use types::{CreateTodo, Todo, TodoId, UpdateTodo};
pub use view::{render, Body, InputRow, Row, RowContent, UiEvent, View};
