//! Error types for the todo client and view store.
//!
//! # Design
//! `ApiError` is what a single request/response round trip can fail with.
//! The store never shows it verbatim: every network-side failure of one
//! operation collapses to the same user-facing message via `ViewError`, and
//! the detailed cause only goes to the log.

use thiserror::Error;

/// Errors returned by `TodoClient` parse methods and by hosts executing
/// requests.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be completed (connection refused, reset, ...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// The remote operation a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Add,
    Update,
    Delete,
}

impl Operation {
    fn context(self) -> &'static str {
        match self {
            Operation::Load => "Error loading todos",
            Operation::Add => "Error adding todo",
            Operation::Update => "Error updating todo",
            Operation::Delete => "Error deleting todo",
        }
    }

    fn failure(self) -> &'static str {
        match self {
            Operation::Load => "Failed to fetch todos",
            Operation::Add => "Failed to add todo",
            Operation::Update => "Failed to update todo",
            Operation::Delete => "Failed to delete todo",
        }
    }
}

/// Errors surfaced in the view's shared error banner.
#[derive(Debug, Error)]
pub enum ViewError {
    /// Blank title or draft; no request was issued.
    #[error("Please enter a todo title")]
    BlankTitle,

    /// Transport failure, non-success status or unreadable body.
    #[error("{}: {}", .op.context(), .op.failure())]
    Request {
        op: Operation,
        #[source]
        source: ApiError,
    },
}
