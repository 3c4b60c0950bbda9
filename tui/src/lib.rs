//! Terminal host for the todo view core.
//!
//! Owns the pieces `todo-core` leaves to its host: executing HTTP requests,
//! the event loop, key bindings and drawing.

pub mod app;
pub mod error;
pub mod event;
pub mod logging;
pub mod terminal;
pub mod transport;
pub mod ui;

pub use app::{App, Focus};
pub use error::{Result, TuiError};
pub use transport::{Completed, Transport};
