//! Error types for todo-tui.
//!
//! Request failures never reach this type: they end up in the view's error
//! banner. Only terminal and runtime setup can abort the program.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TuiError {
    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// The request runtime could not be started
    #[error("Runtime error: {0}")]
    Runtime(String),
}

pub type Result<T> = std::result::Result<T, TuiError>;
