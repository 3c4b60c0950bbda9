//! Logging setup.
//!
//! The UI owns the terminal, so nothing is logged unless `RUST_LOG` is set.
//! When it is, plain-text events go to stderr; redirect it to a file, e.g.
//! `RUST_LOG=todo_core=debug todo-tui 2>todo.log`.

use tracing_subscriber::EnvFilter;

pub fn init() {
    let Ok(filter) = EnvFilter::try_from_default_env() else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .init();
}
