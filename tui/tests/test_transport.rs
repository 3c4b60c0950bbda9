//! Transport against the live mock server: requests run off the calling
//! thread and come back through the completion channel.

use std::time::{Duration, Instant};

use todo_core::{Completion, TodoClient, TodoStore};
use todo_tui::{App, Completed, Transport};

const WAIT: Duration = Duration::from_secs(5);

/// Polls the completion channel the way the event loop does.
fn next_completed(transport: &Transport) -> Option<Completed> {
    let deadline = Instant::now() + WAIT;
    while Instant::now() < deadline {
        if let Some(done) = transport.drain().into_iter().next() {
            return Some(done);
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    None
}

fn spawn_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}/api")
}

#[test]
fn mount_add_and_reload_through_transport() {
    let transport = Transport::new().unwrap();
    let (store, initial) = TodoStore::mount(TodoClient::new(&spawn_server()));
    let mut app = App::new(store);

    transport.spawn(initial);
    let done = next_completed(&transport).expect("initial load");
    assert_eq!(done.completion, Completion::Load);
    app.complete(done.completion, done.outcome);
    assert!(!app.store().state().loading);

    for c in "Buy milk".chars() {
        app.handle_key(crossterm::event::KeyEvent::from(crossterm::event::KeyCode::Char(c)));
    }
    let pending = app
        .handle_key(crossterm::event::KeyEvent::from(crossterm::event::KeyCode::Enter))
        .expect("create request");
    transport.spawn(pending);
    let done = next_completed(&transport).expect("create");
    app.complete(done.completion, done.outcome);

    let state = app.store().state();
    assert_eq!(state.todos.len(), 1);
    assert_eq!(state.todos[0].title, "Buy milk");
    assert!(!state.todos[0].completed);
    assert!(state.error.is_none());
    assert!(transport.drain().is_empty());

    transport.shutdown();
}

#[test]
fn unreachable_server_reports_transport_failure() {
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let transport = Transport::new().unwrap();
    let (store, initial) = TodoStore::mount(TodoClient::new(&format!("http://{addr}/api")));
    let mut app = App::new(store);

    transport.spawn(initial);
    let done = next_completed(&transport).expect("load outcome");
    assert!(matches!(done.outcome, Err(todo_core::ApiError::Transport(_))));
    app.complete(done.completion, done.outcome);
    assert_eq!(
        app.store().state().error.as_deref(),
        Some("Error loading todos: Failed to fetch todos")
    );
}
