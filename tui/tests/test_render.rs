//! Rendering into ratatui's `TestBackend`.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{backend::TestBackend, Terminal};
use todo_core::{ApiError, Completion, HttpResponse, TodoClient, TodoId, TodoStore};
use todo_tui::{ui, App};

fn draw(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(70, 16)).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|line| line.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn ok(body: &str) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse {
        status: 200,
        headers: Vec::new(),
        body: body.to_string(),
    })
}

#[test]
fn shows_loading_until_first_response() {
    let (store, pending) = TodoStore::mount(TodoClient::new("http://api.test"));
    let mut app = App::new(store);
    assert!(draw(&app).contains("Loading todos..."));

    app.complete(pending.completion, ok("[]"));
    let screen = draw(&app);
    assert!(!screen.contains("Loading todos..."));
    assert!(screen.contains("No todos yet. Add one above!"));
    assert!(screen.contains("Add a new todo..."));
}

#[test]
fn rows_render_in_server_order_with_checkboxes() {
    let (store, pending) = TodoStore::mount(TodoClient::new("http://api.test"));
    let mut app = App::new(store);
    app.complete(
        pending.completion,
        ok(r#"[{"id":2,"title":"Walk dog","completed":true},{"id":1,"title":"Buy milk","completed":false}]"#),
    );

    let screen = draw(&app);
    let walk = screen.find("[x] Walk dog").expect("completed row");
    let milk = screen.find("[ ] Buy milk").expect("open row");
    assert!(walk < milk);
}

fn loaded_app() -> App {
    let (store, pending) = TodoStore::mount(TodoClient::new("http://api.test"));
    let mut app = App::new(store);
    app.complete(pending.completion, ok(r#"[{"id":1,"title":"Buy milk","completed":false}]"#));
    app
}

#[test]
fn error_banner_shows_generic_message_only() {
    let mut app = loaded_app();
    app.complete(
        Completion::Toggle(TodoId(1)),
        Err(ApiError::Transport("connection refused".into())),
    );

    let screen = draw(&app);
    assert!(screen.contains("Error updating todo: Failed to update todo"));
    assert!(!screen.contains("connection refused"));
    assert!(screen.contains("[ ] Buy milk"));
}

#[test]
fn edit_row_replaces_static_text() {
    let mut app = loaded_app();
    app.handle_key(KeyEvent::from(KeyCode::Tab));
    app.handle_key(KeyEvent::from(KeyCode::Char('e')));
    app.handle_key(KeyEvent::from(KeyCode::Char('!')));

    let screen = draw(&app);
    assert!(screen.contains("Buy milk!"));
    assert!(screen.contains("Enter: Save  Esc: Cancel"));
    assert!(screen.contains("Enter: save | Esc: cancel"));
}
