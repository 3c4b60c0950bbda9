//! todo-tui: terminal todo list against the remote todo API.

use todo_core::{TodoClient, TodoStore};
use todo_tui::{
    error::Result,
    event::{EventHandler, TuiEvent},
    logging,
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui, App, Transport,
};

fn main() -> Result<()> {
    logging::init();
    install_panic_hook();

    let transport = Transport::new()?;
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, &transport);
    // In-flight requests may never finish; do not wait for them.
    transport.shutdown();
    restore_terminal(terminal)?;

    result
}

fn run_app(terminal: &mut Tui, transport: &Transport) -> Result<()> {
    let client = TodoClient::from_build_config();
    tracing::info!(base_url = client.base_url(), "starting");

    let (store, initial_load) = TodoStore::mount(client);
    let mut app = App::new(store);
    transport.spawn(initial_load);

    let events = EventHandler::default();
    while !app.should_quit() {
        terminal.draw(|frame| ui::render(frame, &app))?;

        if let TuiEvent::Key(key) = events.next()? {
            if let Some(pending) = app.handle_key(key) {
                transport.spawn(pending);
            }
        }

        for done in transport.drain() {
            app.complete(done.completion, done.outcome);
        }
    }

    Ok(())
}
