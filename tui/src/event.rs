//! Terminal event polling.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

/// How long one poll waits before yielding a tick, so finished requests get
/// applied and redrawn even when the user is idle.
pub const TICK_RATE: Duration = Duration::from_millis(50);

#[derive(Debug, Clone)]
pub enum TuiEvent {
    Key(KeyEvent),
    /// The next draw picks up the new size.
    Resize,
    Tick,
}

pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Blocks up to the tick rate for the next terminal event.
    pub fn next(&self) -> std::io::Result<TuiEvent> {
        if !event::poll(self.tick_rate)? {
            return Ok(TuiEvent::Tick);
        }
        match event::read()? {
            // Some platforms also report releases; act on presses only.
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Ok(TuiEvent::Key(key)),
            CrosstermEvent::Resize(..) => Ok(TuiEvent::Resize),
            _ => Ok(TuiEvent::Tick),
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(TICK_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_tick_rate() {
        assert_eq!(EventHandler::default().tick_rate, TICK_RATE);
    }
}
