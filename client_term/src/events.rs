//! Terminal implementation of the game's timing and input source

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind, MouseEventKind};
use game_core::{DisplayError, EventSource};
use tracing::debug;

use crate::input::{classify, KeyAction};
use crate::viewport::Viewport;

/// Reads crossterm events while the game waits between ticks
pub struct TerminalEvents {
    viewport: Rc<Cell<Viewport>>,
}

impl TerminalEvents {
    pub fn new(viewport: Rc<Cell<Viewport>>) -> Self {
        Self { viewport }
    }

    fn resize(&self, cols: u16, rows: u16) {
        let mut viewport = self.viewport.get();
        viewport.resize(cols, rows);
        self.viewport.set(viewport);
        debug!(cols, rows, "terminal resized");
    }
}

impl EventSource for TerminalEvents {
    fn wait(&mut self, delay: Duration) -> Result<Vec<String>, DisplayError> {
        let deadline = Instant::now() + delay;
        let mut keys = Vec::new();

        // Keep reading until the deadline passes and nothing is pending
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => match classify(&key) {
                    KeyAction::Press(name) => keys.push(name),
                    KeyAction::Quit => return Err(DisplayError::Closed),
                    KeyAction::Ignore => {}
                },
                Event::Resize(cols, rows) => self.resize(cols, rows),
                _ => {}
            }
        }

        Ok(keys)
    }

    fn await_dismissal(&mut self) -> Result<(), DisplayError> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(()),
                Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
                    return Ok(())
                }
                Event::Resize(cols, rows) => self.resize(cols, rows),
                _ => {}
            }
        }
    }
}
