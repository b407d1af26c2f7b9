//! Non-blocking keyboard source backed by crossterm.
//!
//! Pending terminal events are drained into a [`KeyLatch`] on every poll, so
//! the game sees the most recent heading and never misses a quit key that
//! arrived alongside direction keys.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::engine::InputSource;
use crate::map::{direction_for_key, should_quit};
use crate::types::Direction;

/// Key state accumulated between polls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyLatch {
    direction: Option<Direction>,
    quit: bool,
}

impl KeyLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one key event. Releases are ignored; auto-repeat counts as a press.
    pub fn feed(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        if should_quit(key) {
            self.quit = true;
        } else if let Some(direction) = direction_for_key(key) {
            self.direction = Some(direction);
        }
    }

    /// Latest heading since the previous call
    pub fn take_direction(&mut self) -> Option<Direction> {
        self.direction.take()
    }

    /// Quit is sticky once seen
    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}

#[derive(Debug, Default)]
pub struct TerminalInput {
    latch: KeyLatch,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain every event already queued, without waiting.
    fn pump(&mut self) -> Result<()> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                self.latch.feed(key);
            }
        }
        Ok(())
    }
}

impl InputSource for TerminalInput {
    fn poll_direction(&mut self) -> Result<Option<Direction>> {
        self.pump()?;
        Ok(self.latch.take_direction())
    }

    fn poll_quit(&mut self) -> Result<bool> {
        self.pump()?;
        Ok(self.latch.quit_requested())
    }

    fn wait_for_key(&mut self) -> Result<()> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Release {
                    return Ok(());
                }
            }
        }
    }
}
