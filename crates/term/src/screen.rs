//! TerminalScreen: the terminal implementation of [`Renderer`].
//!
//! Drawing calls go into an in-memory framebuffer through [`GameView`];
//! `present` hands it to the [`TerminalBackend`], which only rewrites the
//! cells that changed since the last frame.

use std::time::Duration;

use anyhow::{Context, Result};

use crate::backend::TerminalBackend;
use crate::engine::Renderer;
use crate::fb::FrameBuffer;
use crate::game_view::GameView;
use crate::types::{Direction, Pos, ScoreTier, ALERT_FLASH_MS};

pub struct TerminalScreen {
    backend: TerminalBackend,
    view: GameView,
    fb: FrameBuffer,
}

impl TerminalScreen {
    /// Size the frame to the current terminal.
    pub fn new() -> Result<Self> {
        let backend = TerminalBackend::new();
        let (width, height) = backend.size().context("terminal size unavailable")?;
        Ok(Self {
            backend,
            view: GameView::default(),
            fb: FrameBuffer::new(width, height),
        })
    }

    /// Switch the terminal into game mode.
    pub fn enter(&mut self) -> Result<()> {
        self.backend.enter()
    }

    /// Restore the terminal.
    pub fn exit(&mut self) -> Result<()> {
        self.backend.exit()
    }
}

impl Renderer for TerminalScreen {
    fn dimensions(&self) -> Result<(u16, u16)> {
        Ok((self.fb.width(), self.fb.height()))
    }

    fn clear(&mut self) {
        self.fb.clear();
    }

    fn draw_border(&mut self) {
        self.view.draw_border(&mut self.fb);
    }

    fn draw_avatar(&mut self, pos: Pos, direction: Direction) {
        self.view.draw_avatar(&mut self.fb, pos, direction);
    }

    fn draw_danger_zones(&mut self, cells: &[Pos]) {
        self.view.draw_danger_zones(&mut self.fb, cells);
    }

    fn draw_rescue_targets(&mut self, cells: &[Pos]) {
        self.view.draw_rescue_targets(&mut self.fb, cells);
    }

    fn draw_hud(&mut self, lives: u32, score: u32, level: u32) {
        self.view.draw_hud(&mut self.fb, lives, score, level);
    }

    fn present(&mut self) -> Result<()> {
        self.backend.flush_frame(&self.fb)
    }

    fn alert(&mut self) -> Result<()> {
        self.fb.clear();
        self.view.draw_alert_border(&mut self.fb);
        self.present()?;
        std::thread::sleep(Duration::from_millis(ALERT_FLASH_MS));

        self.fb.clear();
        self.view.draw_border(&mut self.fb);
        self.present()
    }

    fn draw_start_banner(&mut self) {
        self.view.draw_start_banner(&mut self.fb);
    }

    fn draw_game_over_banner(&mut self, score: u32, tier: ScoreTier, seconds_left: u32) {
        self.view.draw_game_over_banner(&mut self.fb, score, tier, seconds_left);
    }
}
