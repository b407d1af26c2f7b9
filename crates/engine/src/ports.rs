//! Collaborator traits the game loop drives.
//!
//! Terminal implementations live in the `term` and `input` crates; tests use
//! in-memory fakes.

use std::time::Duration;

use anyhow::Result;

use crate::types::{Direction, Pos, ScoreTier};

/// Draws frames and banners.
///
/// Drawing calls build up a frame; nothing is shown until [`Renderer::present`].
pub trait Renderer {
    /// Surface size `(width, height)`, queried once at startup
    fn dimensions(&self) -> Result<(u16, u16)>;

    fn clear(&mut self);
    fn draw_border(&mut self);
    fn draw_avatar(&mut self, pos: Pos, direction: Direction);
    fn draw_danger_zones(&mut self, cells: &[Pos]);
    fn draw_rescue_targets(&mut self, cells: &[Pos]);
    fn draw_hud(&mut self, lives: u32, score: u32, level: u32);
    fn present(&mut self) -> Result<()>;

    /// Brief visual alert after a life is lost
    fn alert(&mut self) -> Result<()>;

    fn draw_start_banner(&mut self);
    fn draw_game_over_banner(&mut self, score: u32, tier: ScoreTier, seconds_left: u32);
}

/// Keyboard, as the game sees it.
pub trait InputSource {
    /// Latest direction pressed since the last call, without blocking
    fn poll_direction(&mut self) -> Result<Option<Direction>>;

    /// Whether quit was requested, without blocking
    fn poll_quit(&mut self) -> Result<bool>;

    /// Block until any key is pressed
    fn wait_for_key(&mut self) -> Result<()>;
}

/// The loop's only suspension point.
pub trait Pacer {
    fn pause(&mut self, duration: Duration);
}

/// Sleeps the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
