//! Game loop - one input/render/sleep/step cycle per tick
//!
//! Single-threaded and cooperative. Each tick:
//!
//! 1. Poll input without blocking; a direction key steers, otherwise the
//!    heading is kept.
//! 2. Render the current frame.
//! 3. Sleep for the difficulty-scaled delay of the current heading's axis.
//! 4. Step the simulation; each life lost triggers a renderer alert.
//!
//! The loop ends on quit or when lives reach zero.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use crate::core::{GameConfig, GameSnapshot, GameState, GridDims};
use crate::ports::{InputSource, Pacer, Renderer};
use crate::types::{ScoreTier, GAME_OVER_COUNTDOWN_SECS};

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The player pressed quit
    Quit { score: u32, level: u32 },
    /// Lives ran out
    GameOver { score: u32, level: u32 },
}

impl RunOutcome {
    pub fn score(&self) -> u32 {
        match self {
            RunOutcome::Quit { score, .. } | RunOutcome::GameOver { score, .. } => *score,
        }
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self, RunOutcome::GameOver { .. })
    }
}

pub struct GameLoop<R, I, P> {
    renderer: R,
    input: I,
    pacer: P,
    snapshot: GameSnapshot,
}

impl<R: Renderer, I: InputSource, P: Pacer> GameLoop<R, I, P> {
    pub fn new(renderer: R, input: I, pacer: P) -> Self {
        Self {
            renderer,
            input,
            pacer,
            snapshot: GameSnapshot::default(),
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    pub fn into_parts(self) -> (R, I, P) {
        (self.renderer, self.input, self.pacer)
    }

    /// Surface size from the renderer
    pub fn grid_dims(&self) -> Result<GridDims> {
        let (width, height) = self
            .renderer
            .dimensions()
            .context("failed to query terminal size")?;
        Ok(GridDims::new(width, height))
    }

    /// Full session: start screen, run, and game-over screen if lives ran out.
    pub fn play(&mut self, config: GameConfig, seed: u32) -> Result<RunOutcome> {
        let dims = self.grid_dims()?;
        let mut state = GameState::new(config, dims, seed)?;

        self.show_start_screen()?;
        let outcome = self.run(&mut state)?;
        if outcome.is_game_over() {
            self.show_game_over(outcome.score())?;
        }
        Ok(outcome)
    }

    pub fn show_start_screen(&mut self) -> Result<()> {
        self.renderer.clear();
        self.renderer.draw_start_banner();
        self.renderer.present()?;
        self.input.wait_for_key()
    }

    /// Run ticks until quit or game over.
    pub fn run(&mut self, state: &mut GameState) -> Result<RunOutcome> {
        info!(lives = state.lives(), "game loop started");

        let outcome = loop {
            if let Some(outcome) = self.tick(state)? {
                break outcome;
            }
        };

        info!(?outcome, ticks = state.ticks(), "game loop finished");
        Ok(outcome)
    }

    /// One tick. Returns the outcome once the run has ended.
    pub fn tick(&mut self, state: &mut GameState) -> Result<Option<RunOutcome>> {
        if state.is_over() {
            return Ok(Some(RunOutcome::GameOver {
                score: state.score(),
                level: state.level(),
            }));
        }

        let direction = self.input.poll_direction()?;
        if self.input.poll_quit()? {
            return Ok(Some(RunOutcome::Quit {
                score: state.score(),
                level: state.level(),
            }));
        }
        if let Some(direction) = direction {
            state.steer(direction);
        }

        self.render(state)?;
        self.pacer.pause(state.movement_delay());

        let report = state.step().context("simulation step failed")?;
        for _ in 0..report.lives_lost() {
            self.renderer.alert()?;
        }

        Ok(None)
    }

    /// Draw the current frame
    pub fn render(&mut self, state: &GameState) -> Result<()> {
        state.snapshot_into(&mut self.snapshot);
        let snap = &self.snapshot;

        self.renderer.clear();
        self.renderer.draw_border();
        self.renderer.draw_avatar(snap.avatar, snap.direction);
        self.renderer.draw_danger_zones(&snap.danger_zones);
        self.renderer.draw_rescue_targets(&snap.rescue_targets);
        self.renderer.draw_hud(snap.lives, snap.score, snap.level);
        self.renderer.present()
    }

    /// Game-over banner with a one-second countdown to exit
    pub fn show_game_over(&mut self, score: u32) -> Result<()> {
        let tier = ScoreTier::for_score(score);
        for seconds_left in (0..=GAME_OVER_COUNTDOWN_SECS).rev() {
            self.renderer.clear();
            self.renderer.draw_game_over_banner(score, tier, seconds_left);
            self.renderer.present()?;
            self.pacer.pause(Duration::from_secs(1));
        }
        Ok(())
    }
}
