//! Progression - lives, score, level and movement delays
//!
//! Difficulty lives here rather than in globals: the game loop reads the
//! current delay from [`Progression::movement_delay`] every tick.

use std::time::Duration;

use tracing::info;

use crate::config::GameConfig;
use crate::types::{Direction, INITIAL_LEVEL};

/// Per-axis movement delays in microseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Difficulty {
    pub horizontal_us: u64,
    pub vertical_us: u64,
}

impl Difficulty {
    pub fn initial(config: &GameConfig) -> Self {
        Self {
            horizontal_us: config.initial_x_delay_us,
            vertical_us: config.initial_y_delay_us,
        }
    }

    /// Lower both delays by one step, each clamped at its own floor
    pub fn speed_up(&mut self, config: &GameConfig) {
        self.horizontal_us = self
            .horizontal_us
            .saturating_sub(config.delay_step_us)
            .max(config.min_x_delay_us);
        self.vertical_us = self
            .vertical_us
            .saturating_sub(config.delay_step_us)
            .max(config.min_y_delay_us);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progression {
    lives: u32,
    score: u32,
    level: u32,
    difficulty: Difficulty,
}

impl Progression {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            lives: config.initial_lives,
            score: 0,
            level: INITIAL_LEVEL,
            difficulty: Difficulty::initial(config),
        }
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Terminal once lives run out
    pub fn is_over(&self) -> bool {
        self.lives == 0
    }

    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    /// Award one rescue and advance the level if the threshold is reached.
    ///
    /// Returns the new level on a level-up. Score is cumulative and never
    /// resets; at most one level is gained per rescue.
    pub fn record_rescue(&mut self, config: &GameConfig) -> Option<u32> {
        self.score = self.score.saturating_add(config.rescue_score);

        if self.score < config.level_threshold(self.level) {
            return None;
        }

        self.level += 1;
        self.difficulty.speed_up(config);
        info!(
            level = self.level,
            score = self.score,
            x_delay_us = self.difficulty.horizontal_us,
            y_delay_us = self.difficulty.vertical_us,
            "level up"
        );
        Some(self.level)
    }

    /// Pause before the next step: horizontal delay when moving sideways
    pub fn movement_delay(&self, direction: Direction) -> Duration {
        if direction.is_horizontal() {
            Duration::from_micros(self.difficulty.horizontal_us)
        } else {
            Duration::from_micros(self.difficulty.vertical_us)
        }
    }

    /// Overwrite the counters, for building mid-run scenarios
    pub fn with_counters(mut self, lives: u32, score: u32, level: u32) -> Self {
        self.lives = lives;
        self.score = score;
        self.level = level.max(INITIAL_LEVEL);
        self
    }
}
