//! Config module - gameplay tunables and grid geometry
//!
//! `GameConfig::default()` is the shipped game. Tests build smaller configs to
//! exercise edge cases on tiny grids.

use std::time::Duration;

use crate::error::{CoreError, Result};
use crate::types::*;

/// All gameplay tunables for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub initial_lives: u32,
    pub rescue_score: u32,
    pub rescues_per_level: u32,
    pub max_people: usize,
    pub initial_danger_zones: usize,
    pub danger_zones_per_rescue: usize,
    pub x_buffer: i32,
    pub y_buffer: i32,
    pub border_inset: i32,
    pub initial_x_delay_us: u64,
    pub initial_y_delay_us: u64,
    pub min_x_delay_us: u64,
    pub min_y_delay_us: u64,
    pub delay_step_us: u64,
    pub max_placement_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_lives: INITIAL_LIVES,
            rescue_score: RESCUE_SCORE,
            rescues_per_level: RESCUES_PER_LEVEL,
            max_people: MAX_PEOPLE,
            initial_danger_zones: INITIAL_DANGER_ZONES,
            danger_zones_per_rescue: DANGER_ZONES_PER_RESCUE,
            x_buffer: X_BUFFER,
            y_buffer: Y_BUFFER,
            border_inset: BORDER_INSET,
            initial_x_delay_us: INITIAL_X_DELAY_US,
            initial_y_delay_us: INITIAL_Y_DELAY_US,
            min_x_delay_us: MIN_X_DELAY_US,
            min_y_delay_us: MIN_Y_DELAY_US,
            delay_step_us: DELAY_STEP_US,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Score needed to leave `level`
    pub fn level_threshold(&self, level: u32) -> u32 {
        level
            .saturating_mul(self.rescues_per_level)
            .saturating_mul(self.rescue_score)
    }

    pub fn initial_x_delay(&self) -> Duration {
        Duration::from_micros(self.initial_x_delay_us)
    }

    pub fn initial_y_delay(&self) -> Duration {
        Duration::from_micros(self.initial_y_delay_us)
    }
}

/// Terminal surface size, captured once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridDims {
    pub width: u16,
    pub height: u16,
}

impl GridDims {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Region entities may spawn in
    pub fn spawn_area(&self, config: &GameConfig) -> SpawnArea {
        SpawnArea {
            x_buffer: config.x_buffer,
            y_buffer: config.y_buffer,
            width: self.width as i32,
            height: self.height as i32,
        }
    }

    /// Region the avatar may occupy
    pub fn avatar_bounds(&self, config: &GameConfig) -> AvatarBounds {
        AvatarBounds {
            min_x: config.border_inset,
            min_y: config.border_inset,
            max_x: self.width as i32 - config.border_inset,
            max_y: self.height as i32 - config.border_inset,
        }
    }

    /// Avatar start cell: horizontally centred, a few rows above the bottom
    pub fn start_cell(&self) -> Pos {
        Pos::new(
            (self.width as i32 - 2) / 2,
            self.height as i32 - START_ROW_FROM_BOTTOM,
        )
    }

    /// Reject surfaces the rules cannot be played on.
    ///
    /// The spawn area must hold the initial entities plus the danger zones the
    /// first rescue adds, and the avatar start cell must be in bounds.
    pub fn validate(&self, config: &GameConfig) -> Result<()> {
        let too_small = |reason| CoreError::GridTooSmall {
            width: self.width,
            height: self.height,
            reason,
        };

        let area = self.spawn_area(config);
        if area.columns() <= 0 || area.rows() <= 0 {
            return Err(too_small("spawn area is empty"));
        }

        let needed =
            config.initial_danger_zones + config.max_people + config.danger_zones_per_rescue;
        if area.cell_count() < needed {
            return Err(too_small("spawn area cannot hold the initial entities"));
        }

        if !self.avatar_bounds(config).contains(self.start_cell()) {
            return Err(too_small("avatar start cell is outside the border"));
        }

        Ok(())
    }
}

/// Entity spawn region: `[x_buffer, width - x_buffer) x [y_buffer, height - y_buffer)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnArea {
    pub x_buffer: i32,
    pub y_buffer: i32,
    pub width: i32,
    pub height: i32,
}

impl SpawnArea {
    pub fn columns(&self) -> i32 {
        self.width - 2 * self.x_buffer
    }

    pub fn rows(&self) -> i32 {
        self.height - 2 * self.y_buffer
    }

    pub fn cell_count(&self) -> usize {
        (self.columns().max(0) as usize) * (self.rows().max(0) as usize)
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.x >= self.x_buffer
            && pos.x < self.width - self.x_buffer
            && pos.y >= self.y_buffer
            && pos.y < self.height - self.y_buffer
    }
}

/// Avatar region: `[min_x, max_x) x [min_y, max_y)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvatarBounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl AvatarBounds {
    pub fn contains_x(&self, x: i32) -> bool {
        x >= self.min_x && x < self.max_x
    }

    pub fn contains_y(&self, y: i32) -> bool {
        y >= self.min_y && y < self.max_y
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.contains_x(pos.x) && self.contains_y(pos.y)
    }
}
