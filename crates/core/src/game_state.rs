//! Game state module - owns everything one run mutates
//!
//! Ties together the entity grid, spawner, progression and avatar. The game
//! loop drives it with [`GameState::steer`] and [`GameState::step`]; pacing and
//! rendering live outside.

use std::time::Duration;

use tracing::info;

use crate::collision::{resolve_hazards, resolve_walls, Avatar, TickReport};
use crate::config::{AvatarBounds, GameConfig, GridDims};
use crate::error::{CoreError, Result};
use crate::grid::EntityGrid;
use crate::progression::Progression;
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::spawner::Spawner;
use crate::types::{Direction, Layer, Pos};

/// Hand-built starting position, for scenarios and tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub avatar: Avatar,
    pub danger_zones: Vec<Pos>,
    pub rescue_targets: Vec<Pos>,
}

#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    dims: GridDims,
    bounds: AvatarBounds,
    avatar: Avatar,
    grid: EntityGrid,
    spawner: Spawner,
    progression: Progression,
    /// Steps taken so far
    ticks: u64,
}

impl GameState {
    /// Start a run on a `dims` surface.
    ///
    /// Danger zones are placed before rescue targets so the targets can avoid them.
    pub fn new(config: GameConfig, dims: GridDims, seed: u32) -> Result<Self> {
        dims.validate(&config)?;

        let mut spawner = Spawner::new(
            SimpleRng::new(seed),
            dims.spawn_area(&config),
            config.max_placement_attempts,
        );
        let mut grid = EntityGrid::new();
        spawner.place_danger_zones(&mut grid, config.initial_danger_zones)?;
        spawner.replenish_rescue_targets(&mut grid, config.max_people)?;

        let avatar = Avatar::new(dims.start_cell(), Direction::Up);
        info!(
            width = dims.width,
            height = dims.height,
            seed,
            "run started"
        );

        Ok(Self {
            bounds: dims.avatar_bounds(&config),
            progression: Progression::new(&config),
            config,
            dims,
            avatar,
            grid,
            spawner,
            ticks: 0,
        })
    }

    /// Start a run from an explicit layout.
    ///
    /// The layout must satisfy the same invariants a spawned run does.
    pub fn with_layout(
        config: GameConfig,
        dims: GridDims,
        seed: u32,
        layout: Layout,
    ) -> Result<Self> {
        dims.validate(&config)?;

        let bounds = dims.avatar_bounds(&config);
        let area = dims.spawn_area(&config);
        if !bounds.contains(layout.avatar.pos) {
            return Err(CoreError::InvalidLayout(format!(
                "avatar {:?} outside the border",
                layout.avatar.pos
            )));
        }
        if layout.rescue_targets.len() != config.max_people {
            return Err(CoreError::InvalidLayout(format!(
                "expected {} rescue targets, got {}",
                config.max_people,
                layout.rescue_targets.len()
            )));
        }
        if layout.danger_zones.len() < config.initial_danger_zones {
            return Err(CoreError::InvalidLayout(format!(
                "expected at least {} danger zones, got {}",
                config.initial_danger_zones,
                layout.danger_zones.len()
            )));
        }

        let mut grid = EntityGrid::new();
        for (layer, cells) in [
            (Layer::DangerZone, &layout.danger_zones),
            (Layer::RescueTarget, &layout.rescue_targets),
        ] {
            for &pos in cells {
                if !area.contains(pos) {
                    return Err(CoreError::InvalidLayout(format!(
                        "{} {:?} outside the spawn area",
                        layer, pos
                    )));
                }
                if grid.is_occupied(pos) {
                    return Err(CoreError::InvalidLayout(format!("cell {:?} used twice", pos)));
                }
                grid.layer_mut(layer).insert(pos);
            }
        }

        Ok(Self {
            spawner: Spawner::new(SimpleRng::new(seed), area, config.max_placement_attempts),
            progression: Progression::new(&config),
            config,
            dims,
            bounds,
            avatar: layout.avatar,
            grid,
            ticks: 0,
        })
    }

    /// Override lives, score and level (mid-run scenarios)
    pub fn with_counters(mut self, lives: u32, score: u32, level: u32) -> Self {
        self.progression = self.progression.with_counters(lives, score, level);
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn dims(&self) -> GridDims {
        self.dims
    }

    pub fn avatar(&self) -> Avatar {
        self.avatar
    }

    pub fn grid(&self) -> &EntityGrid {
        &self.grid
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    pub fn lives(&self) -> u32 {
        self.progression.lives()
    }

    pub fn score(&self) -> u32 {
        self.progression.score()
    }

    pub fn level(&self) -> u32 {
        self.progression.level()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_over(&self) -> bool {
        self.progression.is_over()
    }

    /// Point the avatar in a new direction; applies from the next step
    pub fn steer(&mut self, direction: Direction) {
        self.avatar.direction = direction;
    }

    /// Pause the loop takes before the next step
    pub fn movement_delay(&self) -> Duration {
        self.progression.movement_delay(self.avatar.direction)
    }

    /// Advance one step: move (with wall bounces), then danger, then rescue.
    ///
    /// A finished run does not move.
    pub fn step(&mut self) -> Result<TickReport> {
        let mut report = TickReport::new();
        if self.is_over() {
            return Ok(report);
        }

        resolve_walls(
            &mut self.avatar,
            &self.bounds,
            &mut self.progression,
            &mut report,
        );
        resolve_hazards(
            self.avatar.pos,
            &mut self.grid,
            &mut self.spawner,
            &mut self.progression,
            &self.config,
            &mut report,
        )?;

        self.ticks += 1;
        if self.is_over() {
            info!(
                score = self.score(),
                level = self.level(),
                ticks = self.ticks,
                "out of lives"
            );
        }
        Ok(report)
    }

    /// Fill `snap` with the current state, reusing its allocations
    pub fn snapshot_into(&self, snap: &mut GameSnapshot) {
        snap.dims = self.dims;
        snap.avatar = self.avatar.pos;
        snap.direction = self.avatar.direction;
        self.grid.danger_zones().sorted_into(&mut snap.danger_zones);
        self.grid.rescue_targets().sorted_into(&mut snap.rescue_targets);
        snap.lives = self.lives();
        snap.score = self.score();
        snap.level = self.level();
        snap.difficulty = self.progression.difficulty();
        snap.game_over = self.is_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
