//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, terminal rendering, input mapping).
//!
//! # Grid Coordinates
//!
//! The grid is the whole terminal surface, `(x, y)` with `x` growing to the right
//! and `y` growing downwards. Two insets apply:
//!
//! - **Avatar bounds**: `[BORDER_INSET, width - BORDER_INSET)` on each axis
//! - **Entity region**: `[X_BUFFER, width - X_BUFFER)` x `[Y_BUFFER, height - Y_BUFFER)`
//!
//! # Gameplay Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_LIVES` | 3 | Lives at run start |
//! | `RESCUE_SCORE` | 10 | Points per rescued person |
//! | `MAX_PEOPLE` | 5 | People on screen at all times |
//! | `INITIAL_DANGER_ZONES` | 2 | Danger zones at run start |
//! | `DANGER_ZONES_PER_RESCUE` | 2 | Danger zones added on every rescue |
//! | `RESCUES_PER_LEVEL` | 5 | Level threshold is `level * 5 * RESCUE_SCORE` |
//!
//! # Movement Delays
//!
//! Delays are in microseconds. Horizontal movement is faster than vertical
//! because terminal cells are taller than they are wide.
//!
//! | Axis | Initial | Floor |
//! |------|---------|-------|
//! | Horizontal | 70 000 | 30 000 |
//! | Vertical | 120 000 | 80 000 |
//!
//! Every level-up lowers both delays by `DELAY_STEP_US` (5 000), clamped at the floor.
//!
//! # Examples
//!
//! ```
//! use robo_rescue_types::{Direction, Pos, ScoreTier};
//!
//! let pos = Pos::new(10, 10);
//! assert_eq!(pos.step(Direction::Left), Pos::new(9, 10));
//! assert_eq!(Direction::Up.delta(), (0, -1));
//!
//! assert_eq!(ScoreTier::for_score(160), ScoreTier::Valiant);
//! ```

/// Lives at the start of a run
pub const INITIAL_LIVES: u32 = 3;

/// Level at the start of a run
pub const INITIAL_LEVEL: u32 = 1;

/// Points awarded per rescued person
pub const RESCUE_SCORE: u32 = 10;

/// Number of people visible on screen at any time
pub const MAX_PEOPLE: usize = 5;

/// Danger zones placed at run start
pub const INITIAL_DANGER_ZONES: usize = 2;

/// Danger zones added on every rescue
pub const DANGER_ZONES_PER_RESCUE: usize = 2;

/// Rescues needed per level (threshold = `level * RESCUES_PER_LEVEL * RESCUE_SCORE`)
pub const RESCUES_PER_LEVEL: u32 = 5;

/// Horizontal spawn margin for entities (columns from each edge)
pub const X_BUFFER: i32 = 4;

/// Vertical spawn margin for entities (rows from each edge)
pub const Y_BUFFER: i32 = 5;

/// Avatar bound inset from each edge of the surface
pub const BORDER_INSET: i32 = 2;

/// Avatar start row, counted up from the bottom edge
pub const START_ROW_FROM_BOTTOM: i32 = 5;

/// Initial horizontal movement delay (microseconds)
pub const INITIAL_X_DELAY_US: u64 = 70_000;

/// Initial vertical movement delay (microseconds)
pub const INITIAL_Y_DELAY_US: u64 = 120_000;

/// Horizontal delay floor (microseconds)
pub const MIN_X_DELAY_US: u64 = 30_000;

/// Vertical delay floor (microseconds)
pub const MIN_Y_DELAY_US: u64 = 80_000;

/// Delay reduction per level-up (microseconds)
pub const DELAY_STEP_US: u64 = 5_000;

/// Rejection-sampling cap before a placement is declared impossible
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

/// Screen flash duration on life loss
pub const ALERT_FLASH_MS: u64 = 100;

/// Seconds the game-over screen counts down before exiting
pub const GAME_OVER_COUNTDOWN_SECS: u32 = 5;


/// A grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `dir`
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Grid axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Avatar heading
///
/// Always axis-aligned; there are no diagonal headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Left,
    Right,
    #[default]
    Up,
    Down,
}

impl Direction {
    /// Unit step `(dx, dy)` for this heading
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    /// Whether this heading moves along the x axis
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Invert the component along `axis`
    ///
    /// A heading with no component on `axis` is returned unchanged.
    pub fn bounced(self, axis: Axis) -> Self {
        match (axis, self) {
            (Axis::Horizontal, Direction::Left) => Direction::Right,
            (Axis::Horizontal, Direction::Right) => Direction::Left,
            (Axis::Vertical, Direction::Up) => Direction::Down,
            (Axis::Vertical, Direction::Down) => Direction::Up,
            (_, d) => d,
        }
    }
}

/// The two sparse entity layers on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    DangerZone,
    RescueTarget,
}

impl Layer {
    pub fn as_str(self) -> &'static str {
        match self {
            Layer::DangerZone => "danger zone",
            Layer::RescueTarget => "rescue target",
        }
    }
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something observable that happened during one tick.
///
/// Emitted by the simulation so the game loop can drive alerts without
/// diffing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The avatar tried to leave the bounds on `Axis` and bounced
    WallHit(Axis),
    /// The avatar stepped onto a danger zone at this cell
    DangerHit(Pos),
    /// The avatar rescued the person at this cell
    Rescued(Pos),
    /// Level advanced to the contained value
    LevelUp(u32),
}

impl GameEvent {
    /// Whether this event cost the player a life
    pub fn costs_life(&self) -> bool {
        matches!(self, GameEvent::WallHit(_) | GameEvent::DangerHit(_))
    }
}

/// Verdict shown on the game-over screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    TryAgain,
    NotBad,
    Valiant,
}

impl ScoreTier {
    pub fn for_score(score: u32) -> Self {
        if score >= 150 {
            ScoreTier::Valiant
        } else if score >= 50 {
            ScoreTier::NotBad
        } else {
            ScoreTier::TryAgain
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ScoreTier::Valiant => "Valiant effort, soldier. Impressive",
            ScoreTier::NotBad => "Not bad, soldier. Well done",
            ScoreTier::TryAgain => "You can do better, soldier. Try again",
        }
    }
}
