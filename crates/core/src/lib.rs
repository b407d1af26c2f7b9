//! Core game logic module - the spatial simulation
//!
//! This crate contains all the rules of the rescue game and none of the I/O.
//! It never touches the terminal, the keyboard or the clock (except to draw a
//! wall-clock seed on request), which keeps it:
//!
//! - **Testable**: scenarios are built from explicit layouts and seeds
//! - **Portable**: any renderer can consume a [`GameSnapshot`]
//!
//! # Module Structure
//!
//! - [`rng`]: LCG and the buffered position generator
//! - [`grid`]: two sparse layers, danger zones and rescue targets
//! - [`spawner`]: rejection-sampled placement with exclusion rules
//! - [`collision`]: walls, danger zones and rescues for one step
//! - [`progression`]: lives, score, level and movement delays
//! - [`game_state`]: the run, stepped by the game loop
//!
//! # Invariants
//!
//! - Exactly `max_people` rescue targets at all times
//! - Danger zones start at `initial_danger_zones` and never shrink
//! - No cell is both a danger zone and a rescue target
//! - Entities stay inside the spawn area
//!
//! # Example
//!
//! ```
//! use robo_rescue_core::{GameConfig, GameState, GridDims};
//! use robo_rescue_types::Direction;
//!
//! let mut game = GameState::new(GameConfig::default(), GridDims::new(80, 24), 12345).unwrap();
//!
//! game.steer(Direction::Left);
//! let report = game.step().unwrap();
//!
//! assert_eq!(game.grid().rescue_targets().len(), 5);
//! assert!(report.lives_lost() <= 1);
//! ```

pub mod collision;
pub mod config;
pub mod error;
pub mod game_state;
pub mod grid;
pub mod progression;
pub mod rng;
pub mod snapshot;
pub mod spawner;

pub use robo_rescue_types as types;

pub use collision::{Avatar, TickReport};
pub use config::{AvatarBounds, GameConfig, GridDims, SpawnArea};
pub use error::CoreError;
pub use game_state::{GameState, Layout};
pub use grid::{CellLayer, EntityGrid};
pub use progression::{Difficulty, Progression};
pub use rng::{clock_seed, SimpleRng};
pub use snapshot::GameSnapshot;
pub use spawner::Spawner;
