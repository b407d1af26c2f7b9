//! Game loop engine.
//!
//! Orchestrates a run against three collaborators: a [`Renderer`], an
//! [`InputSource`] and a [`Pacer`]. The simulation itself lives in `core`;
//! the terminal implementations live in `term` and `input`.

pub mod game_loop;
pub mod ports;

pub use robo_rescue_core as core;
pub use robo_rescue_types as types;

pub use game_loop::{GameLoop, RunOutcome};
pub use ports::{InputSource, Pacer, Renderer, ThreadPacer};
