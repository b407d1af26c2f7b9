//! Robo-rescue (workspace facade crate).
//!
//! Re-exports the game's crates under one name so the binary, integration
//! tests and benches can write `robo_rescue::{core,engine,input,term,types}`.

pub mod logging;

pub use robo_rescue_core as core;
pub use robo_rescue_engine as engine;
pub use robo_rescue_input as input;
pub use robo_rescue_term as term;
pub use robo_rescue_types as types;
