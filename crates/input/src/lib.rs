//! Terminal input module.
//!
//! Maps `crossterm` key events to avatar headings and the quit request, and
//! provides [`TerminalInput`], the non-blocking [`engine::InputSource`] the
//! binary plays with.

pub mod map;
pub mod terminal;

pub use robo_rescue_engine as engine;
pub use robo_rescue_types as types;

pub use map::{direction_for_key, should_quit};
pub use terminal::{KeyLatch, TerminalInput};
