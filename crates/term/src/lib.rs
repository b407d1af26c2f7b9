//! Terminal rendering for the rescue game.
//!
//! A small, game-oriented rendering layer: everything is drawn into a
//! framebuffer of styled cells, then flushed to the terminal with crossterm.
//!
//! - [`fb`]: framebuffer and styles
//! - [`game_view`]: pure drawing of playfield, HUD and banners
//! - [`backend`]: raw-mode setup and diffed flushing
//! - [`screen`]: [`TerminalScreen`], the engine's `Renderer`

pub mod backend;
pub mod fb;
pub mod game_view;
pub mod screen;

pub use robo_rescue_core as core;
pub use robo_rescue_engine as engine;
pub use robo_rescue_types as types;

pub use backend::{encode_diff_into, encode_full_into, TerminalBackend};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Palette, AVATAR_GLYPH, DANGER_GLYPH, PERSON_GLYPH};
pub use screen::TerminalScreen;
