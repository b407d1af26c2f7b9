use thiserror::Error;

use crate::types::Layer;

/// Failures of the simulation itself.
///
/// Collisions and wall hits are game events, not errors. These variants cover
/// grids that cannot host the entity density the rules require.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("grid {width}x{height} too small for entity density: {reason}")]
    GridTooSmall {
        width: u16,
        height: u16,
        reason: &'static str,
    },

    #[error("no free cell for a {layer} after {attempts} attempts")]
    PlacementExhausted { layer: Layer, attempts: u32 },

    #[error("invalid layout: {0}")]
    InvalidLayout(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
