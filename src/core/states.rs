//! Game state definitions.
//!
//! There is no menu, death or restart flow. The only split is between
//! loading assets and the running scene.

use bevy::prelude::*;

/// Top-level game state.
///
/// - Start in `Loading` while textures load
/// - Move to `Playing` once every texture is loaded or has failed
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Waiting on textures
    #[default]
    Loading,
    /// The scene is running
    Playing,
}
