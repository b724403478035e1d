//! Player plugin - bird spawning, input and animation.

use bevy::prelude::*;

use super::flight;

/// Player plugin - handles the bird.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        flight::setup_flight_systems(app);
    }
}
