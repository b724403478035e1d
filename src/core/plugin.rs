//! Core plugin that sets up game states, events, and texture loading.

use bevy::prelude::*;

use super::assets::*;
use super::config::log_config_source;
use super::events::*;
use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, Playing)
/// - Global events (FlapEvent, BirdContactEvent)
/// - Texture loading and the transition into the scene
///
/// `GameConfig` and `ConfigSource` are inserted by the binary before the
/// app is built, since the window and physics scale depend on them.
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()

            // Register global events
            .add_event::<FlapEvent>()
            .add_event::<BirdContactEvent>()

            .add_systems(Startup, log_config_source)

            // Loading state - wait for textures before building the scene
            .add_systems(OnEnter(GameState::Loading), load_textures)
            .add_systems(
                Update,
                check_textures_loaded.run_if(in_state(GameState::Loading)),
            );
    }
}
