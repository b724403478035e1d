//! Physics plugin - gravity and contact reporting.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::contacts::report_bird_contacts;
use crate::core::{GameConfig, GameState};

/// Physics plugin - configures the rapier world for the scene.
///
/// `RapierPhysicsPlugin` itself is added by the binary, which knows the
/// pixel scale from the config.
pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), apply_gravity)
            .add_systems(
                Update,
                report_bird_contacts.run_if(in_state(GameState::Playing)),
            );
    }
}

/// Set scene gravity on every rapier context.
fn apply_gravity(config: Res<GameConfig>, mut contexts: Query<&mut RapierConfiguration>) {
    let gravity = config.gravity_vector();
    for mut rapier in contexts.iter_mut() {
        rapier.gravity = gravity;
    }
    info!("Gravity set to {:?}", gravity);
}
