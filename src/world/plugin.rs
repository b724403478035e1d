//! World plugin - camera, background, ground and pipes.

use bevy::prelude::*;

use crate::core::{GameConfig, GameState};

use super::background::{scroll_background, spawn_background};
use super::ground::spawn_ground;
use super::pipes::{despawn_finished_pipes, spawn_pipes_on_timer, PipeRng, PipeSpawner};

/// World plugin - builds the scene around the bird.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PipeRng>()
            .add_systems(
                OnEnter(GameState::Playing),
                (spawn_camera, spawn_background, spawn_ground, setup_pipe_spawner),
            )
            .add_systems(
                Update,
                (
                    scroll_background,
                    spawn_pipes_on_timer,
                    despawn_finished_pipes,
                )
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

/// Centre the camera on the scene so world coordinates start at the
/// bottom-left corner.
fn spawn_camera(mut commands: Commands, config: Res<GameConfig>) {
    let scene = config.scene_size();
    commands.spawn((
        Camera2d,
        Transform::from_xyz(scene.x / 2.0, scene.y / 2.0, 0.0),
    ));
}

/// Start the pipe schedule. The first pair spawns on the next frame.
fn setup_pipe_spawner(mut commands: Commands, config: Res<GameConfig>) {
    commands.insert_resource(PipeSpawner::new(config.spawn_interval));
    info!("Spawning pipes every {}s", config.spawn_interval);
}
