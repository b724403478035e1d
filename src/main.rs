//! Flappy Bird - Entry Point
//!
//! Controls:
//! - Tap, left click or Space: Flap

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use flappy_bird::core::{GameConfig, CONFIG_PATH};

fn main() {
    // Window size and physics scale come from the config, so it is read
    // before the app is built. The outcome is logged once logging is up.
    let (config, source) = GameConfig::load_or_default(CONFIG_PATH);
    let scene = config.scene_size();

    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: config.window_title.clone(),
                resolution: (scene.x, scene.y).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))

        // Physics
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(config.pixels_per_meter))

        .insert_resource(config)
        .insert_resource(source)

        // Our game plugin
        .add_plugins(flappy_bird::FlappyPlugin)

        .run();
}
