//! Flappy Bird - a single-screen Flappy-Bird-style game in Bevy.
//!
//! Physics, rendering and input all come from Bevy and Rapier. This crate
//! only composes them into a scene.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, config, texture loading
//! - **Physics**: Collision groups, gravity, contact reporting
//! - **Player**: The bird, tap-to-flap, wing animation
//! - **World**: Camera, scrolling background, ground, pipe spawning

pub mod core;
pub mod physics;
pub mod player;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct FlappyPlugin;

impl Plugin for FlappyPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Gravity and contacts
            .add_plugins(physics::PhysicsPlugin)

            // Bird systems
            .add_plugins(player::PlayerPlugin)

            // Scene systems
            .add_plugins(world::WorldPlugin);
    }
}
