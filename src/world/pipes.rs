//! Pipe pair spawning and travel.
//!
//! A pair is spawned at the right edge of the scene with a random vertical
//! offset, slides left at constant speed and is despawned once it has
//! covered two scene widths.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

use crate::core::{GameConfig, GameTextures};
use crate::physics::CollisionMask;

/// Z-order for pipes, above the background.
pub const PIPE_Z: f32 = 1.0;

/// Which half of a pair a pipe is.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pipe {
    Top,
    Bottom,
}

/// Flat placeholder colour when a pipe texture is missing.
pub const PIPE_FALLBACK_COLOR: Color = Color::srgb(0.33, 0.65, 0.2);

/// Where a pipe's travel ends. Reaching it removes the pipe.
///
/// Checked against the physics-driven position so the pipe is removed
/// where it actually is, whatever the physics timestep does.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct PipeTravel {
    pub end_x: f32,
}

impl PipeTravel {
    /// Travel of two scene widths to the left of `start_x`.
    pub fn from_start(start_x: f32, scene_width: f32) -> Self {
        Self {
            end_x: start_x - 2.0 * scene_width,
        }
    }

    pub fn is_finished(&self, x: f32) -> bool {
        x <= self.end_x
    }
}

/// Random source for pipe offsets.
#[derive(Resource)]
pub struct PipeRng(pub StdRng);

impl Default for PipeRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

/// Fixed-interval pipe spawn schedule.
///
/// The first pair is due on the first tick, then one every interval.
#[derive(Resource)]
pub struct PipeSpawner {
    timer: Timer,
    started: bool,
}

impl PipeSpawner {
    pub fn new(interval: f32) -> Self {
        Self {
            timer: Timer::from_seconds(interval, TimerMode::Repeating),
            started: false,
        }
    }

    /// Advance by `delta` and return how many pairs are due.
    pub fn tick(&mut self, delta: Duration) -> u32 {
        let mut due = 0;
        if !self.started {
            self.started = true;
            due += 1;
        }
        self.timer.tick(delta);
        due + self.timer.times_finished_this_tick()
    }
}

/// Centres of the two pipes in a pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipePairLayout {
    pub top: Vec2,
    pub bottom: Vec2,
}

/// Vertical opening between the pipes, four birds tall.
pub fn gap_height(bird_height: f32) -> f32 {
    bird_height * 4.0
}

/// Roll the raw vertical shift, uniform in `[0, scene_height / 2)`.
pub fn roll_movement_amount<R: Rng + ?Sized>(rng: &mut R, scene_height: f32) -> u32 {
    let bound = (scene_height / 2.0) as u32;
    if bound == 0 {
        return 0;
    }
    rng.gen_range(0..bound)
}

/// Shift the raw roll so the gap moves within a quarter scene of centre.
pub fn pipe_offset(movement_amount: u32, scene_height: f32) -> f32 {
    movement_amount as f32 - scene_height / 4.0
}

/// Place a pair at the right edge of the scene.
pub fn layout_pipe_pair(scene: Vec2, pipe: Vec2, gap: f32, offset: f32) -> PipePairLayout {
    let mid = scene.y / 2.0;
    PipePairLayout {
        top: Vec2::new(scene.x, mid + pipe.y / 2.0 + gap / 2.0 + offset),
        bottom: Vec2::new(scene.x, mid - pipe.y / 2.0 - gap / 2.0 + offset),
    }
}

/// Seconds a pipe takes to travel two scene widths.
pub fn pipe_travel_time(scene_width: f32, speed_divisor: f32) -> f32 {
    scene_width / speed_divisor
}

/// Horizontal pipe velocity. Independent of the scene width.
pub fn pipe_velocity(scene_width: f32, speed_divisor: f32) -> f32 {
    -2.0 * scene_width / pipe_travel_time(scene_width, speed_divisor)
}

/// Spawn one pipe pair.
pub fn spawn_pipe_pair(
    commands: &mut Commands,
    config: &GameConfig,
    textures: &GameTextures,
    rng: &mut impl Rng,
) {
    let scene = config.scene_size();
    let pipe_size = config.pipe_size();

    let movement_amount = roll_movement_amount(rng, scene.y);
    debug!("Pipe movement amount: {}", movement_amount);

    let offset = pipe_offset(movement_amount, scene.y);
    let layout = layout_pipe_pair(scene, pipe_size, gap_height(config.bird_size.1), offset);

    let speed = pipe_velocity(scene.x, config.pipe_speed_divisor);

    for (pipe, position, image) in [
        (Pipe::Top, layout.top, &textures.pipe_top),
        (Pipe::Bottom, layout.bottom, &textures.pipe_bottom),
    ] {
        commands.spawn((
            pipe,
            PipeTravel::from_start(position.x, scene.x),
            textures.sprite(image, pipe_size, PIPE_FALLBACK_COLOR),
            Transform::from_xyz(position.x, position.y, PIPE_Z),
            // Moved by its velocity, never by forces
            RigidBody::KinematicVelocityBased,
            Velocity::linear(Vec2::new(speed, 0.0)),
            Collider::cuboid(pipe_size.x / 2.0, pipe_size.y / 2.0),
            CollisionMask::OBJECT.bundle(),
        ));
    }
}

/// Spawn pipe pairs on the fixed schedule.
pub fn spawn_pipes_on_timer(
    mut commands: Commands,
    time: Res<Time>,
    config: Res<GameConfig>,
    textures: Res<GameTextures>,
    mut spawner: ResMut<PipeSpawner>,
    mut rng: ResMut<PipeRng>,
) {
    for _ in 0..spawner.tick(time.delta()) {
        spawn_pipe_pair(&mut commands, &config, &textures, &mut rng.0);
    }
}

/// Remove pipes that have finished their travel.
pub fn despawn_finished_pipes(mut commands: Commands, pipes: Query<(Entity, &Transform, &PipeTravel)>) {
    for (entity, transform, travel) in pipes.iter() {
        if travel.is_finished(transform.translation.x) {
            commands.entity(entity).despawn_recursive();
        }
    }
}
