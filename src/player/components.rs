//! Bird components.

use bevy::prelude::*;

/// Marker component for the bird.
#[derive(Component, Debug, Default)]
pub struct Bird;

/// Z-order that keeps the bird above pipes and background.
pub const BIRD_Z: f32 = 9.0;

/// Flat placeholder colour when no wing frame loaded.
pub const BIRD_FALLBACK_COLOR: Color = Color::srgb(0.98, 0.8, 0.2);

/// Cycles the bird's sprite through its wing frames forever.
#[derive(Component)]
pub struct WingAnimation {
    pub frames: Vec<Handle<Image>>,
    pub current: usize,
    pub timer: Timer,
}

impl WingAnimation {
    pub fn new(frames: Vec<Handle<Image>>, frame_time: f32) -> Self {
        Self {
            frames,
            current: 0,
            timer: Timer::from_seconds(frame_time, TimerMode::Repeating),
        }
    }

    /// Advance by `delta`. Returns the new frame when it changed.
    pub fn advance(&mut self, delta: std::time::Duration) -> Option<&Handle<Image>> {
        if self.frames.len() < 2 {
            return None;
        }

        self.timer.tick(delta);
        let steps = self.timer.times_finished_this_tick() as usize;
        if steps == 0 {
            return None;
        }

        self.current = (self.current + steps) % self.frames.len();
        self.frames.get(self.current)
    }
}
