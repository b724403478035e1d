//! Game configuration loaded from external RON file.
//!
//! Scene dimensions, physics tuning and texture names live here so they can
//! be tweaked without recompilation. Every field has a default, so a config
//! file only needs the values it changes.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;

use super::error::ConfigError;

/// Default location of the config file, relative to the working directory.
pub const CONFIG_PATH: &str = "assets/data/game_config.ron";

/// Texture file names, resolved by the asset server.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct TextureNames {
    /// Wing animation frames, played in order
    pub bird: Vec<String>,
    pub pipe_top: String,
    pub pipe_bottom: String,
    pub background: String,
}

impl Default for TextureNames {
    fn default() -> Self {
        Self {
            bird: vec!["textures/flappy1.png".to_string(), "textures/flappy2.png".to_string()],
            pipe_top: "textures/pipe1.png".to_string(),
            pipe_bottom: "textures/pipe2.png".to_string(),
            background: "textures/bg.png".to_string(),
        }
    }
}

/// Game configuration loaded from assets/data/game_config.ron.
#[derive(Resource, Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window_title: String,
    /// Scene width and height in pixels
    pub scene_size: (f32, f32),
    // Physics
    pub pixels_per_meter: f32,
    /// Vertical gravity in meters per second squared
    pub gravity: f32,
    /// Upward impulse applied on every tap
    pub flap_impulse: f32,
    // Bird
    pub bird_size: (f32, f32),
    /// Seconds each wing frame stays on screen
    pub bird_frame_time: f32,
    // Pipes
    pub pipe_size: (f32, f32),
    /// Pipes travel two scene widths in `scene_width / pipe_speed_divisor` seconds
    pub pipe_speed_divisor: f32,
    /// Seconds between pipe pairs
    pub spawn_interval: f32,
    // Background
    pub bg_width: f32,
    /// Seconds for a tile to scroll one texture width
    pub bg_scroll_period: f32,
    pub textures: TextureNames,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_title: "Flappy Bird".to_string(),
            scene_size: (1024.0, 768.0),
            pixels_per_meter: 150.0,
            gravity: -5.0,
            flap_impulse: 50.0,
            bird_size: (60.0, 42.0),
            bird_frame_time: 0.1,
            pipe_size: (104.0, 640.0),
            pipe_speed_divisor: 100.0,
            spawn_interval: 3.0,
            bg_width: 1536.0,
            bg_scroll_period: 9.0,
            textures: TextureNames::default(),
        }
    }
}

/// Where the active config came from. Logged once the log plugin is up.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(String),
    Defaults { reason: String },
}

impl GameConfig {
    pub fn scene_size(&self) -> Vec2 {
        Vec2::new(self.scene_size.0, self.scene_size.1)
    }

    pub fn bird_size(&self) -> Vec2 {
        Vec2::new(self.bird_size.0, self.bird_size.1)
    }

    pub fn pipe_size(&self) -> Vec2 {
        Vec2::new(self.pipe_size.0, self.pipe_size.1)
    }

    /// Gravity in simulation units (pixels per second squared).
    pub fn gravity_vector(&self) -> Vec2 {
        Vec2::new(0.0, self.gravity * self.pixels_per_meter)
    }

    /// Parse and validate a config from RON text.
    pub fn from_ron_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::from_ron_str(&contents)
    }

    /// Load the config file, falling back to defaults on any error.
    pub fn load_or_default(path: &str) -> (Self, ConfigSource) {
        match Self::load_from(path) {
            Ok(config) => (config, ConfigSource::File(path.to_string())),
            Err(e) => (Self::default(), ConfigSource::Defaults { reason: e.to_string() }),
        }
    }

    /// Reject values that would break the placement or timing math.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("scene_size.width", self.scene_size.0),
            ("scene_size.height", self.scene_size.1),
            ("pixels_per_meter", self.pixels_per_meter),
            ("bird_size.width", self.bird_size.0),
            ("bird_size.height", self.bird_size.1),
            ("bird_frame_time", self.bird_frame_time),
            ("pipe_size.width", self.pipe_size.0),
            ("pipe_size.height", self.pipe_size.1),
            ("pipe_speed_divisor", self.pipe_speed_divisor),
            ("spawn_interval", self.spawn_interval),
            ("bg_width", self.bg_width),
            ("bg_scroll_period", self.bg_scroll_period),
        ];

        for (field, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a positive number, got {}", value),
                });
            }
        }

        if self.textures.bird.is_empty() {
            return Err(ConfigError::Invalid {
                field: "textures.bird",
                reason: "needs at least one frame".to_string(),
            });
        }

        Ok(())
    }
}

/// System to report where the config came from.
pub fn log_config_source(source: Res<ConfigSource>) {
    match source.as_ref() {
        ConfigSource::File(path) => info!("Loaded game config from {}", path),
        ConfigSource::Defaults { reason } => warn!("{}. Using defaults.", reason),
    }
}
