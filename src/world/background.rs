//! Scrolling background strips.
//!
//! Two copies of the background sit side by side. Each slides left by one
//! texture width over a fixed period, then snaps back to where it started,
//! so the pair always covers the screen.

use bevy::prelude::*;

use crate::core::{GameConfig, GameTextures};

/// Number of tiles laid side by side.
pub const TILE_COUNT: usize = 2;

/// Flat sky colour when the background texture is missing.
pub const SKY_FALLBACK_COLOR: Color = Color::srgb(0.44, 0.77, 0.81);

/// One looping background tile.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct ScrollingTile {
    /// X position at the start of each loop
    pub home_x: f32,
    /// Distance covered per loop (one texture width)
    pub travel: f32,
    /// Seconds per loop
    pub period: f32,
    /// Seconds into the current loop
    pub elapsed: f32,
}

impl ScrollingTile {
    pub fn new(home_x: f32, travel: f32, period: f32) -> Self {
        Self {
            home_x,
            travel,
            period,
            elapsed: 0.0,
        }
    }

    /// Advance the loop and return the tile's new x position.
    pub fn advance(&mut self, delta: f32) -> f32 {
        self.elapsed = (self.elapsed + delta).rem_euclid(self.period);
        self.x()
    }

    /// Current x position.
    pub fn x(&self) -> f32 {
        self.home_x - self.travel * (self.elapsed / self.period)
    }
}

/// Home x of the tile at `index`.
pub fn tile_home_x(scene_width: f32, bg_width: f32, index: usize) -> f32 {
    scene_width / 2.0 + bg_width * index as f32
}

/// Spawn the background tiles, stretched to the scene height.
pub fn spawn_background(mut commands: Commands, config: Res<GameConfig>, textures: Res<GameTextures>) {
    let scene = config.scene_size();

    for index in 0..TILE_COUNT {
        let home_x = tile_home_x(scene.x, config.bg_width, index);
        commands.spawn((
            ScrollingTile::new(home_x, config.bg_width, config.bg_scroll_period),
            textures.sprite(
                &textures.background,
                Vec2::new(config.bg_width, scene.y),
                SKY_FALLBACK_COLOR,
            ),
            Transform::from_xyz(home_x, scene.y / 2.0, 0.0),
        ));
    }
}

/// Move every tile along its loop.
pub fn scroll_background(time: Res<Time>, mut tiles: Query<(&mut ScrollingTile, &mut Transform)>) {
    let dt = time.delta_secs();
    for (mut tile, mut transform) in tiles.iter_mut() {
        transform.translation.x = tile.advance(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_sit_side_by_side() {
        assert_eq!(tile_home_x(1024.0, 1536.0, 0), 512.0);
        assert_eq!(tile_home_x(1024.0, 1536.0, 1), 2048.0);
    }

    #[test]
    fn tile_moves_left_linearly() {
        let mut tile = ScrollingTile::new(512.0, 1536.0, 9.0);
        let x = tile.advance(4.5);
        assert!((x - (512.0 - 768.0)).abs() < 1e-3);
    }

    #[test]
    fn tile_snaps_home_after_a_period() {
        let mut tile = ScrollingTile::new(512.0, 1536.0, 9.0);
        tile.advance(6.0);
        let x = tile.advance(3.0);
        assert!((x - 512.0).abs() < 1e-3);
    }

    #[test]
    fn tile_never_passes_one_width() {
        let mut tile = ScrollingTile::new(512.0, 1536.0, 9.0);
        for _ in 0..200 {
            let x = tile.advance(0.37);
            assert!(x <= 512.0 && x > 512.0 - 1536.0);
        }
    }

    #[test]
    fn spawns_two_tiles() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(GameConfig::default())
            .insert_resource(GameTextures::default())
            .add_systems(Update, spawn_background);
        app.update();

        let world = app.world_mut();
        let mut query = world.query::<(&ScrollingTile, &Sprite)>();
        let mut homes: Vec<f32> = query.iter(world).map(|(tile, _)| tile.home_x).collect();
        homes.sort_by(f32::total_cmp);
        assert_eq!(homes, vec![512.0, 2048.0]);

        for (_, sprite) in query.iter(world) {
            assert_eq!(sprite.custom_size, Some(Vec2::new(1536.0, 768.0)));
        }
    }

    #[test]
    fn missing_texture_spawns_sky_coloured_tiles() {
        let mut textures = GameTextures::default();
        textures.missing.insert(textures.background.id());

        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(GameConfig::default())
            .insert_resource(textures)
            .add_systems(Update, spawn_background);
        app.update();

        let world = app.world_mut();
        let mut query = world.query_filtered::<&Sprite, With<ScrollingTile>>();
        assert_eq!(query.iter(world).count(), TILE_COUNT);
        for sprite in query.iter(world) {
            assert_eq!(sprite.color, SKY_FALLBACK_COLOR);
            assert_eq!(sprite.custom_size, Some(Vec2::new(1536.0, 768.0)));
        }
    }
}
