//! Texture loading for the Loading state.
//!
//! Textures that fail to load are remembered, and sprites built from them
//! fall back to a flat colour of the same size so the scene stays playable
//! without any image files.

use bevy::asset::LoadState;
use bevy::prelude::*;
use std::collections::HashSet;

use super::config::GameConfig;
use super::states::GameState;

/// Handles to every texture the scene uses.
#[derive(Resource, Default, Clone)]
pub struct GameTextures {
    /// Wing animation frames
    pub bird: Vec<Handle<Image>>,
    pub pipe_top: Handle<Image>,
    pub pipe_bottom: Handle<Image>,
    pub background: Handle<Image>,
    /// Textures that failed to load
    pub missing: HashSet<AssetId<Image>>,
}

/// Load progress of a single texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureStatus {
    Pending,
    Loaded,
    Failed,
}

impl TextureStatus {
    pub fn from_load_state(state: Option<&LoadState>) -> Self {
        match state {
            Some(LoadState::Loaded) => Self::Loaded,
            Some(LoadState::Failed(_)) => Self::Failed,
            _ => Self::Pending,
        }
    }
}

impl GameTextures {
    /// Iterate over every handle, for load tracking.
    pub fn handles(&self) -> impl Iterator<Item = &Handle<Image>> {
        self.bird
            .iter()
            .chain([&self.pipe_top, &self.pipe_bottom, &self.background])
    }

    /// Record failed textures once every texture has settled.
    ///
    /// Returns `false`, leaving `missing` untouched, while any texture is
    /// still pending.
    pub fn settle(&mut self, status_of: impl Fn(AssetId<Image>) -> TextureStatus) -> bool {
        let statuses: Vec<_> = self
            .handles()
            .map(|handle| (handle.id(), status_of(handle.id())))
            .collect();

        if statuses.iter().any(|(_, status)| *status == TextureStatus::Pending) {
            return false;
        }

        self.missing = statuses
            .into_iter()
            .filter(|(_, status)| *status == TextureStatus::Failed)
            .map(|(id, _)| id)
            .collect();
        true
    }

    pub fn is_missing(&self, handle: &Handle<Image>) -> bool {
        self.missing.contains(&handle.id())
    }

    /// Bird frames that loaded, in animation order.
    pub fn bird_frames(&self) -> Vec<Handle<Image>> {
        self.bird
            .iter()
            .filter(|handle| !self.is_missing(handle))
            .cloned()
            .collect()
    }

    /// A sprite of `size` showing `handle`, or `fallback` if it failed to load.
    pub fn sprite(&self, handle: &Handle<Image>, size: Vec2, fallback: Color) -> Sprite {
        if self.is_missing(handle) {
            Sprite::from_color(fallback, size)
        } else {
            Sprite {
                image: handle.clone(),
                custom_size: Some(size),
                ..default()
            }
        }
    }
}

/// Start loading every texture named in the config.
pub fn load_textures(mut commands: Commands, asset_server: Res<AssetServer>, config: Res<GameConfig>) {
    let names = &config.textures;
    let textures = GameTextures {
        bird: names.bird.iter().map(|name| asset_server.load(name.as_str())).collect(),
        pipe_top: asset_server.load(names.pipe_top.as_str()),
        pipe_bottom: asset_server.load(names.pipe_bottom.as_str()),
        background: asset_server.load(names.background.as_str()),
        missing: HashSet::new(),
    };
    commands.insert_resource(textures);
}

/// Enter `Playing` once every texture is loaded or has failed.
pub fn check_textures_loaded(
    asset_server: Res<AssetServer>,
    mut textures: ResMut<GameTextures>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let settled = textures.settle(|id| {
        TextureStatus::from_load_state(asset_server.get_load_state(id).as_ref())
    });
    if !settled {
        return;
    }

    for handle in textures.handles() {
        if textures.is_missing(handle) {
            warn!("Texture {:?} failed to load, using a flat colour", handle.path());
        }
    }

    info!("Textures ready, starting scene");
    next_state.set(GameState::Playing);
}
