//! Invisible ground boundary.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::GameConfig;
use crate::physics::CollisionMask;

/// Marker component for the ground.
#[derive(Component)]
pub struct Ground;

/// Height of the ground strip.
pub const GROUND_THICKNESS: f32 = 1.0;

/// Spawn a static, non-rendered strip along the bottom of the scene.
pub fn spawn_ground(mut commands: Commands, config: Res<GameConfig>) {
    let width = config.scene_size.0;
    commands.spawn((
        Ground,
        Transform::from_xyz(width / 2.0, 0.0, 0.0),
        RigidBody::Fixed,
        Collider::cuboid(width / 2.0, GROUND_THICKNESS / 2.0),
        CollisionMask::OBJECT.bundle(),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ground_spans_scene_width_without_sprite() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(GameConfig::default())
            .add_systems(Update, spawn_ground);
        app.update();

        let world = app.world_mut();
        let mut query = world.query_filtered::<(&Transform, Option<&Sprite>, &CollisionGroups), With<Ground>>();
        let (transform, sprite, groups) = query.single(world);

        assert_eq!(transform.translation, Vec3::new(512.0, 0.0, 0.0));
        assert!(sprite.is_none());
        assert_eq!(*groups, CollisionMask::OBJECT.collision_groups());
    }
}
