//! Bird spawning, tap-to-flap and wing animation.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::*;
use crate::core::{FlapEvent, GameConfig, GameState, GameTextures};
use crate::physics::CollisionMask;

/// Set up bird systems.
pub fn setup_flight_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::Playing), spawn_bird)
        .add_systems(
            Update,
            (read_tap_input, apply_flap, animate_wings)
                .chain()
                .run_if(in_state(GameState::Playing)),
        );
}

/// Spawn the bird at the centre of the scene.
///
/// The collider is a circle whose diameter is the sprite height.
pub fn spawn_bird(mut commands: Commands, config: Res<GameConfig>, textures: Res<GameTextures>) {
    let scene = config.scene_size();
    let size = config.bird_size();
    let frames = textures.bird_frames();
    let sprite = match frames.first() {
        Some(first) => textures.sprite(first, size, BIRD_FALLBACK_COLOR),
        None => Sprite::from_color(BIRD_FALLBACK_COLOR, size),
    };

    commands.spawn((
        Bird,
        WingAnimation::new(frames, config.bird_frame_time),
        sprite,
        Transform::from_xyz(scene.x / 2.0, scene.y / 2.0, BIRD_Z),
        // Rapier physics components
        RigidBody::Dynamic,
        Collider::ball(size.y / 2.0),
        CollisionMask::BIRD.bundle(),
        ActiveEvents::COLLISION_EVENTS,
        Velocity::zero(),
        ExternalImpulse::default(),
    ));

    info!("Spawned bird at ({}, {})", scene.x / 2.0, scene.y / 2.0);
}

/// Turn taps, left clicks and Space into flap events.
pub fn read_tap_input(
    touches: Res<Touches>,
    mouse: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut flaps: EventWriter<FlapEvent>,
) {
    if touches.any_just_pressed()
        || mouse.just_pressed(MouseButton::Left)
        || keyboard.just_pressed(KeyCode::Space)
    {
        flaps.send(FlapEvent);
    }
}

/// Kill the bird's velocity, then kick it upward.
///
/// Several taps in one frame still give a single flap, since each one
/// resets the velocity first.
pub fn apply_flap(
    mut flaps: EventReader<FlapEvent>,
    config: Res<GameConfig>,
    mut birds: Query<(&mut Velocity, &mut ExternalImpulse), With<Bird>>,
) {
    if flaps.read().count() == 0 {
        return;
    }

    // The bird may not have a body yet
    let Ok((mut velocity, mut impulse)) = birds.get_single_mut() else {
        return;
    };

    flap(&mut velocity, &mut impulse, config.flap_impulse);
}

/// Zero the velocity and replace any pending impulse with an upward one.
pub fn flap(velocity: &mut Velocity, impulse: &mut ExternalImpulse, strength: f32) {
    *velocity = Velocity::zero();
    impulse.impulse = Vec2::new(0.0, strength);
}

/// Swap the bird's sprite between wing frames.
pub fn animate_wings(time: Res<Time>, mut query: Query<(&mut WingAnimation, &mut Sprite)>) {
    for (mut animation, mut sprite) in query.iter_mut() {
        if let Some(frame) = animation.advance(time.delta()).cloned() {
            sprite.image = frame;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flap_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(GameConfig::default())
            .add_event::<FlapEvent>()
            .add_systems(Update, apply_flap);
        app
    }

    #[test]
    fn flap_zeroes_velocity_before_impulse() {
        let mut velocity = Velocity::linear(Vec2::new(12.0, -300.0));
        let mut impulse = ExternalImpulse::default();

        flap(&mut velocity, &mut impulse, 50.0);

        assert_eq!(velocity.linvel, Vec2::ZERO);
        assert_eq!(impulse.impulse, Vec2::new(0.0, 50.0));
    }

    #[test]
    fn flap_event_kicks_the_bird() {
        let mut app = flap_app();
        let bird = app
            .world_mut()
            .spawn((
                Bird,
                Velocity::linear(Vec2::new(0.0, -420.0)),
                ExternalImpulse::default(),
            ))
            .id();

        app.world_mut().send_event(FlapEvent);
        app.update();

        let velocity = app.world().get::<Velocity>(bird).unwrap();
        let impulse = app.world().get::<ExternalImpulse>(bird).unwrap();
        assert_eq!(velocity.linvel, Vec2::ZERO);
        assert_eq!(impulse.impulse, Vec2::new(0.0, GameConfig::default().flap_impulse));
    }

    #[test]
    fn no_flap_without_input() {
        let mut app = flap_app();
        let bird = app
            .world_mut()
            .spawn((
                Bird,
                Velocity::linear(Vec2::new(0.0, -420.0)),
                ExternalImpulse::default(),
            ))
            .id();

        app.update();

        let velocity = app.world().get::<Velocity>(bird).unwrap();
        assert_eq!(velocity.linvel, Vec2::new(0.0, -420.0));
    }

    #[test]
    fn flap_without_bird_is_ignored() {
        let mut app = flap_app();
        app.world_mut().send_event(FlapEvent);
        app.update();
    }

    #[test]
    fn bird_spawns_at_scene_centre() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(GameConfig::default())
            .insert_resource(GameTextures {
                bird: vec![Handle::default(), Handle::default()],
                ..default()
            })
            .add_systems(Update, spawn_bird);
        app.update();

        let world = app.world_mut();
        let mut query = world.query_filtered::<&Transform, With<Bird>>();
        let transforms: Vec<_> = query.iter(world).collect();
        assert_eq!(transforms.len(), 1);
        assert_eq!(transforms[0].translation, Vec3::new(512.0, 384.0, BIRD_Z));
    }

    #[test]
    fn bird_without_frames_is_a_flat_colour() {
        let mut images = Assets::<Image>::default();
        let frames = vec![images.add(Image::default()), images.add(Image::default())];
        let mut textures = GameTextures {
            bird: frames.clone(),
            ..default()
        };
        textures.missing = frames.iter().map(|frame| frame.id()).collect();

        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(GameConfig::default())
            .insert_resource(textures)
            .add_systems(Update, spawn_bird);
        app.update();

        let world = app.world_mut();
        let (sprite, animation) = world
            .query_filtered::<(&Sprite, &WingAnimation), With<Bird>>()
            .single(world);
        assert_eq!(sprite.color, BIRD_FALLBACK_COLOR);
        assert_eq!(sprite.custom_size, Some(GameConfig::default().bird_size()));
        assert!(animation.frames.is_empty());
    }
}
