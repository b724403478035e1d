//! Contact listener for the bird.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::BirdContactEvent;
use crate::player::Bird;

/// Log every contact the bird starts with an obstacle.
///
/// There is no game-over: the contact is reported and play continues.
pub fn report_bird_contacts(
    mut collisions: EventReader<CollisionEvent>,
    birds: Query<(), With<Bird>>,
    mut contacts: EventWriter<BirdContactEvent>,
) {
    for event in collisions.read() {
        let CollisionEvent::Started(a, b, _) = *event else {
            continue;
        };

        let pair = if birds.contains(a) {
            Some((a, b))
        } else if birds.contains(b) {
            Some((b, a))
        } else {
            None
        };

        if let Some((bird, other)) = pair {
            info!("collision happened");
            contacts.send(BirdContactEvent { bird, other });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_rapier2d::rapier::geometry::CollisionEventFlags;

    fn contact_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<CollisionEvent>()
            .add_event::<BirdContactEvent>()
            .add_systems(Update, report_bird_contacts);
        app
    }

    fn sent_contacts(app: &App) -> Vec<BirdContactEvent> {
        let events = app.world().resource::<Events<BirdContactEvent>>();
        events.iter_current_update_events().copied().collect()
    }

    #[test]
    fn started_contact_with_bird_is_reported() {
        let mut app = contact_app();
        let bird = app.world_mut().spawn(Bird).id();
        let pipe = app.world_mut().spawn_empty().id();

        app.world_mut()
            .send_event(CollisionEvent::Started(pipe, bird, CollisionEventFlags::empty()));
        app.update();

        assert_eq!(sent_contacts(&app), vec![BirdContactEvent { bird, other: pipe }]);
    }

    #[test]
    fn stopped_contacts_and_other_pairs_are_ignored() {
        let mut app = contact_app();
        let bird = app.world_mut().spawn(Bird).id();
        let pipe = app.world_mut().spawn_empty().id();
        let ground = app.world_mut().spawn_empty().id();

        app.world_mut()
            .send_event(CollisionEvent::Stopped(bird, pipe, CollisionEventFlags::empty()));
        app.world_mut()
            .send_event(CollisionEvent::Started(pipe, ground, CollisionEventFlags::empty()));
        app.update();

        assert!(sent_contacts(&app).is_empty());
    }
}
