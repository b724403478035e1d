//! Collision-group partition between the bird and everything it can hit.
//!
//! Each body carries three masks:
//! - `category`: the group the body belongs to
//! - `contact_test`: groups whose contacts should be reported
//! - `collision`: groups that push this body around
//!
//! Masks are constants per entity type and are never changed after spawn.

use bevy_rapier2d::prelude::*;

/// Group bit for the bird.
pub const BIRD_GROUP: u32 = 1;
/// Group bit for pipes and the ground.
pub const OBJECT_GROUP: u32 = 2;

/// Category, contact-test and collision masks for one entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionMask {
    pub category: u32,
    pub contact_test: u32,
    pub collision: u32,
}

impl CollisionMask {
    /// The bird reports contacts with obstacles but only collides with
    /// other birds, so it falls through pipes and ground.
    pub const BIRD: Self = Self {
        category: BIRD_GROUP,
        contact_test: OBJECT_GROUP,
        collision: BIRD_GROUP,
    };

    /// Pipes and ground.
    pub const OBJECT: Self = Self {
        category: OBJECT_GROUP,
        contact_test: 0,
        collision: u32::MAX,
    };

    /// Pairs rapier should test at all: anything reported or pushed.
    pub fn collision_groups(&self) -> CollisionGroups {
        CollisionGroups::new(
            Group::from_bits_truncate(self.category),
            Group::from_bits_truncate(self.contact_test | self.collision),
        )
    }

    /// Pairs rapier should resolve with forces.
    pub fn solver_groups(&self) -> SolverGroups {
        SolverGroups::new(
            Group::from_bits_truncate(self.category),
            Group::from_bits_truncate(self.collision),
        )
    }

    /// Components to put on a collider entity.
    pub fn bundle(&self) -> (CollisionGroups, SolverGroups) {
        (self.collision_groups(), self.solver_groups())
    }
}
