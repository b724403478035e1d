//! Global events used for cross-system communication.
//!
//! Input and physics callbacks are turned into events so the systems that
//! react to them stay independent of where they come from.

use bevy::prelude::*;

/// Sent when the player taps the screen, clicks, or presses Space.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct FlapEvent;

/// Sent when the bird starts touching a pipe or the ground.
///
/// Nothing in the game reacts to it beyond the log line. It is the hook
/// for scoring or game-over logic.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirdContactEvent {
    /// The bird entity
    pub bird: Entity,
    /// The obstacle it touched
    pub other: Entity,
}
