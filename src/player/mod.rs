//! Player module - the bird, its flap input and wing animation.

mod components;
mod flight;
mod plugin;

pub use components::*;
pub use flight::{flap, spawn_bird};
pub use plugin::PlayerPlugin;
