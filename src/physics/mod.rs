//! Physics module - collision groups, gravity and contact handling.

mod contacts;
mod groups;
mod plugin;

pub use contacts::report_bird_contacts;
pub use groups::*;
pub use plugin::PhysicsPlugin;
