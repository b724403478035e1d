//! World module - background, ground and obstacles.

mod background;
mod ground;
mod pipes;
mod plugin;

pub use background::{tile_home_x, ScrollingTile};
pub use ground::Ground;
pub use pipes::*;
pub use plugin::WorldPlugin;
