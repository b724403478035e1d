//! Core game module - states, events, config and asset loading.
//!
//! This module provides the foundation that all other game systems build upon.

mod assets;
mod config;
mod error;
mod events;
mod plugin;
mod states;

pub use assets::*;
pub use config::*;
pub use error::ConfigError;
pub use events::*;
pub use plugin::CorePlugin;
pub use states::*;
