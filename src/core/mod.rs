//! Core game module - states, events, errors and the notice relay.
//!
//! This module provides the foundation that all other game systems build upon.

mod error;
mod events;
mod plugin;
mod screen;
mod states;

pub use error::*;
pub use events::*;
pub use plugin::{relay_menu_notices, CorePlugin};
pub use screen::{despawn_screen, PersistAcrossScreens};
pub use states::*;
