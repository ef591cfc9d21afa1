//! Main Menu - a title screen with music, a volume slider and Start/Quit.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, notice logging
//! - **Audio**: Background music and click sounds (kira backend)
//! - **Scene**: Loading screens by name
//! - **Menu**: The main menu controller and its Start/Quit sequences
//! - **UI**: Screens and widgets
//!
//! The menu controller is spawned by the main menu screen but registered in
//! an app-owned resource, so it and its music survive the move to the
//! sample scene.

pub mod audio;
pub mod core;
pub mod menu;
pub mod scene;
pub mod ui;

#[cfg(test)]
mod test_support;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct MainMenuGamePlugin;

impl Plugin for MainMenuGamePlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Audio backend
            .add_plugins(audio::MenuAudioPlugin)

            // Scene loading
            .add_plugins(scene::ScenePlugin)

            // Menu controller
            .add_plugins(menu::MenuPlugin)

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}
