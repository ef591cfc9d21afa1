//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. Each state is one
//! loadable screen; the scene loader maps scene names onto these values.

use bevy::prelude::*;

/// Main game states - one per screen.
///
/// - Start in `Loading` while data files are read
/// - Move to `MainMenu` when loading completes
/// - Enter `InGame` when the menu's Start sequence requests the sample scene
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - loading data files
    #[default]
    Loading,
    /// Main menu / title screen
    MainMenu,
    /// The sample scene reached from the main menu
    InGame,
}
