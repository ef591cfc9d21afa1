//! Menu plugin - controller lifecycle, button sequences and volume binding.

use bevy::prelude::*;

use crate::audio::PlayClickSound;
use crate::ui::widgets::SliderValueChanged;

use super::config::MenuConfig;
use super::controller::*;
use super::sequence::*;

/// Ordering for the menu systems within `Update`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MenuSystems {
    /// Claim the active controller, then start it.
    Activate,
    /// Advance running sequences, then react to new presses.
    Sequences,
    /// Follow slider changes.
    Volume,
}

/// Menu plugin - runs whichever `MainMenuController` is active.
///
/// Needs `CorePlugin` for states and events. Works without the audio backend
/// or any rendering, which is how the tests run it.
pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MenuConfig>()
            .init_resource::<ActiveMenu>()
            .add_event::<PlayClickSound>()
            .add_event::<SliderValueChanged>()
            .configure_sets(
                Update,
                (MenuSystems::Activate, MenuSystems::Sequences, MenuSystems::Volume).chain(),
            )
            .add_systems(
                Update,
                (
                    (claim_active_menu, start_menu_controller)
                        .chain()
                        .in_set(MenuSystems::Activate),
                    (advance_menu_sequences, handle_menu_button_presses)
                        .chain()
                        .in_set(MenuSystems::Sequences),
                    apply_volume_changes.in_set(MenuSystems::Volume),
                ),
            );
    }
}
