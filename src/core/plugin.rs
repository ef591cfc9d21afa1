//! Core plugin that sets up game states, events, and fundamental systems.

use bevy::prelude::*;

use super::events::*;
use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, MainMenu, InGame)
/// - Global events (SceneLoadRequest, MenuNotice)
/// - Forwarding of menu notices to the log
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            .init_state::<GameState>()

            // Register global events
            .add_event::<SceneLoadRequest>()
            .add_event::<MenuNotice>()

            // Loading state - transition to MainMenu when ready.
            // Config is read synchronously at Startup, so nothing to wait on.
            .add_systems(OnEnter(GameState::Loading), transition_to_main_menu)

            .add_systems(Last, relay_menu_notices);
    }
}

/// Immediately transition from Loading to MainMenu.
fn transition_to_main_menu(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::MainMenu);
}

/// Write every [`MenuNotice`] raised this frame to the log.
pub fn relay_menu_notices(mut notices: EventReader<MenuNotice>) {
    for notice in notices.read() {
        match notice.level {
            NoticeLevel::Info => info!("{}", notice.message),
            NoticeLevel::Warn => warn!("{}", notice.message),
        }
    }
}
