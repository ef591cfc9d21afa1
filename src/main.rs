//! Main Menu - Entry Point
//!
//! Controls:
//! - Click Start to load the sample scene
//! - Click Quit to exit
//! - Drag the slider to change the music volume

use bevy::audio::AudioPlugin;
use bevy::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins, with bevy's audio replaced by kira
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Main Menu".to_string(),
                        resolution: (1280.0, 720.0).into(),
                        ..default()
                    }),
                    ..default()
                })
                .disable::<AudioPlugin>(),
        )

        // Our game plugin
        .add_plugins(main_menu::MainMenuGamePlugin)

        .run();
}
