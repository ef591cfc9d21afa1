//! The sample scene reached from the main menu's Start button.

use bevy::prelude::*;

use crate::core::{despawn_screen, GameState};

/// Marker for sample scene entities.
#[derive(Component)]
struct SampleSceneUi;

/// Setup sample scene systems.
pub fn setup_sample_scene_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_sample_scene)
        .add_systems(OnExit(GameState::InGame), despawn_screen::<SampleSceneUi>);
}

fn spawn_sample_scene(mut commands: Commands) {
    commands.spawn((Camera2d, SampleSceneUi));

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgb(0.08, 0.07, 0.06)),
            SampleSceneUi,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("SampleScene"),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.85)),
            ));
        });
}
