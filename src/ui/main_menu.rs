//! Main menu screen - title, Start/Quit buttons and the music volume slider.

use bevy::prelude::*;
use bevy::ui::RelativeCursorPosition;

use crate::audio::BackgroundMusic;
use crate::core::{despawn_screen, GameState};
use crate::menu::{MainMenuController, MenuConfig};

use super::widgets::{Interactable, SliderFill, VolumeSlider};

/// Marker for main menu UI entities.
#[derive(Component)]
struct MainMenuUi;

/// Marker for the menu camera.
#[derive(Component)]
struct MenuCamera;

const BUTTON_NORMAL: Color = Color::srgb(0.15, 0.15, 0.2);
const BUTTON_HOVERED: Color = Color::srgb(0.25, 0.25, 0.3);
const BUTTON_PRESSED: Color = Color::srgb(0.3, 0.3, 0.35);
const BUTTON_DISABLED: Color = Color::srgb(0.08, 0.08, 0.1);

/// Setup main menu screen systems.
pub fn setup_main_menu_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::MainMenu), setup_main_menu)
        .add_systems(
            Update,
            style_menu_buttons.run_if(in_state(GameState::MainMenu)),
        )
        .add_systems(
            OnExit(GameState::MainMenu),
            (despawn_screen::<MainMenuUi>, despawn_screen::<MenuCamera>),
        );
}

/// Set up the main menu and the controller that runs it.
fn setup_main_menu(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<MenuConfig>,
) {
    commands.spawn((Camera2d, MenuCamera));

    let mut start_button = None;
    let mut quit_button = None;
    let mut volume_slider = None;

    // Root container
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgb(0.05, 0.05, 0.08)),
            MainMenuUi,
        ))
        .with_children(|parent| {
            // Title
            parent.spawn((
                Text::new("MAIN MENU"),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.7, 0.6)),
                Node {
                    margin: UiRect::bottom(Val::Px(60.0)),
                    ..default()
                },
            ));

            start_button = Some(spawn_menu_button(parent, "Start"));
            quit_button = Some(spawn_menu_button(parent, "Quit"));

            parent.spawn((
                Text::new("Music Volume"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.65)),
                Node {
                    margin: UiRect::top(Val::Px(40.0)),
                    ..default()
                },
            ));

            volume_slider = Some(spawn_volume_slider(parent, config.default_music_volume));
        });

    // Kept outside the UI tree; it lives as long as the controller.
    let background_music = config.music_track.as_ref().map(|path| {
        commands
            .spawn(BackgroundMusic::new(asset_server.load(path.as_str())))
            .id()
    });

    // Tagged with the screen like everything else; once claimed it is
    // marked to persist and teardown skips it.
    let controller = commands
        .spawn((
            MainMenuController {
                start_button,
                quit_button,
                volume_slider,
                background_music,
                click_sound: config
                    .click_sound
                    .as_ref()
                    .map(|path| asset_server.load(path.as_str())),
            },
            MainMenuUi,
        ))
        .id();

    // Discarding a duplicate controller takes its music player with it.
    if let Some(music) = background_music {
        commands.entity(controller).add_child(music);
    }
}

/// Helper to spawn a menu button.
fn spawn_menu_button(parent: &mut ChildBuilder, text: &str) -> Entity {
    parent
        .spawn((
            Button,
            Interactable::default(),
            Node {
                width: Val::Px(200.0),
                height: Val::Px(50.0),
                margin: UiRect::all(Val::Px(10.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(BUTTON_NORMAL),
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(text),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.85)),
            ));
        })
        .id()
}

/// Helper to spawn a slider track with its fill.
fn spawn_volume_slider(parent: &mut ChildBuilder, value: f32) -> Entity {
    let slider = VolumeSlider::new(value);

    parent
        .spawn((
            Button,
            slider,
            RelativeCursorPosition::default(),
            Node {
                width: Val::Px(200.0),
                height: Val::Px(12.0),
                margin: UiRect::top(Val::Px(10.0)),
                ..default()
            },
            BackgroundColor(Color::srgb(0.1, 0.1, 0.1)),
        ))
        .with_children(|track| {
            track.spawn((
                Node {
                    width: Val::Percent(slider.value * 100.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.55, 0.5, 0.45)),
                SliderFill,
            ));
        })
        .id()
}

/// Colour buttons by interaction, greying out disabled ones.
fn style_menu_buttons(
    mut buttons: Query<
        (&Interaction, &Interactable, &mut BackgroundColor),
        (Or<(Changed<Interaction>, Changed<Interactable>)>, With<Button>),
    >,
) {
    for (interaction, interactable, mut bg_color) in buttons.iter_mut() {
        *bg_color = match (interactable.0, interaction) {
            (false, _) => BUTTON_DISABLED,
            (true, Interaction::Pressed) => BUTTON_PRESSED,
            (true, Interaction::Hovered) => BUTTON_HOVERED,
            (true, Interaction::None) => BUTTON_NORMAL,
        }
        .into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PersistAcrossScreens, SceneLoadRequest};
    use crate::menu::ActiveMenu;
    use crate::test_support::*;

    #[test]
    fn controller_and_music_survive_move_to_sample_scene() {
        let mut app = test_app();
        app.add_systems(OnExit(GameState::MainMenu), despawn_screen::<MainMenuUi>);
        boot(&mut app);

        let menu = spawn_full_menu(&mut app, 0.7);
        for entity in [
            menu.controller,
            menu.start_button,
            menu.quit_button,
            menu.slider,
        ] {
            app.world_mut().entity_mut(entity).insert(MainMenuUi);
        }
        app.world_mut()
            .entity_mut(menu.controller)
            .add_child(menu.music);
        app.update();

        app.world_mut().send_event(SceneLoadRequest::new("SampleScene"));
        app.update();
        app.update();

        assert_eq!(
            *app.world().resource::<State<GameState>>().get(),
            GameState::InGame
        );

        // Screen widgets are gone.
        let entities = app.world().entities();
        assert!(!entities.contains(menu.start_button));
        assert!(!entities.contains(menu.quit_button));
        assert!(!entities.contains(menu.slider));

        // The controller and its music carry on.
        assert!(entities.contains(menu.controller));
        assert_eq!(app.world().resource::<ActiveMenu>().get(), Some(menu.controller));
        let music = app.world().get::<BackgroundMusic>(menu.music).unwrap();
        assert!(music.is_playing());
        assert_eq!(music.volume, 0.7);
    }

    #[test]
    fn unclaimed_screen_entities_are_torn_down() {
        let mut app = test_app();
        app.add_systems(OnExit(GameState::MainMenu), despawn_screen::<MainMenuUi>);
        boot(&mut app);

        let label = app.world_mut().spawn(MainMenuUi).id();
        let kept = app.world_mut().spawn((MainMenuUi, PersistAcrossScreens)).id();

        app.world_mut().send_event(SceneLoadRequest::new("SampleScene"));
        app.update();
        app.update();

        assert!(!app.world().entities().contains(label));
        assert!(app.world().entities().contains(kept));
    }
}
