//! The main menu controller: single active instance, startup and bindings.

use bevy::prelude::*;
use bevy_kira_audio::AudioSource;

use crate::audio::{BackgroundMusic, ClickSoundChannel};
use crate::core::PersistAcrossScreens;
use crate::ui::widgets::{SliderValueChanged, VolumeSlider};

use super::config::MenuConfig;

/// Coordinates the main menu. Every reference is optional; anything left
/// unset is skipped.
#[derive(Component, Debug, Clone, Default)]
pub struct MainMenuController {
    pub start_button: Option<Entity>,
    pub quit_button: Option<Entity>,
    pub volume_slider: Option<Entity>,
    /// Entity carrying the [`BackgroundMusic`] player.
    pub background_music: Option<Entity>,
    pub click_sound: Option<Handle<AudioSource>>,
}

/// The one live controller. Owned by the app, so it outlives screens.
#[derive(Resource, Debug, Default)]
pub struct ActiveMenu(Option<Entity>);

impl ActiveMenu {
    pub fn get(&self) -> Option<Entity> {
        self.0
    }
}

/// What a bound menu button does when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Start,
    Quit,
}

/// Binds a button to a controller action.
#[derive(Component, Debug, Clone, Copy)]
pub struct MenuBinding {
    pub controller: Entity,
    pub action: MenuAction,
}

/// Binds a slider to a controller's music volume.
#[derive(Component, Debug, Clone, Copy)]
pub struct VolumeBinding {
    pub controller: Entity,
}

/// Register newly spawned controllers, discarding any that arrive while
/// another controller is still alive.
pub fn claim_active_menu(
    mut commands: Commands,
    mut active: ResMut<ActiveMenu>,
    spawned: Query<Entity, Added<MainMenuController>>,
    live: Query<(), With<MainMenuController>>,
) {
    for entity in spawned.iter() {
        if let Some(current) = active.get() {
            if current != entity && live.contains(current) {
                info!("Main menu already active, discarding {}", entity);
                commands.entity(entity).despawn_recursive();
                continue;
            }
        }

        active.0 = Some(entity);
        commands.entity(entity).insert(PersistAcrossScreens);
    }
}

/// Start the active controller: music, click channel and widget bindings.
pub fn start_menu_controller(
    mut commands: Commands,
    active: Res<ActiveMenu>,
    config: Res<MenuConfig>,
    controllers: Query<(Entity, &MainMenuController), Added<MainMenuController>>,
    sliders: Query<&VolumeSlider>,
    mut players: Query<&mut BackgroundMusic>,
) {
    for (entity, controller) in controllers.iter() {
        if active.get() != Some(entity) {
            continue;
        }

        if let Some(music) = controller.background_music {
            if let Ok(mut music) = players.get_mut(music) {
                if !music.is_playing() {
                    music.looped = true;
                    music.volume = controller
                        .volume_slider
                        .and_then(|slider| sliders.get(slider).ok())
                        .map_or(config.default_music_volume, |slider| slider.value);
                    music.play();
                }
            }
        }

        commands.entity(entity).insert(ClickSoundChannel::new(
            controller.click_sound.clone(),
            config.click_volume,
        ));

        let buttons = [
            (controller.start_button, MenuAction::Start),
            (controller.quit_button, MenuAction::Quit),
        ];
        for (button, action) in buttons {
            let Some(button) = button else {
                continue;
            };
            if let Some(mut button) = commands.get_entity(button) {
                button.insert(MenuBinding {
                    controller: entity,
                    action,
                });
            }
        }

        if let Some(slider) = controller.volume_slider {
            if let Some(mut slider) = commands.get_entity(slider) {
                slider.insert(VolumeBinding { controller: entity });
            }
        }
    }
}

/// Set a controller's music volume. No-op without a music player.
pub fn set_music_volume(
    controller: &MainMenuController,
    volume: f32,
    players: &mut Query<&mut BackgroundMusic>,
) {
    let Some(music) = controller.background_music else {
        return;
    };
    if let Ok(mut music) = players.get_mut(music) {
        music.volume = volume;
    }
}

/// Push slider changes to the music of the controller the slider is bound to.
pub fn apply_volume_changes(
    mut changes: EventReader<SliderValueChanged>,
    bindings: Query<&VolumeBinding>,
    controllers: Query<&MainMenuController>,
    mut players: Query<&mut BackgroundMusic>,
) {
    for change in changes.read() {
        let Ok(binding) = bindings.get(change.slider) else {
            continue;
        };
        let Ok(controller) = controllers.get(binding.controller) else {
            continue;
        };

        set_music_volume(controller, change.value, &mut players);
    }
}
