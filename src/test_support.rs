//! Headless app helpers shared by the unit tests.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;

use crate::audio::BackgroundMusic;
use crate::core::CorePlugin;
use crate::menu::{MainMenuController, MenuPlugin};
use crate::scene::ScenePlugin;
use crate::ui::widgets::{Interactable, VolumeSlider};

/// Simulated length of one frame.
pub const FRAME: Duration = Duration::from_millis(250);

/// An app with the menu logic and no window, audio device or renderer.
pub fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME))
        .add_plugins((CorePlugin, ScenePlugin, MenuPlugin));
    app
}

/// Run until the app has left `Loading` and time is ticking.
pub fn boot(app: &mut App) {
    app.update();
    app.update();
}

/// Every event of type `E` seen so far.
pub struct Recorded<E>(pub Vec<E>);

impl<E: Send + Sync + 'static> Resource for Recorded<E> {}

/// Start recording events of type `E`.
pub fn record<E: Event + Clone>(app: &mut App) {
    app.insert_resource(Recorded::<E>(Vec::new()))
        .add_systems(Last, collect::<E>);
}

fn collect<E: Event + Clone>(mut events: EventReader<E>, mut recorded: ResMut<Recorded<E>>) {
    recorded.0.extend(events.read().cloned());
}

pub fn recorded<E: Event>(app: &App) -> &Vec<E> {
    &app.world().resource::<Recorded<E>>().0
}

/// Entities of a fully wired menu.
pub struct TestMenu {
    pub controller: Entity,
    pub start_button: Entity,
    pub quit_button: Entity,
    pub slider: Entity,
    pub music: Entity,
}

pub fn spawn_button(app: &mut App) -> Entity {
    app.world_mut()
        .spawn((Interaction::None, Interactable::default()))
        .id()
}

/// Spawn widgets, a music player and a controller referencing all of them.
pub fn spawn_full_menu(app: &mut App, slider_value: f32) -> TestMenu {
    let start_button = spawn_button(app);
    let quit_button = spawn_button(app);
    let slider = app.world_mut().spawn(VolumeSlider::new(slider_value)).id();
    let music = app
        .world_mut()
        .spawn(BackgroundMusic::new(Handle::default()))
        .id();

    let controller = app
        .world_mut()
        .spawn(MainMenuController {
            start_button: Some(start_button),
            quit_button: Some(quit_button),
            volume_slider: Some(slider),
            background_music: Some(music),
            click_sound: Some(Handle::default()),
        })
        .id();

    TestMenu {
        controller,
        start_button,
        quit_button,
        slider,
        music,
    }
}

/// Simulate a fresh press on a button.
pub fn press(app: &mut App, button: Entity) {
    app.world_mut()
        .entity_mut(button)
        .insert(Interaction::Pressed);
}
