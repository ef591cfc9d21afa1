//! Start and Quit sequences: click, disable, wait, act, re-enable.
//!
//! A running sequence is a [`MenuSequence`] component on the pressed button.
//! Despawning the button drops the sequence with it, so a delayed step never
//! runs against a torn-down screen.

use bevy::prelude::*;
use std::time::Duration;

use crate::audio::{ClickSoundChannel, PlayClickSound};
use crate::core::{MenuNotice, SceneLoadRequest};
use crate::ui::widgets::Interactable;

use super::config::MenuConfig;
use super::controller::{MenuAction, MenuBinding};

/// A pending menu action waiting out its delay.
#[derive(Component, Debug)]
pub struct MenuSequence {
    pub action: MenuAction,
    delay: Timer,
}

impl MenuSequence {
    pub fn new(action: MenuAction, delay: Duration) -> Self {
        Self {
            action,
            delay: Timer::new(delay, TimerMode::Once),
        }
    }
}

/// Emit the click sound through a controller's click channel.
///
/// Without a clip this only warns.
pub fn emit_click_sound(
    channel: &ClickSoundChannel,
    clicks: &mut EventWriter<PlayClickSound>,
    notices: &mut EventWriter<MenuNotice>,
) {
    match &channel.clip {
        Some(clip) => {
            clicks.send(PlayClickSound {
                clip: clip.clone(),
                volume: channel.volume,
            });
        }
        None => {
            notices.send(MenuNotice::warn("Click sound not assigned!"));
        }
    }
}

/// Begin a sequence for each interactable bound button that was just pressed.
pub fn handle_menu_button_presses(
    mut commands: Commands,
    config: Res<MenuConfig>,
    mut buttons: Query<
        (Entity, &Interaction, &MenuBinding, &mut Interactable),
        (Changed<Interaction>, Without<MenuSequence>),
    >,
    channels: Query<&ClickSoundChannel>,
    mut clicks: EventWriter<PlayClickSound>,
    mut notices: EventWriter<MenuNotice>,
) {
    for (entity, interaction, binding, mut interactable) in buttons.iter_mut() {
        if *interaction != Interaction::Pressed || !interactable.0 {
            continue;
        }

        if let Ok(channel) = channels.get(binding.controller) {
            emit_click_sound(channel, &mut clicks, &mut notices);
        }
        interactable.0 = false;
        commands
            .entity(entity)
            .insert(MenuSequence::new(binding.action, config.action_delay()));
    }
}

/// Tick pending sequences on real time and run the ones whose delay is up.
pub fn advance_menu_sequences(
    mut commands: Commands,
    time: Res<Time<Real>>,
    config: Res<MenuConfig>,
    mut sequences: Query<(Entity, &mut MenuSequence, &mut Interactable)>,
    mut scene_requests: EventWriter<SceneLoadRequest>,
    mut exit: EventWriter<AppExit>,
    mut notices: EventWriter<MenuNotice>,
) {
    for (entity, mut sequence, mut interactable) in sequences.iter_mut() {
        if !sequence.delay.tick(time.delta()).finished() {
            continue;
        }

        match sequence.action {
            MenuAction::Start => {
                scene_requests.send(SceneLoadRequest::new(config.start_scene.clone()));
            }
            MenuAction::Quit => {
                exit.send(AppExit::Success);
                notices.send(MenuNotice::info(config.quit_notice.clone()));
            }
        }

        // Exit is processed after this frame, so the quit button is
        // re-enabled too.
        interactable.0 = true;
        commands.entity(entity).remove::<MenuSequence>();
    }
}
