//! Audio plugin - drives kira from the audio components.
//!
//! Not added in headless tests: everything above this layer only sends
//! events and edits components.

use bevy::prelude::*;
use bevy_kira_audio::{
    Audio, AudioApp, AudioChannel, AudioControl, AudioInstance, AudioPlugin, AudioTween,
};

use super::components::*;

/// Audio plugin - kira backend for music and click sounds.
pub struct MenuAudioPlugin;

impl Plugin for MenuAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(AudioPlugin)
            .add_audio_channel::<ClickSounds>()
            .add_event::<PlayClickSound>()
            .add_systems(PostUpdate, (drive_background_music, play_click_sounds));
    }
}

/// Start music players that were asked to play and keep kira's volume in
/// step with the player, retrying until the instance exists.
fn drive_background_music(
    mut commands: Commands,
    audio: Res<Audio>,
    mut instances: ResMut<Assets<AudioInstance>>,
    mut players: Query<(Entity, &BackgroundMusic, Option<&mut MusicInstance>)>,
) {
    for (entity, music, instance) in players.iter_mut() {
        match instance {
            Some(mut instance) => {
                let Some(volume) = instance.pending_volume(music) else {
                    continue;
                };
                if let Some(audio_instance) = instances.get_mut(&instance.handle) {
                    audio_instance.set_volume(f64::from(volume), AudioTween::default());
                    instance.mark_applied(volume);
                }
            }
            None if music.is_playing() => {
                let mut command = audio.play(music.track.clone());
                if music.looped {
                    command.looped();
                }
                command.with_volume(f64::from(music.volume));
                let handle = command.handle();
                commands
                    .entity(entity)
                    .insert(MusicInstance::new(handle, music.volume));
                info!("Started background music at volume {:.2}", music.volume);
            }
            None => {}
        }
    }
}

/// Play queued click sounds on their own channel.
fn play_click_sounds(
    mut clicks: EventReader<PlayClickSound>,
    channel: Res<AudioChannel<ClickSounds>>,
) {
    for click in clicks.read() {
        channel
            .play(click.clip.clone())
            .with_volume(f64::from(click.volume));
    }
}
