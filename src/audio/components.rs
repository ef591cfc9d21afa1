//! Audio components and events.
//!
//! Gameplay code only edits these; the backend in `plugin.rs` is the one
//! place that talks to kira.

use bevy::prelude::*;
use bevy_kira_audio::{AudioInstance, AudioSource};

/// A persistent music player.
///
/// Setting fields only describes the desired playback; the backend starts
/// the track once `play` has been called and follows later volume changes.
#[derive(Component, Debug, Clone)]
pub struct BackgroundMusic {
    pub track: Handle<AudioSource>,
    pub looped: bool,
    /// Output level in `[0, 1]`.
    pub volume: f32,
    playing: bool,
}

impl BackgroundMusic {
    pub fn new(track: Handle<AudioSource>) -> Self {
        Self {
            track,
            looped: false,
            volume: 1.0,
            playing: false,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn play(&mut self) {
        self.playing = true;
    }
}

/// The kira instance started for a [`BackgroundMusic`] player.
///
/// Kira only creates the instance once the track has loaded, so volume
/// changes made before then stay pending until they can be applied.
#[derive(Component, Debug)]
pub struct MusicInstance {
    pub handle: Handle<AudioInstance>,
    applied_volume: f32,
}

impl MusicInstance {
    /// `volume` is the level the track was started with.
    pub fn new(handle: Handle<AudioInstance>, volume: f32) -> Self {
        Self {
            handle,
            applied_volume: volume,
        }
    }

    /// The player's volume, if the instance does not have it yet.
    pub fn pending_volume(&self, music: &BackgroundMusic) -> Option<f32> {
        (music.volume != self.applied_volume).then_some(music.volume)
    }

    pub fn mark_applied(&mut self, volume: f32) {
        self.applied_volume = volume;
    }
}

/// Dedicated emitter for UI click sounds.
///
/// Never plays on its own: a clip is only heard when a [`PlayClickSound`]
/// event is sent for it.
#[derive(Component, Debug, Clone)]
pub struct ClickSoundChannel {
    pub clip: Option<Handle<AudioSource>>,
    /// Fixed output level in `[0, 1]`.
    pub volume: f32,
}

impl ClickSoundChannel {
    pub fn new(clip: Option<Handle<AudioSource>>, volume: f32) -> Self {
        Self { clip, volume }
    }
}

/// Fire-and-forget playback of a click clip.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct PlayClickSound {
    pub clip: Handle<AudioSource>,
    pub volume: f32,
}

/// Kira audio channel used for click sounds, so they never cut the music.
#[derive(Resource)]
pub struct ClickSounds;
