//! Audio module - background music player, click channel, kira backend.

mod components;
mod plugin;

pub use components::{
    BackgroundMusic, ClickSoundChannel, ClickSounds, MusicInstance, PlayClickSound,
};
pub use plugin::MenuAudioPlugin;
