//! Menu module - the main menu controller and its action sequences.

mod config;
mod controller;
mod plugin;
mod sequence;

pub use config::{load_menu_config, MenuConfig, MENU_CONFIG_PATH};
pub use controller::{
    set_music_volume, ActiveMenu, MainMenuController, MenuAction, MenuBinding, VolumeBinding,
};
pub use plugin::{MenuPlugin, MenuSystems};
pub use sequence::{emit_click_sound, MenuSequence};
