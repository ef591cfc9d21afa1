//! Scene loading - maps scene names onto game states.

mod directory;
mod plugin;

pub use directory::{SceneDirectory, MAIN_MENU_SCENE, SAMPLE_SCENE};
pub use plugin::{apply_scene_requests, ScenePlugin};
