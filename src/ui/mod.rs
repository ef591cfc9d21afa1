//! UI module - screens and widgets.

mod main_menu;
mod plugin;
mod sample_scene;
pub mod widgets;

pub use plugin::UiPlugin;
