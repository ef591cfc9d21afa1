//! UI plugin - screens, widgets and the menu config they read.

use bevy::prelude::*;

use crate::menu::load_menu_config;

use super::{main_menu, sample_scene, widgets};

/// UI plugin - handles all user interface.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_menu_config);

        widgets::setup_widget_systems(app);

        main_menu::setup_main_menu_systems(app);
        sample_scene::setup_sample_scene_systems(app);
    }
}
