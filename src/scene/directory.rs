//! Registry of loadable scenes.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::core::{GameState, SceneLoadError};

/// Name of the gameplay scene reached from the main menu.
pub const SAMPLE_SCENE: &str = "SampleScene";

/// Name of the main menu scene.
pub const MAIN_MENU_SCENE: &str = "MainMenu";

/// Resource mapping scene names to the state that shows them.
#[derive(Resource, Debug, Clone)]
pub struct SceneDirectory {
    scenes: HashMap<String, GameState>,
}

impl Default for SceneDirectory {
    fn default() -> Self {
        let mut directory = Self {
            scenes: HashMap::new(),
        };
        directory.register(MAIN_MENU_SCENE, GameState::MainMenu);
        directory.register(SAMPLE_SCENE, GameState::InGame);
        directory
    }
}

impl SceneDirectory {
    /// Register (or replace) a scene under `name`.
    pub fn register(&mut self, name: impl Into<String>, state: GameState) {
        self.scenes.insert(name.into(), state);
    }

    /// Look up the state for a scene name.
    pub fn resolve(&self, name: &str) -> Result<GameState, SceneLoadError> {
        self.scenes
            .get(name)
            .copied()
            .ok_or_else(|| SceneLoadError::UnknownScene(name.to_string()))
    }
}
