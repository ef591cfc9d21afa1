//! Scene plugin - turns scene load requests into state transitions.

use bevy::prelude::*;

use crate::core::{GameState, SceneLoadRequest};

use super::directory::SceneDirectory;

/// Scene plugin - owns the scene directory and applies load requests.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneDirectory>()
            .add_systems(PostUpdate, apply_scene_requests);
    }
}

/// Apply scene load requests. Unknown names are reported here and dropped.
pub fn apply_scene_requests(
    mut requests: EventReader<SceneLoadRequest>,
    directory: Res<SceneDirectory>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for request in requests.read() {
        match directory.resolve(&request.name) {
            Ok(state) => {
                info!("Loading scene: {}", request.name);
                next_state.set(state);
            }
            Err(e) => error!("Failed to load scene: {}", e),
        }
    }
}
