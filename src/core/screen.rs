//! Screen teardown shared by every screen.

use bevy::prelude::*;

/// Marker for entities that screen teardown must leave alone.
#[derive(Component, Debug)]
pub struct PersistAcrossScreens;

/// Despawn everything tagged with screen marker `T`, except entities that
/// have been marked to persist.
pub fn despawn_screen<T: Component>(
    mut commands: Commands,
    query: Query<Entity, (With<T>, Without<PersistAcrossScreens>)>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
