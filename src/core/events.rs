//! Global events used for cross-system communication.
//!
//! Screens never touch the scene loader or the log directly. They send
//! these events and the owning plugins act on them, which keeps each
//! system testable on a headless app.

use bevy::prelude::*;

/// Asks the scene loader to replace the active screen with `name`.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct SceneLoadRequest {
    pub name: String,
}

impl SceneLoadRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Severity of a [`MenuNotice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warn,
}

/// Human-readable diagnostic raised by menu systems.
///
/// Relayed to the log by [`relay_menu_notices`](super::relay_menu_notices).
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct MenuNotice {
    pub level: NoticeLevel,
    pub message: String,
}

impl MenuNotice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warn,
            message: message.into(),
        }
    }
}
