//! Session and scene tracking resources.
//!
//! [`Session`] records whether a save is loaded; bubbles are only drawn while
//! one is. [`ActiveScene`] names the scene the player is currently in, which
//! scopes both registry rebuilds and incremental object updates.

use bevy_ecs::prelude::Resource;

/// Whether the host has a save loaded.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    pub loaded: bool,
}

/// Scene the player is in, if any.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveScene {
    pub name: Option<String>,
}

impl ActiveScene {
    pub fn set(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn clear(&mut self) {
        self.name = None;
    }

    pub fn is(&self, scene: &str) -> bool {
        self.name.as_deref() == Some(scene)
    }
}
