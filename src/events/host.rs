//! Messages posted by the host game.
//!
//! The host sends these through the
//! [`HostBridge`](crate::resources::hostbridge::HostBridge) channel whenever
//! its own lifecycle callbacks fire.

use bevy_ecs::prelude::Entity;
use smallvec::SmallVec;

/// Entity list attached to object change notifications.
pub type EntityList = SmallVec<[Entity; 8]>;

#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// A save finished loading; start drawing.
    SaveLoaded,
    /// The player went back to the title screen; stop drawing.
    ReturnedToTitle,
    /// A new in-game day began in the current scene.
    DayStarted,
    /// The player moved to another scene.
    Warped { scene: String },
    /// A menu was opened or closed.
    MenuChanged,
    /// Objects were placed in or removed from a scene.
    ObjectListChanged {
        scene: String,
        added: EntityList,
        removed: EntityList,
    },
}
