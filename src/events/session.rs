//! Save lifecycle events and observers.
//!
//! The overlay only draws while a save is loaded. Loading a save marks the
//! [`Session`] as loaded and starts from an empty registry; returning to the
//! title marks it unloaded, which stops rendering until the next load.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::registry::MachineRegistry;
use crate::resources::session::{ActiveScene, Session};

#[derive(Event, Debug, Clone, Copy)]
pub struct SaveLoadedEvent {}

#[derive(Event, Debug, Clone, Copy)]
pub struct ReturnedToTitleEvent {}

pub fn observe_save_loaded(
    _trigger: On<SaveLoadedEvent>,
    mut session: ResMut<Session>,
    mut registry: ResMut<MachineRegistry>,
) {
    info!("Save loaded, bubble rendering on");
    session.loaded = true;
    registry.clear();
}

pub fn observe_returned_to_title(
    _trigger: On<ReturnedToTitleEvent>,
    mut session: ResMut<Session>,
    mut active_scene: ResMut<ActiveScene>,
) {
    info!("Returned to title, bubble rendering off");
    session.loaded = false;
    active_scene.clear();
}
