//! Scene transition events and the registry rebuild observer.
//!
//! A full rescan of the active scene happens when the player warps
//! ([`SceneEnteredEvent`]), when a day starts or when a menu opens or closes
//! ([`RescanMachinesEvent`]). Both end in [`rebuild_registry`].

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::location::Location;
use crate::components::placedobject::PlacedObject;
use crate::resources::bubbleconfig::BubbleConfig;
use crate::resources::machinecatalog::MachineCatalog;
use crate::resources::registry::MachineRegistry;
use crate::resources::session::ActiveScene;

/// The player entered `scene`.
#[derive(Event, Debug, Clone)]
pub struct SceneEnteredEvent {
    pub scene: String,
}

/// Why the active scene is rescanned without changing scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RescanReason {
    DayStarted,
    MenuChanged,
    /// The master switch was turned back on.
    Enabled,
}

/// Rescan the active scene.
#[derive(Event, Debug, Clone, Copy)]
pub struct RescanMachinesEvent {
    pub reason: RescanReason,
}

pub fn observe_scene_entered(
    trigger: On<SceneEnteredEvent>,
    mut active_scene: ResMut<ActiveScene>,
    mut registry: ResMut<MachineRegistry>,
    catalog: Res<MachineCatalog>,
    config: Res<BubbleConfig>,
    objects: Query<(Entity, &PlacedObject, &Location)>,
) {
    let scene = &trigger.event().scene;
    debug!("Entered scene {}", scene);
    active_scene.set(scene.clone());
    rebuild_registry(&active_scene, &mut registry, &catalog, &config, &objects);
}

pub fn observe_rescan_machines(
    trigger: On<RescanMachinesEvent>,
    active_scene: Res<ActiveScene>,
    mut registry: ResMut<MachineRegistry>,
    catalog: Res<MachineCatalog>,
    config: Res<BubbleConfig>,
    objects: Query<(Entity, &PlacedObject, &Location)>,
) {
    debug!("Rescanning machines: {:?}", trigger.event().reason);
    rebuild_registry(&active_scene, &mut registry, &catalog, &config, &objects);
}

/// Rebuild the registry from every object located in the active scene.
///
/// Without an active scene there is nothing to scan and the registry is left
/// as it is.
pub fn rebuild_registry(
    active_scene: &ActiveScene,
    registry: &mut MachineRegistry,
    catalog: &MachineCatalog,
    config: &BubbleConfig,
    objects: &Query<(Entity, &PlacedObject, &Location)>,
) {
    let Some(scene) = active_scene.name.as_deref() else {
        return;
    };
    let scene_objects = objects
        .iter()
        .filter(|(_, _, location)| location.is(scene))
        .map(|(entity, object, _)| (entity, object.qualified_id.as_str()));
    registry.rebuild(scene_objects, catalog, config);
}
