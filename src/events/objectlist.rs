//! Incremental registry updates for placed and removed objects.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::placedobject::PlacedObject;
use crate::events::host::EntityList;
use crate::resources::bubbleconfig::BubbleConfig;
use crate::resources::machinecatalog::MachineCatalog;
use crate::resources::registry::MachineRegistry;
use crate::resources::session::ActiveScene;

/// Objects were placed in or removed from `scene`.
///
/// `removed` entities may already be despawned.
#[derive(Event, Debug, Clone)]
pub struct ObjectListChangedEvent {
    pub scene: String,
    pub added: EntityList,
    pub removed: EntityList,
}

/// Patch the registry with an object list change.
///
/// Changes in scenes other than the active one are ignored; the registry
/// only ever describes the scene the player is in.
pub fn observe_object_list_changed(
    trigger: On<ObjectListChangedEvent>,
    active_scene: Res<ActiveScene>,
    mut registry: ResMut<MachineRegistry>,
    catalog: Res<MachineCatalog>,
    config: Res<BubbleConfig>,
    objects: Query<&PlacedObject>,
) {
    let event = trigger.event();
    if !active_scene.is(&event.scene) {
        debug!("Ignoring object changes in inactive scene {}", event.scene);
        return;
    }

    let added = event.added.iter().filter_map(|entity| {
        objects
            .get(*entity)
            .ok()
            .map(|object| (*entity, object.qualified_id.as_str()))
    });
    registry.apply_delta(&event.removed, added, &catalog, &config);
}
