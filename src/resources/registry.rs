//! Tracked machine registry.
//!
//! [`MachineRegistry`] holds the machines of the active scene the overlay
//! cares about. It is rebuilt from scratch on scene transitions and patched
//! with [`MachineRegistry::apply_delta`] when objects are placed or picked up.
//!
//! Entries are plain [`Entity`] ids: the registry never owns or despawns world
//! objects, and consumers must tolerate ids whose entity is gone.

use bevy_ecs::prelude::*;
use log::debug;

use crate::resources::bubbleconfig::BubbleConfig;
use crate::resources::machinecatalog::{MachineCatalog, MachineKind};

/// A machine entity recognised by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackedMachine {
    pub entity: Entity,
    pub kind: MachineKind,
}

/// Machines tracked in the active scene, in discovery order.
#[derive(Resource, Debug, Clone, Default)]
pub struct MachineRegistry {
    machines: Vec<TrackedMachine>,
}

impl MachineRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn machines(&self) -> &[TrackedMachine] {
        &self.machines
    }

    pub fn len(&self) -> usize {
        self.machines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.machines.is_empty()
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.machines.iter().any(|m| m.entity == entity)
    }

    pub fn clear(&mut self) {
        self.machines.clear();
    }

    /// Replace the tracked set with every matching object of the scene.
    ///
    /// `scene_objects` yields `(entity, qualified_id)` pairs. Nothing happens
    /// while the overlay is disabled.
    pub fn rebuild<'a>(
        &mut self,
        scene_objects: impl IntoIterator<Item = (Entity, &'a str)>,
        catalog: &MachineCatalog,
        config: &BubbleConfig,
    ) {
        if !config.enabled {
            return;
        }
        self.machines.clear();
        for (entity, id) in scene_objects {
            if let Some(kind) = catalog.match_enabled(id, config) {
                self.push_unique(TrackedMachine { entity, kind });
            }
        }
        debug!("Registry rebuilt with {} machines", self.machines.len());
    }

    /// Drop removed entities and append newly placed matching ones.
    ///
    /// Removal is by identity, so an entity that is already despawned is still
    /// removed. Added entities already tracked are ignored. Surviving entries
    /// keep their order. Nothing happens while the overlay is disabled.
    pub fn apply_delta<'a>(
        &mut self,
        removed: &[Entity],
        added: impl IntoIterator<Item = (Entity, &'a str)>,
        catalog: &MachineCatalog,
        config: &BubbleConfig,
    ) {
        if !config.enabled {
            return;
        }
        if !removed.is_empty() {
            self.machines.retain(|m| !removed.contains(&m.entity));
        }
        for (entity, id) in added {
            if let Some(kind) = catalog.match_enabled(id, config) {
                self.push_unique(TrackedMachine { entity, kind });
            }
        }
    }

    fn push_unique(&mut self, machine: TrackedMachine) {
        if !self.contains(machine.entity) {
            self.machines.push(machine);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entities(world: &mut World, n: usize) -> Vec<Entity> {
        (0..n).map(|_| world.spawn_empty().id()).collect()
    }

    fn tracked(registry: &MachineRegistry) -> Vec<Entity> {
        registry.machines().iter().map(|m| m.entity).collect()
    }

    #[test]
    fn test_rebuild_keeps_only_matching_objects() {
        let mut world = World::new();
        let e = entities(&mut world, 4);
        let catalog = MachineCatalog::new();
        let config = BubbleConfig::new();
        let mut registry = MachineRegistry::new();

        registry.rebuild(
            [
                (e[0], "(BC)15"),
                (e[1], "(O)388"),
                (e[2], "(BC)HeavyFurnace"),
                (e[3], "(BC)130"),
            ],
            &catalog,
            &config,
        );

        assert_eq!(tracked(&registry), vec![e[0], e[2]]);
        assert_eq!(registry.machines()[1].kind, MachineKind::Furnace);
    }

    #[test]
    fn test_rebuild_replaces_previous_contents() {
        let mut world = World::new();
        let e = entities(&mut world, 2);
        let catalog = MachineCatalog::new();
        let config = BubbleConfig::new();
        let mut registry = MachineRegistry::new();

        registry.rebuild([(e[0], "(BC)12")], &catalog, &config);
        registry.rebuild([(e[1], "(BC)163")], &catalog, &config);

        assert_eq!(tracked(&registry), vec![e[1]]);
    }

    #[test]
    fn test_rebuild_skips_disabled_kinds() {
        let mut world = World::new();
        let e = entities(&mut world, 2);
        let catalog = MachineCatalog::new();
        let mut config = BubbleConfig::new();
        config.set_kind_enabled(MachineKind::Keg, false);
        let mut registry = MachineRegistry::new();

        registry.rebuild([(e[0], "(BC)12"), (e[1], "(BC)15")], &catalog, &config);

        assert_eq!(tracked(&registry), vec![e[1]]);
    }

    #[test]
    fn test_rebuild_deduplicates_entities() {
        let mut world = World::new();
        let e = entities(&mut world, 1);
        let catalog = MachineCatalog::new();
        let config = BubbleConfig::new();
        let mut registry = MachineRegistry::new();

        registry.rebuild([(e[0], "(BC)15"), (e[0], "(BC)15")], &catalog, &config);

        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_disabled_master_leaves_registry_unchanged() {
        let mut world = World::new();
        let e = entities(&mut world, 3);
        let catalog = MachineCatalog::new();
        let mut config = BubbleConfig::new();
        let mut registry = MachineRegistry::new();
        registry.rebuild([(e[0], "(BC)15")], &catalog, &config);

        config.enabled = false;
        registry.rebuild([(e[1], "(BC)12")], &catalog, &config);
        registry.apply_delta(&[e[0]], [(e[2], "(BC)12")], &catalog, &config);

        assert_eq!(tracked(&registry), vec![e[0]]);
    }

    #[test]
    fn test_apply_delta_swaps_removed_for_added() {
        let mut world = World::new();
        let e = entities(&mut world, 3);
        let (a, b, c) = (e[0], e[1], e[2]);
        let catalog = MachineCatalog::new();
        let config = BubbleConfig::new();
        let mut registry = MachineRegistry::new();
        registry.rebuild([(a, "(BC)15"), (c, "(BC)12")], &catalog, &config);

        registry.apply_delta(&[a], [(b, "(BC)163")], &catalog, &config);

        assert_eq!(tracked(&registry), vec![c, b]);
    }

    #[test]
    fn test_apply_delta_preserves_order_of_survivors() {
        let mut world = World::new();
        let e = entities(&mut world, 5);
        let catalog = MachineCatalog::new();
        let config = BubbleConfig::new();
        let mut registry = MachineRegistry::new();
        registry.rebuild(
            [(e[0], "(BC)15"), (e[1], "(BC)12"), (e[2], "(BC)16"), (e[3], "(BC)17")],
            &catalog,
            &config,
        );

        registry.apply_delta(&[e[1]], [(e[4], "(BC)19")], &catalog, &config);

        assert_eq!(tracked(&registry), vec![e[0], e[2], e[3], e[4]]);
    }

    #[test]
    fn test_apply_delta_ignores_non_machines_and_duplicates() {
        let mut world = World::new();
        let e = entities(&mut world, 2);
        let catalog = MachineCatalog::new();
        let config = BubbleConfig::new();
        let mut registry = MachineRegistry::new();
        registry.rebuild([(e[0], "(BC)15")], &catalog, &config);

        registry.apply_delta(&[], [(e[0], "(BC)15"), (e[1], "(O)388")], &catalog, &config);

        assert_eq!(tracked(&registry), vec![e[0]]);
    }

    #[test]
    fn test_apply_delta_never_adds_disabled_kind() {
        let mut world = World::new();
        let e = entities(&mut world, 1);
        let catalog = MachineCatalog::new();
        let mut config = BubbleConfig::new();
        config.set_kind_enabled(MachineKind::CrabPot, false);
        let mut registry = MachineRegistry::new();

        registry.apply_delta(&[], [(e[0], "(O)710")], &catalog, &config);

        assert!(registry.is_empty());
    }

    #[test]
    fn test_apply_delta_removes_despawned_entity() {
        let mut world = World::new();
        let e = entities(&mut world, 1);
        let catalog = MachineCatalog::new();
        let config = BubbleConfig::new();
        let mut registry = MachineRegistry::new();
        registry.rebuild([(e[0], "(BC)15")], &catalog, &config);

        world.despawn(e[0]);
        registry.apply_delta(&[e[0]], Vec::<(Entity, &str)>::new(), &catalog, &config);

        assert!(registry.is_empty());
    }
}
