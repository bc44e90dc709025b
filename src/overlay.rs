//! Overlay context.
//!
//! [`BubbleOverlay`] owns the ECS world with every overlay resource and
//! observer, plus the update schedule. A host drives it with three calls:
//!
//! 1. post lifecycle notifications through [`BubbleOverlay::host_sender`]
//! 2. call [`BubbleOverlay::update`] once per simulation tick
//! 3. call [`BubbleOverlay::render`] once per rendered frame
//!
//! Host objects (machines and everything else placed in a scene) are spawned
//! into the same world through [`BubbleOverlay::world_mut`], so the registry
//! and readiness filter read live component values.

use bevy_ecs::prelude::*;
use crossbeam_channel::Sender;
use log::info;

use crate::events::host::HostEvent;
use crate::events::objectlist::observe_object_list_changed;
use crate::events::scene::{
    RescanMachinesEvent, RescanReason, observe_rescan_machines, observe_scene_entered,
};
use crate::events::session::{observe_returned_to_title, observe_save_loaded};
use crate::resources::bubbleclock::BubbleClock;
use crate::resources::bubbleconfig::BubbleConfig;
use crate::resources::bubblesheet::BubbleSheet;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::hostbridge::HostBridge;
use crate::resources::machinecatalog::MachineCatalog;
use crate::resources::registry::MachineRegistry;
use crate::resources::session::{ActiveScene, Session};
use crate::resources::worldtime::WorldTime;
use crate::systems::bubbleclock::{animate_bubbles, overlay_enabled};
use crate::systems::hostevents::pump_host_events;
use crate::systems::render::{BubbleSurface, render_bubbles};
use crate::systems::time::update_world_time;

/// Insert overlay resources and observers into `world`.
pub fn install_overlay(world: &mut World, config: BubbleConfig) {
    world.insert_resource(config);
    world.insert_resource(MachineCatalog::new());
    world.insert_resource(MachineRegistry::new());
    world.insert_resource(BubbleClock::new());
    world.insert_resource(WorldTime::default());
    world.insert_resource(Session::default());
    world.insert_resource(ActiveScene::default());
    world.insert_resource(HostBridge::new());
    world.init_resource::<BubbleSheet>();
    world.init_resource::<Camera2DRes>();

    world.add_observer(observe_save_loaded);
    world.add_observer(observe_returned_to_title);
    world.add_observer(observe_scene_entered);
    world.add_observer(observe_rescan_machines);
    world.add_observer(observe_object_list_changed);
    // Ensure observers are registered before any host event is dispatched.
    world.flush();
}

/// Update schedule run once per tick.
pub fn overlay_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(animate_bubbles.run_if(overlay_enabled));
    update
}

pub struct BubbleOverlay {
    world: World,
    update: Schedule,
}

impl Default for BubbleOverlay {
    fn default() -> Self {
        Self::new(BubbleConfig::new())
    }
}

impl BubbleOverlay {
    pub fn new(config: BubbleConfig) -> Self {
        let mut world = World::new();
        install_overlay(&mut world, config);
        info!("Bubble overlay ready");
        Self {
            world,
            update: overlay_schedule(),
        }
    }

    /// Sender the host posts its notifications to.
    pub fn host_sender(&self) -> Sender<HostEvent> {
        self.world.resource::<HostBridge>().sender()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn config(&self) -> &BubbleConfig {
        self.world.resource::<BubbleConfig>()
    }

    pub fn config_mut(&mut self) -> Mut<'_, BubbleConfig> {
        self.world.resource_mut::<BubbleConfig>()
    }

    pub fn registry(&self) -> &MachineRegistry {
        self.world.resource::<MachineRegistry>()
    }

    pub fn clock(&self) -> BubbleClock {
        *self.world.resource::<BubbleClock>()
    }

    /// Flip the master switch.
    ///
    /// The registry is frozen while the overlay is off, so switching it back
    /// on rescans the active scene.
    pub fn set_enabled(&mut self, enabled: bool) {
        let was_enabled = self.config().enabled;
        self.config_mut().enabled = enabled;
        if enabled && !was_enabled {
            self.world.trigger(RescanMachinesEvent {
                reason: RescanReason::Enabled,
            });
        }
    }

    /// Handle pending host notifications without advancing time.
    pub fn pump(&mut self) -> usize {
        pump_host_events(&mut self.world)
    }

    /// One simulation tick of `elapsed_ms` milliseconds.
    pub fn update(&mut self, elapsed_ms: u32) {
        pump_host_events(&mut self.world);
        update_world_time(&mut self.world, elapsed_ms);
        self.update.run(&mut self.world);
    }

    /// Draw this frame's bubbles on `surface`. Returns the number of draws.
    pub fn render(&mut self, surface: &mut impl BubbleSurface) -> usize {
        pump_host_events(&mut self.world);
        render_bubbles(&mut self.world, surface)
    }
}
