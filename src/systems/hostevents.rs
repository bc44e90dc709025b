//! Host event dispatch.
//!
//! Drains the [`HostBridge`] receiver and triggers the matching ECS event for
//! each message. Runs at the start of every update, before the animation
//! clock and before the frame is rendered, so the registry always reflects
//! the latest host notifications.

use bevy_ecs::prelude::*;
use log::debug;

use crate::events::host::HostEvent;
use crate::events::objectlist::ObjectListChangedEvent;
use crate::events::scene::{RescanMachinesEvent, RescanReason, SceneEnteredEvent};
use crate::events::session::{ReturnedToTitleEvent, SaveLoadedEvent};
use crate::resources::hostbridge::HostBridge;

/// Dispatch every pending host message. Returns how many were handled.
pub fn pump_host_events(world: &mut World) -> usize {
    let pending: Vec<HostEvent> = match world.get_resource::<HostBridge>() {
        Some(bridge) => bridge.rx.try_iter().collect(),
        None => return 0,
    };
    let count = pending.len();
    for event in pending {
        dispatch_host_event(world, event);
    }
    count
}

/// Trigger the ECS event for a single host message.
pub fn dispatch_host_event(world: &mut World, event: HostEvent) {
    debug!("Host event: {:?}", event);
    match event {
        HostEvent::SaveLoaded => world.trigger(SaveLoadedEvent {}),
        HostEvent::ReturnedToTitle => world.trigger(ReturnedToTitleEvent {}),
        HostEvent::DayStarted => world.trigger(RescanMachinesEvent {
            reason: RescanReason::DayStarted,
        }),
        HostEvent::MenuChanged => world.trigger(RescanMachinesEvent {
            reason: RescanReason::MenuChanged,
        }),
        HostEvent::Warped { scene } => world.trigger(SceneEnteredEvent { scene }),
        HostEvent::ObjectListChanged {
            scene,
            added,
            removed,
        } => world.trigger(ObjectListChangedEvent {
            scene,
            added,
            removed,
        }),
    }
}
