//! Readiness filter.
//!
//! Decides, every render pass, which tracked machines get a bubble. Nothing is
//! cached between frames: the host mutates machine fields continuously and a
//! stale answer would show up on screen.
//!
//! Rules
//! - Regular machines are ready when their timer has run out
//!   (`minutes_until_ready <= 0`) and they are not flagged
//!   `ready_for_harvest`. Casks report negative minutes after their output
//!   was removed, hence `<=`. Machines flagged for harvest already get the
//!   host's own indicator.
//! - Crab pots are ready when they hold neither bait nor a catch, i.e. when
//!   they sit empty waiting for bait. This is deliberately the opposite of
//!   the regular rule and must stay that way.
//! - A machine missing the component its rule needs is never ready.

use bevy_ecs::prelude::*;

use crate::components::machine::{CrabPot, MachineProgress};
use crate::resources::machinecatalog::MachineKind;
use crate::resources::registry::{MachineRegistry, TrackedMachine};

/// Readiness of a regular (non crab pot) machine.
pub fn is_machine_ready(progress: &MachineProgress) -> bool {
    progress.minutes_until_ready <= 0 && !progress.ready_for_harvest
}

/// Readiness of a crab pot.
pub fn is_crab_pot_ready(pot: &CrabPot) -> bool {
    pot.bait.is_none() && pot.held_item.is_none()
}

/// Apply the rule for `kind` to whatever readiness components are present.
pub fn is_ready(
    kind: MachineKind,
    progress: Option<&MachineProgress>,
    pot: Option<&CrabPot>,
) -> bool {
    if kind.is_crab_pot() {
        pot.is_some_and(is_crab_pot_ready)
    } else {
        progress.is_some_and(is_machine_ready)
    }
}

/// Tracked machines that are ready right now, in registry order.
///
/// Entries whose entity no longer exists are skipped.
pub fn ready_machines(world: &mut World) -> Vec<TrackedMachine> {
    let Some(registry) = world.get_resource::<MachineRegistry>() else {
        return Vec::new();
    };
    let tracked = registry.machines().to_vec();

    let mut query = world.query::<(Option<&MachineProgress>, Option<&CrabPot>)>();
    tracked
        .into_iter()
        .filter(|machine| {
            query
                .get(world, machine.entity)
                .is_ok_and(|(progress, pot)| is_ready(machine.kind, progress, pot))
        })
        .collect()
}
