//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per update tick.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Record the elapsed milliseconds of this tick on `WorldTime`.
pub fn update_world_time(world: &mut World, delta_ms: u32) {
    let mut wt = world.resource_mut::<WorldTime>();
    wt.elapsed_ms = wt.elapsed_ms.saturating_add(delta_ms as u64);
    wt.delta_ms = delta_ms;
    wt.frame_count += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_elapsed_and_counts_frames() {
        let mut world = World::new();
        world.init_resource::<WorldTime>();
        update_world_time(&mut world, 16);
        update_world_time(&mut world, 17);
        let wt = world.resource::<WorldTime>();
        assert_eq!(wt.elapsed_ms, 33);
        assert_eq!(wt.delta_ms, 17);
        assert_eq!(wt.frame_count, 2);
    }
}
