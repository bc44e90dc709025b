//! Bubble animation system.

use bevy_ecs::prelude::*;

use crate::resources::bubbleclock::BubbleClock;
use crate::resources::bubbleconfig::BubbleConfig;
use crate::resources::worldtime::WorldTime;

/// Run condition: the overlay master switch is on.
pub fn overlay_enabled(config: Res<BubbleConfig>) -> bool {
    config.enabled
}

/// Advance the shared [`BubbleClock`] by this tick's delta.
///
/// Schedule it with [`overlay_enabled`]; while the overlay is off the clock
/// stays frozen where it was.
pub fn animate_bubbles(
    mut clock: ResMut<BubbleClock>,
    config: Res<BubbleConfig>,
    time: Res<WorldTime>,
) {
    clock.advance(time.delta_ms as u64, config.emote_interval() as u64);
}
