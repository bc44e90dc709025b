//! Live machine state components.
//!
//! These are owned and mutated by the host simulation; the overlay only reads
//! them. A machine entity carries [`MachineProgress`] (most kinds) or
//! [`CrabPot`] (traps). Either one may be missing, in which case the machine
//! is never considered ready.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Production progress of a crafting machine.
///
/// `minutes_until_ready` can go negative for kinds whose held output was
/// removed early (casks do this).
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct MachineProgress {
    pub minutes_until_ready: i32,
    /// Output is sitting in the machine waiting to be harvested.
    pub ready_for_harvest: bool,
}

impl MachineProgress {
    pub fn new(minutes_until_ready: i32, ready_for_harvest: bool) -> Self {
        Self {
            minutes_until_ready,
            ready_for_harvest,
        }
    }

    /// Machine with nothing inside and nothing to collect.
    pub fn idle() -> Self {
        Self::new(0, false)
    }
}

/// Trap state plus the render offsets the host animates on crab pots.
#[derive(Component, Clone, Debug)]
pub struct CrabPot {
    /// Qualified id of the bait placed in the pot.
    pub bait: Option<String>,
    /// Qualified id of the caught item.
    pub held_item: Option<String>,
    /// Offset applied when the player nudges the pot.
    pub direction_offset: Vector2,
    /// Current vertical bobbing displacement on water.
    pub y_bob: f32,
}

impl Default for CrabPot {
    fn default() -> Self {
        Self {
            bait: None,
            held_item: None,
            direction_offset: Vector2 { x: 0.0, y: 0.0 },
            y_bob: 0.0,
        }
    }
}

impl CrabPot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_bait(mut self, bait: impl Into<String>) -> Self {
        self.bait = Some(bait.into());
        self
    }

    pub fn with_catch(mut self, item: impl Into<String>) -> Self {
        self.held_item = Some(item.into());
        self
    }

    pub fn with_bob(mut self, y_bob: f32) -> Self {
        self.y_bob = y_bob;
        self
    }

    pub fn with_direction_offset(mut self, offset: Vector2) -> Self {
        self.direction_offset = offset;
        self
    }
}
