//! Shared bubble animation clock.
//!
//! All bubbles play the same short loop in lockstep, so a single
//! [`BubbleClock`] resource drives them. It is advanced once per update tick
//! by [`animate_bubbles`](crate::systems::bubbleclock::animate_bubbles) and
//! read by the renderer to pick the sprite cell.

use bevy_ecs::prelude::Resource;

/// Number of frames in the bubble loop.
pub const BUBBLE_FRAME_COUNT: usize = 4;

/// Cyclic frame index plus the time accumulated towards the next frame.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BubbleClock {
    pub frame: usize,
    pub elapsed_ms: u64,
}

impl BubbleClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `elapsed_ms` and step the loop once per full `interval_ms`.
    ///
    /// The remainder carries over to the next tick, so a run of ticks totalling
    /// `T` moves the loop by `T / interval_ms` frames. A step is due as soon as
    /// the accumulator reaches the interval (`>=`), not only once it exceeds
    /// it. An interval of zero
    /// steps one frame on every tick with non-zero elapsed time. A frame index
    /// outside the loop (stale state after a reload) restarts at frame 0.
    pub fn advance(&mut self, elapsed_ms: u64, interval_ms: u64) {
        if self.frame >= BUBBLE_FRAME_COUNT {
            self.frame = 0;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);

        if interval_ms == 0 {
            if self.elapsed_ms > 0 {
                self.step(1);
                self.elapsed_ms = 0;
            }
            return;
        }

        let steps = self.elapsed_ms / interval_ms;
        if steps > 0 {
            self.step(steps);
            self.elapsed_ms %= interval_ms;
        }
    }

    fn step(&mut self, steps: u64) {
        let offset = (steps % BUBBLE_FRAME_COUNT as u64) as usize;
        self.frame = (self.frame + offset) % BUBBLE_FRAME_COUNT;
    }
}
