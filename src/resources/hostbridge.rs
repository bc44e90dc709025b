//! Channel bridge between the host game and the overlay world.
//!
//! The host keeps a cloned [`Sender<HostEvent>`] and posts lifecycle and world
//! notifications as they happen. At the start of every update the overlay
//! drains the receiver (see
//! [`pump_host_events`](crate::systems::hostevents::pump_host_events)) and
//! turns each message into an ECS event handled by the registry observers.

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::events::host::HostEvent;

#[derive(Resource)]
pub struct HostBridge {
    /// Sender handed out to the host.
    pub tx: Sender<HostEvent>,
    /// Receiver drained on the overlay thread.
    pub rx: Receiver<HostEvent>,
}

impl Default for HostBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl HostBridge {
    pub fn new() -> Self {
        let (tx, rx) = unbounded::<HostEvent>();
        Self { tx, rx }
    }

    pub fn sender(&self) -> Sender<HostEvent> {
        self.tx.clone()
    }
}
