//! Debug toggle resource.
//!
//! While present, the host draws a marker over every tracked machine and a
//! status line with registry and clock state. Remove it to hide them.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, debug overlays are drawn.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
