use bevy_ecs::prelude::Resource;

/// Update-tick timing in milliseconds.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct WorldTime {
    pub elapsed_ms: u64,
    pub delta_ms: u32,
    pub frame_count: u64,
}
