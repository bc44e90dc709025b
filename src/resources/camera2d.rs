//! Shared 2D camera resource.
//!
//! Wraps raylib's [`raylib::prelude::Camera2D`] so that the host and the
//! overlay agree on a single world/screen transform.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera2D, Vector2};

/// ECS resource that holds the active 2D camera parameters.
#[derive(Resource, Clone, Copy)]
pub struct Camera2DRes(pub Camera2D);

impl Default for Camera2DRes {
    fn default() -> Self {
        Self(Camera2D {
            offset: Vector2 { x: 0.0, y: 0.0 },
            target: Vector2 { x: 0.0, y: 0.0 },
            rotation: 0.0,
            zoom: 1.0,
        })
    }
}

impl Camera2DRes {
    /// Convert a world pixel position to screen space (rotation is ignored).
    pub fn world_to_screen(&self, world: Vector2) -> Vector2 {
        let cam = &self.0;
        Vector2 {
            x: (world.x - cam.target.x) * cam.zoom + cam.offset.x,
            y: (world.y - cam.target.y) * cam.zoom + cam.offset.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_camera_is_identity() {
        let cam = Camera2DRes::default();
        let p = cam.world_to_screen(Vector2 { x: 128.0, y: 64.0 });
        assert_eq!(p.x, 128.0);
        assert_eq!(p.y, 64.0);
    }

    #[test]
    fn test_target_pans_view() {
        let mut cam = Camera2DRes::default();
        cam.0.target = Vector2 { x: 100.0, y: 50.0 };
        let p = cam.world_to_screen(Vector2 { x: 128.0, y: 64.0 });
        assert_eq!(p.x, 28.0);
        assert_eq!(p.y, 14.0);
    }

    #[test]
    fn test_zoom_and_offset() {
        let mut cam = Camera2DRes::default();
        cam.0.zoom = 2.0;
        cam.0.offset = Vector2 { x: 10.0, y: 20.0 };
        let p = cam.world_to_screen(Vector2 { x: 5.0, y: 5.0 });
        assert_eq!(p.x, 20.0);
        assert_eq!(p.y, 30.0);
    }
}
