//! Tile position component.
//!
//! Objects are placed on the game's discrete tile grid. Rendering converts
//! tile coordinates to world pixels with [`TilePosition::to_pixels`] before
//! applying the camera transform.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Size of a tile edge in world pixels.
pub const TILE_SIZE: f32 = 64.0;

/// Position of an object on the tile grid.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct TilePosition {
    pub x: f32,
    pub y: f32,
}

impl TilePosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// World-space pixel position of the tile's top-left corner.
    pub fn to_pixels(&self) -> Vector2 {
        Vector2 {
            x: self.x * TILE_SIZE,
            y: self.y * TILE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pixels_scales_by_tile_size() {
        let p = TilePosition::new(3.0, 5.0).to_pixels();
        assert_eq!(p.x, 192.0);
        assert_eq!(p.y, 320.0);
    }

    #[test]
    fn test_origin_stays_at_origin() {
        let p = TilePosition::new(0.0, 0.0).to_pixels();
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 0.0);
    }
}
