//! Bubble sprite-sheet description.
//!
//! The bubble frames live in a shared emote sheet laid out as a grid of
//! square cells. [`BubbleSheet`] records which texture holds it and how to
//! turn an animation frame into a source rectangle.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Rectangle;

/// Default texture key for the emote sheet.
pub const EMOTE_SHEET_KEY: &str = "emotes";

#[derive(Resource, Debug, Clone)]
pub struct BubbleSheet {
    /// Texture key in [`crate::resources::texturestore::TextureStore`].
    pub tex_key: String,
    /// Width of the whole sheet in pixels.
    pub sheet_width: i32,
    /// Edge of a square cell in pixels.
    pub cell_size: i32,
    /// Sheet cell index of the first bubble frame.
    pub first_frame: usize,
}

impl Default for BubbleSheet {
    fn default() -> Self {
        Self {
            tex_key: EMOTE_SHEET_KEY.to_string(),
            sheet_width: 64,
            cell_size: 16,
            first_frame: 16,
        }
    }
}

impl BubbleSheet {
    /// Source rectangle of the given bubble frame. Cells are numbered left to
    /// right, top to bottom.
    pub fn frame_rect(&self, frame: usize) -> Rectangle {
        let cell = (self.first_frame + frame) as i32;
        let width = self.sheet_width.max(1);
        let x = cell * self.cell_size % width;
        let y = cell * self.cell_size / width * self.cell_size;
        Rectangle {
            x: x as f32,
            y: y as f32,
            width: self.cell_size as f32,
            height: self.cell_size as f32,
        }
    }
}
