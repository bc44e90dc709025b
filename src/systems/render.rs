//! Bubble overlay rendering.
//!
//! Once per frame [`render_bubbles`] asks the readiness filter which tracked
//! machines are ready, lays out one bubble per machine and hands the draws to
//! a [`BubbleSurface`]. The surface abstracts the host renderer: it converts
//! world pixels to screen space and draws a cell of the emote sheet.
//! [`RaylibBubbleSurface`] is the raylib implementation used by the binary.
//!
//! Layout of a bubble
//! 1. anchor = tile position * 64, converted to screen space
//! 2. shift right by `(100 - size%) / 100 * 32` so smaller bubbles stay
//!    centred, and up by the configured `offset_y`
//! 3. crab pots add their direction offset and their bob plus 20px
//! 4. scale is `4 * size%`, alpha is `opacity%`, depth is
//!    `(tile_px_y + 37) / 10000` so lower objects draw in front

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::machine::CrabPot;
use crate::components::tileposition::TilePosition;
use crate::resources::bubbleclock::BubbleClock;
use crate::resources::bubbleconfig::BubbleConfig;
use crate::resources::bubblesheet::BubbleSheet;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::registry::MachineRegistry;
use crate::resources::session::Session;
use crate::systems::readiness::ready_machines;

/// Scale of a bubble at 100% size.
pub const BUBBLE_BASE_SCALE: f32 = 4.0;
const SIZE_SHIFT_PX: f32 = 32.0;
const CRAB_POT_LIFT_PX: f32 = 20.0;
const DEPTH_BIAS_PX: f32 = 37.0;
const DEPTH_DIVISOR: f32 = 10000.0;

/// A single sprite draw for one bubble.
#[derive(Debug, Clone, Copy)]
pub struct BubbleDraw {
    pub entity: Entity,
    /// Cell of the emote sheet.
    pub source: Rectangle,
    /// Screen position of the sprite's top-left corner.
    pub position: Vector2,
    pub tint: Color,
    pub rotation: f32,
    pub scale: f32,
    /// Layer value; larger draws later (in front).
    pub depth: f32,
}

/// Host renderer seen by the overlay.
pub trait BubbleSurface {
    /// Convert a world pixel position to screen space.
    fn world_to_screen(&self, world: Vector2) -> Vector2;
    /// Whether the emote sheet texture can be drawn this frame.
    fn sheet_available(&self) -> bool;
    fn draw_sprite(&mut self, draw: &BubbleDraw);
}

/// White tint with alpha taken from `opacity_percent`, truncated.
pub fn bubble_tint(opacity_percent: u32) -> Color {
    let alpha = (255.0 * opacity_percent.min(100) as f32 / 100.0) as u8;
    Color::new(255, 255, 255, alpha)
}

pub fn bubble_scale(size_percent: u32) -> f32 {
    BUBBLE_BASE_SCALE * size_percent as f32 / 100.0
}

/// Layer value for an object whose tile top sits at `tile_px_y`.
pub fn bubble_depth(tile_px_y: f32) -> f32 {
    (tile_px_y + DEPTH_BIAS_PX) / DEPTH_DIVISOR
}

/// Screen position of a bubble given the screen anchor of its tile.
pub fn bubble_position(anchor: Vector2, config: &BubbleConfig, pot: Option<&CrabPot>) -> Vector2 {
    let mut pos = Vector2 {
        x: anchor.x + (100.0 - config.size_percent() as f32) / 100.0 * SIZE_SHIFT_PX,
        y: anchor.y - config.offset_y() as f32,
    };
    if let Some(pot) = pot {
        pos.x += pot.direction_offset.x;
        pos.y += pot.direction_offset.y;
        pos.y += pot.y_bob + CRAB_POT_LIFT_PX;
    }
    pos
}

/// Lay out the bubbles of every ready machine, sorted back to front.
pub fn plan_bubbles(world: &mut World, surface: &impl BubbleSurface) -> Vec<BubbleDraw> {
    let ready = ready_machines(world);
    if ready.is_empty() {
        return Vec::new();
    }

    let config = world.resource::<BubbleConfig>().clone();
    let frame = world.get_resource::<BubbleClock>().map_or(0, |c| c.frame);
    let source = world
        .get_resource::<BubbleSheet>()
        .cloned()
        .unwrap_or_default()
        .frame_rect(frame);
    let tint = bubble_tint(config.opacity_percent());
    let scale = bubble_scale(config.size_percent());

    let mut query = world.query::<(&TilePosition, Option<&CrabPot>)>();
    let mut draws: Vec<BubbleDraw> = ready
        .iter()
        .filter_map(|machine| {
            let (tile, pot) = query.get(world, machine.entity).ok()?;
            let world_px = tile.to_pixels();
            let anchor = surface.world_to_screen(world_px);
            let pot = if machine.kind.is_crab_pot() { pot } else { None };
            Some(BubbleDraw {
                entity: machine.entity,
                source,
                position: bubble_position(anchor, &config, pot),
                tint,
                rotation: 0.0,
                scale,
                depth: bubble_depth(world_px.y),
            })
        })
        .collect();

    draws.sort_by(|a, b| a.depth.total_cmp(&b.depth));
    draws
}

/// Draw this frame's bubbles. Returns the number of sprites issued.
///
/// Nothing is drawn while the overlay is disabled, before a save is loaded,
/// or when the surface has no emote sheet this frame.
pub fn render_bubbles(world: &mut World, surface: &mut impl BubbleSurface) -> usize {
    let enabled = world
        .get_resource::<BubbleConfig>()
        .is_some_and(|c| c.enabled);
    let loaded = world.get_resource::<Session>().is_some_and(|s| s.loaded);
    if !enabled || !loaded || !surface.sheet_available() {
        return 0;
    }

    let draws = plan_bubbles(world, &*surface);
    for draw in draws.iter() {
        surface.draw_sprite(draw);
    }
    draws.len()
}

/// [`BubbleSurface`] drawing through any raylib draw handle.
pub struct RaylibBubbleSurface<'a, D: RaylibDraw> {
    pub d: &'a mut D,
    pub camera: Camera2DRes,
    pub texture: Option<&'a Texture2D>,
}

impl<'a, D: RaylibDraw> RaylibBubbleSurface<'a, D> {
    pub fn new(d: &'a mut D, camera: Camera2DRes, texture: Option<&'a Texture2D>) -> Self {
        Self { d, camera, texture }
    }
}

impl<D: RaylibDraw> BubbleSurface for RaylibBubbleSurface<'_, D> {
    fn world_to_screen(&self, world: Vector2) -> Vector2 {
        self.camera.world_to_screen(world)
    }

    fn sheet_available(&self) -> bool {
        self.texture.is_some()
    }

    fn draw_sprite(&mut self, draw: &BubbleDraw) {
        let Some(tex) = self.texture else {
            return;
        };
        // raylib has no depth buffer for 2D sprites; callers pass draws
        // already sorted by depth.
        let dest = Rectangle {
            x: draw.position.x,
            y: draw.position.y,
            width: draw.source.width * draw.scale,
            height: draw.source.height * draw.scale,
        };
        self.d.draw_texture_pro(
            tex,
            draw.source,
            dest,
            Vector2 { x: 0.0, y: 0.0 },
            draw.rotation,
            draw.tint,
        );
    }
}

/// Debug overlay: outline tracked machines and print registry/clock state.
pub fn render_debug_overlay(world: &World, d: &mut impl RaylibDraw, camera: &Camera2DRes) {
    let Some(registry) = world.get_resource::<MachineRegistry>() else {
        return;
    };
    for machine in registry.machines() {
        let Some(tile) = world.get::<TilePosition>(machine.entity) else {
            continue;
        };
        let screen = camera.world_to_screen(tile.to_pixels());
        let size = (64.0 * camera.0.zoom) as i32;
        d.draw_rectangle_lines(screen.x as i32, screen.y as i32, size, size, Color::RED);
        d.draw_text(
            machine.kind.label(),
            screen.x as i32 + 2,
            screen.y as i32 + size - 10,
            10,
            Color::RED,
        );
    }

    let frame = world.get_resource::<BubbleClock>().map_or(0, |c| c.frame);
    let text = format!(
        "DEBUG MODE (F11) | tracked: {} | bubble frame: {}",
        registry.len(),
        frame
    );
    d.draw_text(&text, 10, 10, 10, Color::BLACK);
}
