//! Demo host.
//!
//! A tiny stand-in for the farming game: it places objects into a couple of
//! scenes, runs a toy machine simulation, reacts to the player's keys and
//! posts the same lifecycle notifications a real host would send to the
//! overlay. None of this is part of the overlay itself; it only exists so the
//! bubbles have something to watch.

use bevy_ecs::prelude::*;
use crossbeam_channel::Sender;
use log::{debug, info, warn};
use raylib::prelude::*;
use rustc_hash::FxHashSet;
use serde::Deserialize;
use smallvec::smallvec;
use std::path::Path;

use crate::components::location::Location;
use crate::components::machine::{CrabPot, MachineProgress};
use crate::components::placedobject::PlacedObject;
use crate::components::tileposition::{TILE_SIZE, TilePosition};
use crate::events::host::HostEvent;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::input::InputState;
use crate::resources::machinecatalog::{MachineCatalog, MachineKind};

/// Real milliseconds per simulated game minute.
pub const MS_PER_GAME_MINUTE: u32 = 100;
/// Game minutes between two `DayStarted` notifications.
pub const DAY_LENGTH_MINUTES: u32 = 1200;
/// Camera pan speed in pixels per millisecond.
const PAN_SPEED: f32 = 0.4;

const BAIT_ID: &str = "(O)685";
const CATCH_ID: &str = "(O)715";

/// Objects the player can drop with the place key.
const PLACEABLE: [&str; 8] = [
    "(BC)15", "(BC)12", "(BC)163", "(BC)13", "(BC)21", "(BC)25", "(BC)130", "(O)388",
];

/// One object of a scene layout.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PlacedSpec {
    pub id: String,
    pub x: f32,
    pub y: f32,
}

/// A named scene and the objects placed in it.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SceneLayout {
    pub name: String,
    #[serde(default)]
    pub objects: Vec<PlacedSpec>,
}

/// Parse scene layouts from JSON text.
pub fn parse_scene_layouts(json: &str) -> Result<Vec<SceneLayout>, String> {
    let layouts: Vec<SceneLayout> =
        serde_json::from_str(json).map_err(|e| format!("Invalid scene layout: {}", e))?;
    if layouts.is_empty() {
        return Err("Scene layout file defines no scenes".to_string());
    }
    Ok(layouts)
}

/// Load scene layouts from a JSON file.
pub fn load_scene_layouts(path: &Path) -> Result<Vec<SceneLayout>, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    parse_scene_layouts(&text)
}

fn spec(id: &str, x: f32, y: f32) -> PlacedSpec {
    PlacedSpec {
        id: id.to_string(),
        x,
        y,
    }
}

/// Built-in layouts used when no layout file is given.
pub fn default_scene_layouts() -> Vec<SceneLayout> {
    let mut farm = Vec::new();
    for (i, id) in ["(BC)15", "(BC)15", "(BC)12", "(BC)12", "(BC)16", "(BC)17"]
        .iter()
        .enumerate()
    {
        farm.push(spec(id, 2.0 + i as f32 * 2.0, 2.0));
    }
    for (i, id) in ["(BC)13", "(BC)HeavyFurnace", "(BC)21", "(BC)20", "(BC)90"]
        .iter()
        .enumerate()
    {
        farm.push(spec(id, 2.0 + i as f32 * 2.0, 4.0));
    }
    farm.push(spec("(BC)130", 14.0, 2.0));
    farm.push(spec("(O)388", 14.0, 4.0));
    for x in 3..7 {
        farm.push(spec("(O)710", x as f32 * 1.5, 8.0));
    }

    let mut shed = Vec::new();
    for (i, id) in [
        "(BC)163",
        "(BC)163",
        "(BC)24",
        "(BC)19",
        "(BC)Dehydrator",
        "(BC)FishSmoker",
        "(BC)BaitMaker",
        "(BC)114",
        "(BC)25",
        "(BC)158",
        "(BC)265",
    ]
    .iter()
    .enumerate()
    {
        shed.push(spec(id, 2.0 + (i % 6) as f32 * 2.0, 2.0 + (i / 6) as f32 * 3.0));
    }

    vec![
        SceneLayout {
            name: "Farm".to_string(),
            objects: farm,
        },
        SceneLayout {
            name: "Shed".to_string(),
            objects: shed,
        },
    ]
}

/// Spawn one placed object with the state components its kind needs.
pub fn spawn_object(
    world: &mut World,
    catalog: &MachineCatalog,
    scene: &str,
    id: &str,
    x: f32,
    y: f32,
) -> Entity {
    let mut entity = world.spawn((
        PlacedObject::new(id),
        Location::new(scene),
        TilePosition::new(x, y),
    ));
    match catalog.kind_of(id) {
        Some(MachineKind::CrabPot) => {
            entity.insert(CrabPot::empty());
        }
        Some(_) => {
            entity.insert(MachineProgress::idle());
        }
        None => {}
    }
    entity.id()
}

/// Spawn every object of a layout.
pub fn spawn_scene(world: &mut World, layout: &SceneLayout) -> Vec<Entity> {
    let catalog = MachineCatalog::new();
    layout
        .objects
        .iter()
        .map(|o| spawn_object(world, &catalog, &layout.name, &o.id, o.x, o.y))
        .collect()
}

/// Demo host state.
pub struct DemoFarm {
    pub scenes: Vec<String>,
    pub current: usize,
    minute_acc_ms: u32,
    day_minutes: u32,
    elapsed_ms: u64,
    rng: fastrand::Rng,
    sender: Sender<HostEvent>,
    catalog: MachineCatalog,
}

impl DemoFarm {
    /// Spawn all layouts into `world`.
    pub fn new(world: &mut World, layouts: &[SceneLayout], sender: Sender<HostEvent>) -> Self {
        let mut scenes = Vec::new();
        for layout in layouts {
            let spawned = spawn_scene(world, layout);
            info!("Scene {} placed with {} objects", layout.name, spawned.len());
            scenes.push(layout.name.clone());
        }
        Self {
            scenes,
            current: 0,
            minute_acc_ms: 0,
            day_minutes: 0,
            elapsed_ms: 0,
            rng: fastrand::Rng::new(),
            sender,
            catalog: MachineCatalog::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = fastrand::Rng::with_seed(seed);
        self
    }

    pub fn current_scene(&self) -> &str {
        self.scenes.get(self.current).map_or("", |s| s.as_str())
    }

    fn send(&self, event: HostEvent) {
        if self.sender.send(event).is_err() {
            warn!("Overlay is gone, host event dropped");
        }
    }

    /// Load the "save": enter the first scene.
    pub fn start(&mut self) {
        self.send(HostEvent::SaveLoaded);
        self.send(HostEvent::Warped {
            scene: self.current_scene().to_string(),
        });
    }

    /// Move the player to the next scene.
    pub fn warp(&mut self) {
        if self.scenes.is_empty() {
            return;
        }
        self.current = (self.current + 1) % self.scenes.len();
        debug!("Warping to {}", self.current_scene());
        self.send(HostEvent::Warped {
            scene: self.current_scene().to_string(),
        });
    }

    /// Advance the toy simulation by `dt_ms` real milliseconds.
    pub fn simulate(&mut self, world: &mut World, dt_ms: u32) {
        self.elapsed_ms += dt_ms as u64;
        self.minute_acc_ms += dt_ms;
        let minutes = self.minute_acc_ms / MS_PER_GAME_MINUTE;
        self.minute_acc_ms %= MS_PER_GAME_MINUTE;

        let t = self.elapsed_ms as f32 / 1000.0;
        let mut pots = world.query::<(&TilePosition, &mut CrabPot)>();
        for (tile, mut pot) in pots.iter_mut(world) {
            pot.y_bob = (t * 2.0 + tile.x).sin() * 3.0;
        }

        if minutes == 0 {
            return;
        }
        let minutes_i = minutes as i32;

        let mut machines = world.query::<&mut MachineProgress>();
        for mut progress in machines.iter_mut(world) {
            if progress.minutes_until_ready > 0 {
                progress.minutes_until_ready -= minutes_i;
                if progress.minutes_until_ready <= 0 {
                    progress.minutes_until_ready = 0;
                    progress.ready_for_harvest = true;
                }
            }
        }

        let mut pots = world.query::<&mut CrabPot>();
        for mut pot in pots.iter_mut(world) {
            if pot.bait.is_some() && pot.held_item.is_none() {
                let caught = (0..minutes).any(|_| self.rng.u32(0..120) == 0);
                if caught {
                    pot.bait = None;
                    pot.held_item = Some(CATCH_ID.to_string());
                }
            }
        }

        self.day_minutes += minutes;
        if self.day_minutes >= DAY_LENGTH_MINUTES {
            self.day_minutes %= DAY_LENGTH_MINUTES;
            info!("A new day starts");
            self.send(HostEvent::DayStarted);
        }
    }

    /// Take the output out of every harvestable machine and pot in the scene.
    pub fn collect(&mut self, world: &mut World) -> usize {
        let scene = self.current_scene().to_string();
        let mut collected = 0;
        let mut machines = world.query::<(&Location, &mut MachineProgress)>();
        for (location, mut progress) in machines.iter_mut(world) {
            if location.is(&scene) && progress.ready_for_harvest {
                progress.ready_for_harvest = false;
                progress.minutes_until_ready = 0;
                collected += 1;
            }
        }
        let mut pots = world.query::<(&Location, &mut CrabPot)>();
        for (location, mut pot) in pots.iter_mut(world) {
            if location.is(&scene) && pot.held_item.is_some() {
                pot.held_item = None;
                collected += 1;
            }
        }
        collected
    }

    /// Put new input into every idle machine in the scene.
    pub fn load(&mut self, world: &mut World) -> usize {
        let scene = self.current_scene().to_string();
        let mut loaded = 0;
        let mut machines = world.query::<(&Location, &mut MachineProgress)>();
        for (location, mut progress) in machines.iter_mut(world) {
            if location.is(&scene)
                && progress.minutes_until_ready <= 0
                && !progress.ready_for_harvest
            {
                progress.minutes_until_ready = self.rng.i32(30..=240);
                loaded += 1;
            }
        }
        loaded
    }

    /// Bait every empty crab pot in the scene.
    pub fn bait(&mut self, world: &mut World) -> usize {
        let scene = self.current_scene().to_string();
        let mut baited = 0;
        let mut pots = world.query::<(&Location, &mut CrabPot)>();
        for (location, mut pot) in pots.iter_mut(world) {
            if location.is(&scene) && pot.bait.is_none() && pot.held_item.is_none() {
                pot.bait = Some(BAIT_ID.to_string());
                baited += 1;
            }
        }
        baited
    }

    /// Drop a random object on a free tile of the scene.
    pub fn place_random(&mut self, world: &mut World) -> Option<Entity> {
        let scene = self.current_scene().to_string();
        let occupied: FxHashSet<(i32, i32)> = {
            let mut q = world.query::<(&Location, &TilePosition)>();
            q.iter(world)
                .filter(|(location, _)| location.is(&scene))
                .map(|(_, tile)| (tile.x as i32, tile.y as i32))
                .collect()
        };
        for _ in 0..32 {
            let (x, y) = (self.rng.i32(1..20), self.rng.i32(1..11));
            if occupied.contains(&(x, y)) {
                continue;
            }
            let id = PLACEABLE[self.rng.usize(..PLACEABLE.len())];
            let entity = spawn_object(world, &self.catalog, &scene, id, x as f32, y as f32);
            self.send(HostEvent::ObjectListChanged {
                scene,
                added: smallvec![entity],
                removed: smallvec![],
            });
            return Some(entity);
        }
        None
    }

    /// Remove a random object from the scene.
    pub fn pick_up_random(&mut self, world: &mut World) -> Option<Entity> {
        let scene = self.current_scene().to_string();
        let candidates: Vec<Entity> = {
            let mut q = world.query_filtered::<(Entity, &Location), With<PlacedObject>>();
            q.iter(world)
                .filter(|(_, location)| location.is(&scene))
                .map(|(entity, _)| entity)
                .collect()
        };
        if candidates.is_empty() {
            return None;
        }
        let entity = candidates[self.rng.usize(..candidates.len())];
        world.despawn(entity);
        self.send(HostEvent::ObjectListChanged {
            scene,
            added: smallvec![],
            removed: smallvec![entity],
        });
        Some(entity)
    }

    /// React to the host keys of this frame.
    pub fn handle_input(&mut self, world: &mut World, input: &InputState) {
        if input.warp.just_pressed {
            self.warp();
        }
        if input.collect.just_pressed {
            let n = self.collect(world);
            debug!("Collected {} items", n);
        }
        if input.load.just_pressed {
            let n = self.load(world);
            debug!("Loaded {} machines", n);
        }
        if input.bait.just_pressed {
            let n = self.bait(world);
            debug!("Baited {} crab pots", n);
        }
        if input.place.just_pressed {
            self.place_random(world);
        }
        if input.pick_up.just_pressed {
            self.pick_up_random(world);
        }
    }
}

/// Pan the shared camera with WASD.
pub fn pan_camera(world: &mut World, input: &InputState, dt_ms: u32) {
    let step = PAN_SPEED * dt_ms as f32;
    let mut camera = world.resource_mut::<Camera2DRes>();
    if input.pan_left.active {
        camera.0.target.x -= step;
    }
    if input.pan_right.active {
        camera.0.target.x += step;
    }
    if input.pan_up.active {
        camera.0.target.y -= step;
    }
    if input.pan_down.active {
        camera.0.target.y += step;
    }
}

fn kind_color(kind: Option<MachineKind>) -> Color {
    const PALETTE: [Color; 6] = [
        Color::BROWN,
        Color::MAROON,
        Color::DARKPURPLE,
        Color::DARKBLUE,
        Color::GRAY,
        Color::ORANGE,
    ];
    match kind {
        Some(kind) => PALETTE[kind as usize % PALETTE.len()],
        None => Color::BEIGE,
    }
}

/// Draw the objects of the active scene.
pub fn render_scene(world: &mut World, scene: &str, d: &mut impl RaylibDraw, camera: &Camera2DRes) {
    let catalog = MachineCatalog::new();
    let mut q = world.query::<(
        &PlacedObject,
        &Location,
        &TilePosition,
        Option<&MachineProgress>,
        Option<&CrabPot>,
    )>();
    let size = (TILE_SIZE * camera.0.zoom) as i32;
    for (object, location, tile, progress, pot) in q.iter(world) {
        if !location.is(scene) {
            continue;
        }
        let screen = camera.world_to_screen(tile.to_pixels());
        let (x, y) = (screen.x as i32, screen.y as i32);
        let kind = catalog.kind_of(&object.qualified_id);
        if let Some(pot) = pot {
            d.draw_circle(
                x + size / 2,
                y + size / 2 + pot.y_bob as i32,
                size as f32 / 3.0,
                Color::SKYBLUE,
            );
            if pot.bait.is_some() {
                d.draw_text("bait", x + 8, y + size / 2, 10, Color::BLACK);
            }
            if pot.held_item.is_some() {
                d.draw_text("!", x + size / 2, y, 20, Color::YELLOW);
            }
            continue;
        }
        d.draw_rectangle(x + 4, y + 4, size - 8, size - 8, kind_color(kind));
        if let Some(progress) = progress {
            if progress.ready_for_harvest {
                d.draw_text("!", x + size / 2 - 2, y + 4, 20, Color::YELLOW);
            } else if progress.minutes_until_ready > 0 {
                let text = format!("{}m", progress.minutes_until_ready);
                d.draw_text(&text, x + 8, y + size / 2, 10, Color::WHITE);
            }
        }
    }
}

/// Emote sheet with the four bubble frames drawn procedurally.
///
/// Layout matches the default [`BubbleSheet`](crate::resources::bubblesheet::BubbleSheet):
/// 64px wide, 16px cells, bubble frames in cells 16..=19.
pub fn generate_emote_image() -> Image {
    let mut image = Image::gen_image_color(64, 80, Color::BLANK);
    for frame in 0..4 {
        let cx = frame * 16 + 8;
        let cy = 64 + 7;
        image.draw_circle(cx, cy, 6, Color::WHITE);
        image.draw_rectangle(cx - 4, cy + 5, 3, 3, Color::WHITE);
        let dots = [1, 2, 3, 2][frame as usize];
        for dot in 0..dots {
            image.draw_rectangle(cx - 4 + dot * 3, cy, 2, 2, Color::DARKGRAY);
        }
    }
    image
}
