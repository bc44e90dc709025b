//! Machine bubbles demo host.
//!
//! Opens a raylib window with a tiny farm, lets the player load, run and empty
//! machines, and draws the bubble overlay above every machine waiting for
//! input. Built on:
//! - **raylib** for windowing and drawing
//! - **bevy_ecs** for the overlay world, observers and the update schedule
//! - **configparser** for the persisted `bubbles.ini` preferences
//!
//! # Project Structure
//!
//! - [`components`] – scene object components (placement, machine state)
//! - [`events`] – host notifications and the observers that maintain the registry
//! - [`game`] – demo farm: layouts, toy simulation, host keys
//! - [`overlay`] – the overlay context driven by the host
//! - [`resources`] – catalog, config, registry, clock, camera, input
//! - [`settings`] – settings page registration
//! - [`systems`] – readiness, clock advance, rendering, input polling
//!
//! # Main Loop
//!
//! 1. Load preferences, open the window, create the emote sheet
//! 2. Spawn the demo scenes and post `SaveLoaded` + `Warped`
//! 3. Each frame: poll input, handle the settings page and farm keys,
//!    simulate, update the overlay, draw scene, bubbles and menus
//! 4. Save preferences on exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./bubbles.ini
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod overlay;
mod resources;
mod settings;
mod systems;

use crate::events::host::HostEvent;
use crate::game::{
    DemoFarm, default_scene_layouts, generate_emote_image, load_scene_layouts, pan_camera,
    render_scene,
};
use crate::overlay::BubbleOverlay;
use crate::resources::bubbleconfig::BubbleConfig;
use crate::resources::bubblesheet::{BubbleSheet, EMOTE_SHEET_KEY};
use crate::resources::camera2d::Camera2DRes;
use crate::resources::debugmode::DebugMode;
use crate::resources::input::InputState;
use crate::resources::settingsmenu::SettingsMenu;
use crate::resources::texturestore::TextureStore;
use crate::systems::input::update_input_state;
use crate::systems::render::{RaylibBubbleSurface, render_debug_overlay};
use crate::systems::settingsmenu::{MenuOutcome, handle_settings_input, render_settings_menu};
use clap::Parser;
use log::{error, info, warn};
use raylib::prelude::*;
use std::path::PathBuf;

/// Machine bubbles demo
#[derive(Parser)]
#[command(version, about = "Bubble overlay over idle crafting machines")]
struct Cli {
    /// Preferences file (created on first save).
    #[arg(long, value_name = "PATH", default_value = "./bubbles.ini")]
    config: PathBuf,

    /// JSON scene layout file. Built-in scenes are used when omitted.
    #[arg(long, value_name = "PATH")]
    scenes: Option<PathBuf>,

    /// Emote sheet image. A generated sheet is used when omitted.
    #[arg(long, value_name = "PATH")]
    emote_sheet: Option<PathBuf>,
}

const WINDOW_WIDTH: i32 = 1280;
const WINDOW_HEIGHT: i32 = 720;

fn load_emote_sheet(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: Option<&PathBuf>,
) -> Result<Texture2D, String> {
    match path {
        Some(path) => rl
            .load_texture(thread, &path.to_string_lossy())
            .map_err(|e| format!("Failed to load emote sheet {}: {}", path.display(), e)),
        None => {
            let image = generate_emote_image();
            rl.load_texture_from_image(thread, &image)
                .map_err(|e| format!("Failed to create emote sheet: {}", e))
        }
    }
}

fn save_config(config: &BubbleConfig) {
    if let Err(e) = config.save_to_file() {
        warn!("{}", e);
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = BubbleConfig::with_path(cli.config.clone());
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }

    let layouts = match cli.scenes.as_deref() {
        Some(path) => load_scene_layouts(path).unwrap_or_else(|e| {
            warn!("{}; using built-in scenes", e);
            default_scene_layouts()
        }),
        None => default_scene_layouts(),
    };

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .resizable()
        .title("Machine Bubbles")
        .build();
    rl.set_target_fps(60);
    // Esc closes the settings page, not the window
    rl.set_exit_key(None);

    let mut textures = TextureStore::new();
    let mut overlay = BubbleOverlay::new(config);
    match load_emote_sheet(&mut rl, &thread, cli.emote_sheet.as_ref()) {
        Ok(texture) => {
            overlay.world_mut().insert_resource(BubbleSheet {
                sheet_width: texture.width(),
                ..BubbleSheet::default()
            });
            textures.insert(EMOTE_SHEET_KEY, texture);
        }
        // Without a sheet the overlay simply draws nothing.
        Err(e) => error!("{}", e),
    }
    overlay.world_mut().insert_resource(Camera2DRes(Camera2D {
        offset: Vector2 { x: 0.0, y: 0.0 },
        target: Vector2 { x: -32.0, y: -96.0 },
        rotation: 0.0,
        zoom: 1.0,
    }));

    let sender = overlay.host_sender();
    let mut farm = DemoFarm::new(overlay.world_mut(), &layouts, sender.clone());
    farm.start();

    let mut input = InputState::default();
    let mut menu = SettingsMenu::new();

    // --------------- Main loop ---------------
    while !rl.window_should_close() {
        let dt_ms = (rl.get_frame_time() * 1000.0).round() as u32;
        update_input_state(&rl, &mut input);

        let outcome = {
            let mut config = overlay.config_mut();
            handle_settings_input(&mut menu, &mut config, &input)
        };
        if outcome != MenuOutcome::Unchanged && sender.send(HostEvent::MenuChanged).is_err() {
            warn!("Overlay channel closed");
        }

        if !menu.open {
            farm.handle_input(overlay.world_mut(), &input);
            if input.toggle_overlay.just_pressed {
                let enabled = !overlay.config().enabled;
                overlay.set_enabled(enabled);
                info!("Bubbles {}", if enabled { "on" } else { "off" });
                save_config(overlay.config());
            }
            if input.mode_debug.just_pressed {
                let world = overlay.world_mut();
                if world.contains_resource::<DebugMode>() {
                    world.remove_resource::<DebugMode>();
                } else {
                    world.insert_resource(DebugMode {});
                }
            }
            pan_camera(overlay.world_mut(), &input, dt_ms);
        }

        farm.simulate(overlay.world_mut(), dt_ms);
        overlay.update(dt_ms);

        let camera = *overlay.world().resource::<Camera2DRes>();
        let sheet_key = overlay.world().resource::<BubbleSheet>().tex_key.clone();
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::DARKGREEN);
        render_scene(overlay.world_mut(), farm.current_scene(), &mut d, &camera);
        {
            let mut surface = RaylibBubbleSurface::new(&mut d, camera, textures.get(&sheet_key));
            overlay.render(&mut surface);
        }
        if overlay.world().contains_resource::<DebugMode>() {
            render_debug_overlay(overlay.world(), &mut d, &camera);
        }
        render_settings_menu(&menu, overlay.config(), &mut d);
        let status = format!(
            "{} | Space collect  L load  B bait  P place  X pick up  Tab warp  F1 bubbles  F2 settings  F11 debug",
            farm.current_scene()
        );
        d.draw_text(&status, 10, WINDOW_HEIGHT - 20, 10, Color::WHITE);
    }

    save_config(overlay.config());
    info!("Bye");
}
