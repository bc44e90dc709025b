//! ECS resources made available to observers and systems.
//!
//! Overview
//! - `bubbleclock` – shared animation frame of the bubble sprite
//! - `bubbleconfig` – user preferences persisted to INI
//! - `bubblesheet` – layout of the emote sprite sheet
//! - `camera2d` – shared 2D camera used for world/screen transforms
//! - `debugmode` – presence toggles the debug overlay
//! - `hostbridge` – channel carrying host notifications into the world
//! - `input` – per-frame keyboard state of keys used by the demo host
//! - `machinecatalog` – identifier to machine kind lookup
//! - `registry` – machines tracked in the active scene
//! - `session` – save loaded flag and active scene name
//! - `settingsmenu` – settings page model
//! - `texturestore` – loaded textures keyed by string IDs
//! - `worldtime` – simulation time and delta
pub mod bubbleclock;
pub mod bubbleconfig;
pub mod bubblesheet;
pub mod camera2d;
pub mod debugmode;
pub mod hostbridge;
pub mod input;
pub mod machinecatalog;
pub mod registry;
pub mod session;
pub mod settingsmenu;
pub mod texturestore;
pub mod worldtime;
