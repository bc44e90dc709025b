//! Machine bubbles library.
//!
//! Exposes the overlay's ECS components, resources, systems and events for
//! integration tests and for hosts that embed the overlay.

pub mod components;
pub mod events;
pub mod game;
pub mod overlay;
pub mod resources;
pub mod settings;
pub mod systems;
