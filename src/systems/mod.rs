//! Overlay systems.
//!
//! Submodules overview
//! - [`bubbleclock`] – advance the bubble animation frame
//! - [`hostevents`] – drain the host bridge and trigger ECS events
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`readiness`] – decide which tracked machines are waiting for input
//! - [`render`] – lay out and draw bubbles, debug overlay
//! - [`settingsmenu`] – settings page keys and drawing
//! - [`time`] – update simulation time and delta

pub mod bubbleclock;
pub mod hostevents;
pub mod input;
pub mod readiness;
pub mod render;
pub mod settingsmenu;
pub mod time;
