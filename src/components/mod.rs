//! ECS components for scene objects.
//!
//! The host spawns one entity per object placed in a scene. The overlay only
//! reads these components; it never inserts or mutates them.
//!
//! Submodules overview:
//! - [`location`] – name of the scene an object is placed in
//! - [`machine`] – production state of machines and crab pots
//! - [`placedobject`] – qualified item identifier of a placed object
//! - [`tileposition`] – tile coordinates of an object

pub mod location;
pub mod machine;
pub mod placedobject;
pub mod tileposition;
