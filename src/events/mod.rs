//! Event types and observers used by the overlay.
//!
//! Host notifications arrive as [`host::HostEvent`] messages over the
//! channel bridge and are re-emitted as the ECS events below. Observers react
//! to them by rebuilding or patching the machine registry.
//!
//! Submodules:
//! - [`host`] – messages the host posts through the bridge
//! - [`objectlist`] – incremental registry updates for placed/removed objects
//! - [`scene`] – scene transitions and full registry rebuilds
//! - [`session`] – save loaded / returned to title
pub mod host;
pub mod objectlist;
pub mod scene;
pub mod session;
