//! Placed world object identity.
//!
//! Every object the host places in a scene carries a [`PlacedObject`] with its
//! qualified item identifier (e.g. `"(BC)15"` for a preserves jar). The
//! machine registry matches this identifier against the machine catalog.

use bevy_ecs::prelude::Component;

/// Qualified identifier of an object placed in the world.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct PlacedObject {
    pub qualified_id: String,
}

impl PlacedObject {
    pub fn new(qualified_id: impl Into<String>) -> Self {
        Self {
            qualified_id: qualified_id.into(),
        }
    }
}
