use bevy_ecs::prelude::Component;

/// Name of the scene (map/area) an object lives in.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub scene: String,
}

impl Location {
    pub fn new(scene: impl Into<String>) -> Self {
        Self {
            scene: scene.into(),
        }
    }

    pub fn is(&self, scene: &str) -> bool {
        self.scene == scene
    }
}
