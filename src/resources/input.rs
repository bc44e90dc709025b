//! Per-frame keyboard input resource for the demo host.
//!
//! Captures the keys the demo reacts to: camera panning, settings page
//! navigation and the host actions that drive the toy simulation.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding,
        }
    }

    pub fn set(&mut self, down: bool, pressed: bool, released: bool) {
        self.active = down;
        self.just_pressed = pressed;
        self.just_released = released;
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

/// Resource capturing the per-frame keyboard state of the demo.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    // WASD camera pan
    pub pan_up: BoolState,
    pub pan_left: BoolState,
    pub pan_down: BoolState,
    pub pan_right: BoolState,
    // Arrow keys, settings navigation
    pub menu_up: BoolState,
    pub menu_down: BoolState,
    pub menu_left: BoolState,
    pub menu_right: BoolState,
    pub menu_confirm: BoolState,
    pub menu_back: BoolState,
    pub menu_reset: BoolState,
    // Host actions
    pub toggle_overlay: BoolState,
    pub toggle_settings: BoolState,
    pub mode_debug: BoolState,
    pub warp: BoolState,
    pub collect: BoolState,
    pub load: BoolState,
    pub bait: BoolState,
    pub place: BoolState,
    pub pick_up: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            pan_up: BoolState::bound_to(KeyboardKey::KEY_W),
            pan_left: BoolState::bound_to(KeyboardKey::KEY_A),
            pan_down: BoolState::bound_to(KeyboardKey::KEY_S),
            pan_right: BoolState::bound_to(KeyboardKey::KEY_D),
            menu_up: BoolState::bound_to(KeyboardKey::KEY_UP),
            menu_down: BoolState::bound_to(KeyboardKey::KEY_DOWN),
            menu_left: BoolState::bound_to(KeyboardKey::KEY_LEFT),
            menu_right: BoolState::bound_to(KeyboardKey::KEY_RIGHT),
            menu_confirm: BoolState::bound_to(KeyboardKey::KEY_ENTER),
            menu_back: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
            menu_reset: BoolState::bound_to(KeyboardKey::KEY_R),
            toggle_overlay: BoolState::bound_to(KeyboardKey::KEY_F1),
            toggle_settings: BoolState::bound_to(KeyboardKey::KEY_F2),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
            warp: BoolState::bound_to(KeyboardKey::KEY_TAB),
            collect: BoolState::bound_to(KeyboardKey::KEY_SPACE),
            load: BoolState::bound_to(KeyboardKey::KEY_L),
            bait: BoolState::bound_to(KeyboardKey::KEY_B),
            place: BoolState::bound_to(KeyboardKey::KEY_P),
            pick_up: BoolState::bound_to(KeyboardKey::KEY_X),
        }
    }
}

impl InputState {
    /// Mutable access to every key state, for bulk polling.
    pub fn all_mut(&mut self) -> [&mut BoolState; 20] {
        [
            &mut self.pan_up,
            &mut self.pan_left,
            &mut self.pan_down,
            &mut self.pan_right,
            &mut self.menu_up,
            &mut self.menu_down,
            &mut self.menu_left,
            &mut self.menu_right,
            &mut self.menu_confirm,
            &mut self.menu_back,
            &mut self.menu_reset,
            &mut self.toggle_overlay,
            &mut self.toggle_settings,
            &mut self.mode_debug,
            &mut self.warp,
            &mut self.collect,
            &mut self.load,
            &mut self.bait,
            &mut self.place,
            &mut self.pick_up,
        ]
    }
}
