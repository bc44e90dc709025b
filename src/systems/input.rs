//! Input polling.
//!
//! [`update_input_state`] reads the keyboard from raylib once per frame and
//! writes the result into [`InputState`].
use raylib::prelude::*;

use crate::resources::input::InputState;

/// Poll raylib for every bound key.
pub fn update_input_state(rl: &RaylibHandle, input: &mut InputState) {
    for state in input.all_mut() {
        let key = state.key_binding;
        state.set(
            rl.is_key_down(key),
            rl.is_key_pressed(key),
            rl.is_key_released(key),
        );
    }
}
