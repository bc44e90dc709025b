//! Settings page input and drawing for the demo host.
//!
//! Opening or closing the page counts as a host menu change, which makes the
//! overlay rescan the active scene. Closing also saves the configuration.

use raylib::prelude::*;

use crate::resources::bubbleconfig::BubbleConfig;
use crate::resources::input::InputState;
use crate::resources::settingsmenu::{SettingControl, SettingsMenu};

/// What the host has to do after a frame of menu input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    Unchanged,
    Opened,
    Closed,
}

/// Apply this frame's keys to the settings page.
pub fn handle_settings_input(
    menu: &mut SettingsMenu,
    config: &mut BubbleConfig,
    input: &InputState,
) -> MenuOutcome {
    if !menu.open {
        if input.toggle_settings.just_pressed {
            menu.open = true;
            menu.selected_index = 0;
            return MenuOutcome::Opened;
        }
        return MenuOutcome::Unchanged;
    }

    if input.menu_back.just_pressed || input.toggle_settings.just_pressed {
        menu.open = false;
        menu.save(config);
        return MenuOutcome::Closed;
    }
    if input.menu_down.just_pressed {
        menu.select_next();
    }
    if input.menu_up.just_pressed {
        menu.select_previous();
    }
    if input.menu_right.just_pressed {
        menu.adjust(config, 1);
    }
    if input.menu_left.just_pressed {
        menu.adjust(config, -1);
    }
    if input.menu_confirm.just_pressed {
        menu.activate(config);
    }
    if input.menu_reset.just_pressed {
        menu.reset(config);
    }
    MenuOutcome::Unchanged
}

/// Draw the settings page in screen space.
pub fn render_settings_menu(menu: &SettingsMenu, config: &BubbleConfig, d: &mut impl RaylibDraw) {
    if !menu.open {
        return;
    }
    const X: i32 = 40;
    const Y: i32 = 40;
    const LINE: i32 = 18;
    let height = (menu.items.len() as i32 + 3) * LINE;
    d.draw_rectangle(X - 10, Y - 10, 420, height, Color::new(0, 0, 0, 200));
    d.draw_text(
        "Settings (arrows: move/adjust, Enter: toggle, R: reset, Esc: save & close)",
        X,
        Y,
        10,
        Color::LIGHTGRAY,
    );

    for (i, item) in menu.items.iter().enumerate() {
        let y = Y + (i as i32 + 2) * LINE;
        let color = if i == menu.selected_index {
            Color::YELLOW
        } else {
            Color::WHITE
        };
        d.draw_text(&item.label, X, y, 14, color);
        let value = match item.control {
            SettingControl::Toggle => item.value_text(config),
            SettingControl::Slider { min, max } => {
                format!("< {} >  ({}-{})", item.value_text(config), min, max)
            }
        };
        d.draw_text(&value, X + 240, y, 14, color);
    }
}
