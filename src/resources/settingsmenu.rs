//! In-game settings page for the demo host.
//!
//! [`SettingsMenu`] is the demo's implementation of
//! [`SettingsRegistrar`]: it collects the options declared by
//! [`register_settings`](crate::settings::register_settings) and lets the
//! player walk through them with the keyboard. Edits go straight into
//! [`BubbleConfig`].

use bevy_ecs::prelude::Resource;
use log::warn;

use crate::resources::bubbleconfig::BubbleConfig;
use crate::settings::{SettingTarget, SettingsRegistrar, register_settings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingControl {
    Toggle,
    Slider { min: i32, max: i32 },
}

#[derive(Debug, Clone)]
pub struct SettingItem {
    pub label: String,
    pub target: SettingTarget,
    pub control: SettingControl,
}

impl SettingItem {
    /// Current value formatted for display.
    pub fn value_text(&self, config: &BubbleConfig) -> String {
        match self.control {
            SettingControl::Toggle => match self.target.get_bool(config) {
                Some(true) => "[x]".to_string(),
                _ => "[ ]".to_string(),
            },
            SettingControl::Slider { .. } => self
                .target
                .get_number(config)
                .map(|v| v.to_string())
                .unwrap_or_default(),
        }
    }
}

#[derive(Resource)]
pub struct SettingsMenu {
    pub items: Vec<SettingItem>,
    pub selected_index: usize,
    pub open: bool,
    reset: Option<fn(&mut BubbleConfig)>,
    save: Option<fn(&BubbleConfig) -> Result<(), String>>,
}

impl Default for SettingsMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsRegistrar for SettingsMenu {
    fn register(
        &mut self,
        reset: fn(&mut BubbleConfig),
        save: fn(&BubbleConfig) -> Result<(), String>,
    ) {
        self.reset = Some(reset);
        self.save = Some(save);
    }

    fn add_bool_option(&mut self, label: &str, target: SettingTarget) {
        self.items.push(SettingItem {
            label: label.to_string(),
            target,
            control: SettingControl::Toggle,
        });
    }

    fn add_number_option(&mut self, label: &str, target: SettingTarget, min: i32, max: i32) {
        self.items.push(SettingItem {
            label: label.to_string(),
            target,
            control: SettingControl::Slider { min, max },
        });
    }
}

impl SettingsMenu {
    /// Menu populated with the overlay's settings page.
    pub fn new() -> Self {
        let mut menu = Self {
            items: Vec::new(),
            selected_index: 0,
            open: false,
            reset: None,
            save: None,
        };
        register_settings(&mut menu);
        menu
    }

    pub fn selected(&self) -> Option<&SettingItem> {
        self.items.get(self.selected_index)
    }

    pub fn select_next(&mut self) {
        if !self.items.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.items.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.items.is_empty() {
            self.selected_index = (self.selected_index + self.items.len() - 1) % self.items.len();
        }
    }

    /// Flip the selected toggle.
    pub fn activate(&self, config: &mut BubbleConfig) {
        if let Some(item) = self.selected() {
            if let Some(value) = item.target.get_bool(config) {
                item.target.set_bool(config, !value);
            }
        }
    }

    /// Move the selected slider by `steps` increments. Toggles flip on any
    /// non-zero step.
    pub fn adjust(&self, config: &mut BubbleConfig, steps: i32) {
        let Some(item) = self.selected() else {
            return;
        };
        match item.control {
            SettingControl::Toggle => {
                if steps != 0 {
                    self.activate(config);
                }
            }
            SettingControl::Slider { min, max } => {
                let step = ((max - min) / 20).max(1);
                let current = item.target.get_number(config).unwrap_or(min);
                let value = (current + steps * step).clamp(min, max);
                item.target.set_number(config, value);
            }
        }
    }

    pub fn reset(&self, config: &mut BubbleConfig) {
        if let Some(reset) = self.reset {
            reset(config);
        }
    }

    pub fn save(&self, config: &BubbleConfig) {
        if let Some(save) = self.save {
            if let Err(e) = save(config) {
                warn!("Could not save settings: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::machinecatalog::MachineKind;

    #[test]
    fn test_menu_holds_every_option() {
        let menu = SettingsMenu::new();
        assert_eq!(menu.items.len(), 24);
        assert_eq!(menu.items[0].target, SettingTarget::Enabled);
        assert_eq!(
            menu.items[23].control,
            SettingControl::Slider { min: 1, max: 100 }
        );
    }

    #[test]
    fn test_navigation_wraps() {
        let mut menu = SettingsMenu::new();
        menu.select_previous();
        assert_eq!(menu.selected_index, 23);
        menu.select_next();
        assert_eq!(menu.selected_index, 0);
    }

    #[test]
    fn test_activate_flips_toggle() {
        let mut menu = SettingsMenu::new();
        let mut config = BubbleConfig::new();
        menu.select_next();
        menu.activate(&mut config);
        assert!(!config.is_kind_enabled(MachineKind::PreservesJar));
        menu.activate(&mut config);
        assert!(config.is_kind_enabled(MachineKind::PreservesJar));
    }

    #[test]
    fn test_adjust_slider_clamps() {
        let mut menu = SettingsMenu::new();
        let mut config = BubbleConfig::new();
        // last item is bubble size, default 100
        menu.select_previous();
        menu.adjust(&mut config, 1);
        assert_eq!(config.size_percent(), 100);
        menu.adjust(&mut config, -2);
        assert_eq!(config.size_percent(), 92);
        menu.adjust(&mut config, -100);
        assert_eq!(config.size_percent(), 1);
    }

    #[test]
    fn test_value_text() {
        let menu = SettingsMenu::new();
        let mut config = BubbleConfig::new();
        assert_eq!(menu.items[0].value_text(&config), "[x]");
        config.enabled = false;
        assert_eq!(menu.items[0].value_text(&config), "[ ]");
        assert_eq!(menu.items[20].value_text(&config), "64");
    }

    #[test]
    fn test_reset_uses_registered_action() {
        let menu = SettingsMenu::new();
        let mut config = BubbleConfig::new();
        config.set_emote_interval(900);
        menu.reset(&mut config);
        assert_eq!(config.emote_interval(), 250);
    }
}
