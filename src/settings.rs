//! Settings page registration.
//!
//! The overlay does not own a settings UI. Whatever UI the host offers
//! implements [`SettingsRegistrar`], and [`register_settings`] declares the
//! page on it: the master switch, one toggle per machine kind and four
//! sliders. Every option is bound to a [`SettingTarget`] that reads and writes
//! [`BubbleConfig`] directly, so edits take effect immediately.

use crate::resources::bubbleconfig::{
    BubbleConfig, EMOTE_INTERVAL_RANGE, OFFSET_Y_RANGE, OPACITY_RANGE, SIZE_RANGE,
};
use crate::resources::machinecatalog::MachineKind;

/// Config value an option is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingTarget {
    Enabled,
    Kind(MachineKind),
    OffsetY,
    EmoteInterval,
    Opacity,
    Size,
}

impl SettingTarget {
    pub fn label(self) -> &'static str {
        match self {
            SettingTarget::Enabled => "Enabled",
            SettingTarget::Kind(kind) => kind.label(),
            SettingTarget::OffsetY => "Bubble Y offset",
            SettingTarget::EmoteInterval => "Animation interval (ms)",
            SettingTarget::Opacity => "Opacity (%)",
            SettingTarget::Size => "Bubble size (%)",
        }
    }

    /// Current value of a toggle target, `None` for sliders.
    pub fn get_bool(self, config: &BubbleConfig) -> Option<bool> {
        match self {
            SettingTarget::Enabled => Some(config.enabled),
            SettingTarget::Kind(kind) => Some(config.is_kind_enabled(kind)),
            _ => None,
        }
    }

    pub fn set_bool(self, config: &mut BubbleConfig, value: bool) {
        match self {
            SettingTarget::Enabled => config.enabled = value,
            SettingTarget::Kind(kind) => config.set_kind_enabled(kind, value),
            _ => {}
        }
    }

    /// Current value of a slider target, `None` for toggles.
    pub fn get_number(self, config: &BubbleConfig) -> Option<i32> {
        match self {
            SettingTarget::OffsetY => Some(config.offset_y()),
            SettingTarget::EmoteInterval => Some(config.emote_interval() as i32),
            SettingTarget::Opacity => Some(config.opacity_percent() as i32),
            SettingTarget::Size => Some(config.size_percent() as i32),
            _ => None,
        }
    }

    /// Write a slider value; the config clamps it into range.
    pub fn set_number(self, config: &mut BubbleConfig, value: i32) {
        let unsigned = value.max(0) as u32;
        match self {
            SettingTarget::OffsetY => config.set_offset_y(value),
            SettingTarget::EmoteInterval => config.set_emote_interval(unsigned),
            SettingTarget::Opacity => config.set_opacity_percent(unsigned),
            SettingTarget::Size => config.set_size_percent(unsigned),
            _ => {}
        }
    }
}

/// A host settings UI able to show toggles and sliders.
pub trait SettingsRegistrar {
    /// Declare the page and its reset/save actions.
    fn register(&mut self, reset: fn(&mut BubbleConfig), save: fn(&BubbleConfig) -> Result<(), String>);
    fn add_bool_option(&mut self, label: &str, target: SettingTarget);
    fn add_number_option(&mut self, label: &str, target: SettingTarget, min: i32, max: i32);
}

fn reset_config(config: &mut BubbleConfig) {
    config.reset();
}

fn save_config(config: &BubbleConfig) -> Result<(), String> {
    config.save_to_file()
}

/// Declare the overlay's settings page on `registrar`.
pub fn register_settings(registrar: &mut impl SettingsRegistrar) {
    registrar.register(reset_config, save_config);

    registrar.add_bool_option(SettingTarget::Enabled.label(), SettingTarget::Enabled);
    for kind in MachineKind::all() {
        let target = SettingTarget::Kind(kind);
        registrar.add_bool_option(target.label(), target);
    }

    let sliders = [
        (SettingTarget::OffsetY, *OFFSET_Y_RANGE.start(), *OFFSET_Y_RANGE.end()),
        (
            SettingTarget::EmoteInterval,
            *EMOTE_INTERVAL_RANGE.start() as i32,
            *EMOTE_INTERVAL_RANGE.end() as i32,
        ),
        (
            SettingTarget::Opacity,
            *OPACITY_RANGE.start() as i32,
            *OPACITY_RANGE.end() as i32,
        ),
        (
            SettingTarget::Size,
            *SIZE_RANGE.start() as i32,
            *SIZE_RANGE.end() as i32,
        ),
    ];
    for (target, min, max) in sliders {
        registrar.add_number_option(target.label(), target, min, max);
    }
}
