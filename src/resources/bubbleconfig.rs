//! Overlay configuration resource.
//!
//! User preferences for the bubble overlay, loaded once from an INI file at
//! startup and written back whenever the settings page saves. Values loaded
//! from disk or pushed by the settings page are clamped into their ranges.
//!
//! # Configuration File Format
//!
//! ```ini
//! [general]
//! enabled = true
//! offset_y = 64
//! emote_interval = 250
//! opacity_percent = 100
//! size_percent = 100
//!
//! [machines]
//! jars = true
//! kegs = false
//! crab_pots = true
//! ```
//!
//! Kinds missing from `[machines]` stay enabled.

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{debug, info};
use rustc_hash::FxHashMap;
use std::ops::RangeInclusive;
use std::path::PathBuf;

use crate::resources::machinecatalog::MachineKind;

/// Default safe values for startup
const DEFAULT_ENABLED: bool = true;
const DEFAULT_OFFSET_Y: i32 = 64;
const DEFAULT_EMOTE_INTERVAL: u32 = 250;
const DEFAULT_OPACITY_PERCENT: u32 = 100;
const DEFAULT_SIZE_PERCENT: u32 = 100;
const DEFAULT_CONFIG_PATH: &str = "./bubbles.ini";

pub const OFFSET_Y_RANGE: RangeInclusive<i32> = 0..=128;
pub const EMOTE_INTERVAL_RANGE: RangeInclusive<u32> = 0..=1000;
pub const OPACITY_RANGE: RangeInclusive<u32> = 1..=100;
pub const SIZE_RANGE: RangeInclusive<u32> = 1..=100;

const GENERAL: &str = "general";
const MACHINES: &str = "machines";

/// Overlay configuration resource.
///
/// Components never read a global; they take `Res<BubbleConfig>` (or a
/// `&BubbleConfig`) at their entry points.
#[derive(Resource, Debug, Clone)]
pub struct BubbleConfig {
    /// Master switch for tracking, animation and rendering.
    pub enabled: bool,
    kinds: FxHashMap<MachineKind, bool>,
    /// Pixels the bubble is lifted above the tile.
    offset_y: i32,
    /// Milliseconds between animation frames.
    emote_interval: u32,
    opacity_percent: u32,
    size_percent: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for BubbleConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl BubbleConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            enabled: DEFAULT_ENABLED,
            kinds: MachineKind::all().map(|kind| (kind, true)).collect(),
            offset_y: DEFAULT_OFFSET_Y,
            emote_interval: DEFAULT_EMOTE_INTERVAL,
            opacity_percent: DEFAULT_OPACITY_PERCENT,
            size_percent: DEFAULT_SIZE_PERCENT,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Restore every value to its default, keeping the file path.
    pub fn reset(&mut self) {
        let path = std::mem::take(&mut self.config_path);
        *self = Self::with_path(path);
    }

    pub fn is_kind_enabled(&self, kind: MachineKind) -> bool {
        self.kinds.get(&kind).copied().unwrap_or(true)
    }

    pub fn set_kind_enabled(&mut self, kind: MachineKind, enabled: bool) {
        self.kinds.insert(kind, enabled);
    }

    pub fn offset_y(&self) -> i32 {
        self.offset_y
    }

    pub fn set_offset_y(&mut self, value: i32) {
        self.offset_y = value.clamp(*OFFSET_Y_RANGE.start(), *OFFSET_Y_RANGE.end());
    }

    pub fn emote_interval(&self) -> u32 {
        self.emote_interval
    }

    pub fn set_emote_interval(&mut self, value: u32) {
        self.emote_interval =
            value.clamp(*EMOTE_INTERVAL_RANGE.start(), *EMOTE_INTERVAL_RANGE.end());
    }

    pub fn opacity_percent(&self) -> u32 {
        self.opacity_percent
    }

    pub fn set_opacity_percent(&mut self, value: u32) {
        self.opacity_percent = value.clamp(*OPACITY_RANGE.start(), *OPACITY_RANGE.end());
    }

    pub fn size_percent(&self) -> u32 {
        self.size_percent
    }

    pub fn set_size_percent(&mut self, value: u32) {
        self.size_percent = value.clamp(*SIZE_RANGE.start(), *SIZE_RANGE.end());
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut ini = Ini::new();
        ini.load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&ini);

        info!(
            "Loaded config: enabled={}, offset_y={}, interval={}ms, opacity={}%, size={}%",
            self.enabled,
            self.offset_y,
            self.emote_interval,
            self.opacity_percent,
            self.size_percent
        );

        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut ini = Ini::new();
        ini.read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&ini);
        Ok(())
    }

    fn apply_ini(&mut self, ini: &Ini) {
        // [general] section
        if let Some(enabled) = ini.getbool(GENERAL, "enabled").ok().flatten() {
            self.enabled = enabled;
        }
        if let Some(offset) = ini.getint(GENERAL, "offset_y").ok().flatten() {
            self.set_offset_y(offset.clamp(i32::MIN as i64, i32::MAX as i64) as i32);
        }
        if let Some(interval) = ini.getint(GENERAL, "emote_interval").ok().flatten() {
            self.set_emote_interval(interval.clamp(0, u32::MAX as i64) as u32);
        }
        if let Some(opacity) = ini.getint(GENERAL, "opacity_percent").ok().flatten() {
            self.set_opacity_percent(opacity.clamp(0, u32::MAX as i64) as u32);
        }
        if let Some(size) = ini.getint(GENERAL, "size_percent").ok().flatten() {
            self.set_size_percent(size.clamp(0, u32::MAX as i64) as u32);
        }

        // [machines] section
        for kind in MachineKind::all() {
            match ini.getbool(MACHINES, kind.config_key()) {
                Ok(Some(enabled)) => self.set_kind_enabled(kind, enabled),
                Ok(None) => {}
                Err(e) => debug!("Ignoring [machines] {}: {}", kind.config_key(), e),
            }
        }
    }

    fn to_ini(&self) -> Ini {
        let mut ini = Ini::new();

        // [general] section
        ini.set(GENERAL, "enabled", Some(self.enabled.to_string()));
        ini.set(GENERAL, "offset_y", Some(self.offset_y.to_string()));
        ini.set(GENERAL, "emote_interval", Some(self.emote_interval.to_string()));
        ini.set(GENERAL, "opacity_percent", Some(self.opacity_percent.to_string()));
        ini.set(GENERAL, "size_percent", Some(self.size_percent.to_string()));

        // [machines] section
        for kind in MachineKind::all() {
            ini.set(
                MACHINES,
                kind.config_key(),
                Some(self.is_kind_enabled(kind).to_string()),
            );
        }
        ini
    }

    /// Render the configuration as INI text.
    pub fn to_ini_string(&self) -> String {
        self.to_ini().writes()
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        self.to_ini()
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}
