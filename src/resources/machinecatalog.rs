//! Machine kind catalog.
//!
//! A single static table maps every trackable [`MachineKind`] to the qualified
//! identifiers the host uses for it and to the INI key of its enable flag.
//! [`MachineCatalog`] indexes the table by identifier so matching an object is
//! one hash lookup followed by the kind's enable check in
//! [`BubbleConfig`](crate::resources::bubbleconfig::BubbleConfig).

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

use crate::resources::bubbleconfig::BubbleConfig;

/// Kinds of machines the overlay can track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MachineKind {
    PreservesJar,
    Keg,
    Cask,
    MayonnaiseMachine,
    CheesePress,
    Loom,
    OilMaker,
    Dehydrator,
    FishSmoker,
    BaitMaker,
    BoneMill,
    CharcoalKiln,
    Crystalarium,
    Furnace,
    RecyclingMachine,
    SeedMaker,
    SlimeEggPress,
    CrabPot,
    Deconstructor,
}

/// Static description of one machine kind.
#[derive(Debug)]
pub struct KindInfo {
    pub kind: MachineKind,
    /// Qualified item ids that identify this kind. Some kinds have a legacy
    /// and a newer variant.
    pub identifiers: &'static [&'static str],
    /// Key of the enable flag in the `[machines]` config section.
    pub config_key: &'static str,
    /// Human readable name used by the settings page.
    pub label: &'static str,
}

/// Catalog table, in [`MachineKind`] declaration order.
pub const MACHINE_KINDS: [KindInfo; 19] = [
    KindInfo {
        kind: MachineKind::PreservesJar,
        identifiers: &["(BC)15"],
        config_key: "jars",
        label: "Preserves jars",
    },
    KindInfo {
        kind: MachineKind::Keg,
        identifiers: &["(BC)12"],
        config_key: "kegs",
        label: "Kegs",
    },
    KindInfo {
        kind: MachineKind::Cask,
        identifiers: &["(BC)163"],
        config_key: "casks",
        label: "Casks",
    },
    KindInfo {
        kind: MachineKind::MayonnaiseMachine,
        identifiers: &["(BC)24"],
        config_key: "mayonnaise_machines",
        label: "Mayonnaise machines",
    },
    KindInfo {
        kind: MachineKind::CheesePress,
        identifiers: &["(BC)16"],
        config_key: "cheese_presses",
        label: "Cheese presses",
    },
    KindInfo {
        kind: MachineKind::Loom,
        identifiers: &["(BC)17"],
        config_key: "looms",
        label: "Looms",
    },
    KindInfo {
        kind: MachineKind::OilMaker,
        identifiers: &["(BC)19"],
        config_key: "oil_makers",
        label: "Oil makers",
    },
    KindInfo {
        kind: MachineKind::Dehydrator,
        identifiers: &["(BC)Dehydrator"],
        config_key: "dehydrators",
        label: "Dehydrators",
    },
    KindInfo {
        kind: MachineKind::FishSmoker,
        identifiers: &["(BC)FishSmoker"],
        config_key: "fish_smokers",
        label: "Fish smokers",
    },
    KindInfo {
        kind: MachineKind::BaitMaker,
        identifiers: &["(BC)BaitMaker"],
        config_key: "bait_makers",
        label: "Bait makers",
    },
    KindInfo {
        kind: MachineKind::BoneMill,
        identifiers: &["(BC)90"],
        config_key: "bone_mills",
        label: "Bone mills",
    },
    KindInfo {
        kind: MachineKind::CharcoalKiln,
        identifiers: &["(BC)114"],
        config_key: "charcoal_kilns",
        label: "Charcoal kilns",
    },
    KindInfo {
        kind: MachineKind::Crystalarium,
        identifiers: &["(BC)21"],
        config_key: "crystalariums",
        label: "Crystalariums",
    },
    KindInfo {
        kind: MachineKind::Furnace,
        identifiers: &["(BC)13", "(BC)HeavyFurnace"],
        config_key: "furnaces",
        label: "Furnaces",
    },
    KindInfo {
        kind: MachineKind::RecyclingMachine,
        identifiers: &["(BC)20"],
        config_key: "recycling_machines",
        label: "Recycling machines",
    },
    KindInfo {
        kind: MachineKind::SeedMaker,
        identifiers: &["(BC)25"],
        config_key: "seed_makers",
        label: "Seed makers",
    },
    KindInfo {
        kind: MachineKind::SlimeEggPress,
        identifiers: &["(BC)158"],
        config_key: "slime_egg_presses",
        label: "Slime egg presses",
    },
    KindInfo {
        kind: MachineKind::CrabPot,
        identifiers: &["(O)710"],
        config_key: "crab_pots",
        label: "Crab pots",
    },
    KindInfo {
        kind: MachineKind::Deconstructor,
        identifiers: &["(BC)265"],
        config_key: "deconstructors",
        label: "Deconstructors",
    },
];

impl MachineKind {
    /// Every kind, in catalog order.
    pub fn all() -> impl Iterator<Item = MachineKind> {
        MACHINE_KINDS.iter().map(|info| info.kind)
    }

    pub fn info(self) -> &'static KindInfo {
        &MACHINE_KINDS[self as usize]
    }

    pub fn identifiers(self) -> &'static [&'static str] {
        self.info().identifiers
    }

    pub fn config_key(self) -> &'static str {
        self.info().config_key
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    pub fn is_crab_pot(self) -> bool {
        self == MachineKind::CrabPot
    }
}

/// Identifier index over [`MACHINE_KINDS`].
#[derive(Resource, Debug, Clone)]
pub struct MachineCatalog {
    by_identifier: FxHashMap<&'static str, MachineKind>,
}

impl Default for MachineCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MachineCatalog {
    pub fn new() -> Self {
        let mut by_identifier = FxHashMap::default();
        for info in MACHINE_KINDS.iter() {
            for id in info.identifiers {
                by_identifier.insert(*id, info.kind);
            }
        }
        Self { by_identifier }
    }

    /// Kind for a qualified identifier, regardless of configuration.
    pub fn kind_of(&self, qualified_id: &str) -> Option<MachineKind> {
        self.by_identifier.get(qualified_id).copied()
    }

    /// Kind for a qualified identifier, only if that kind is enabled.
    pub fn match_enabled(&self, qualified_id: &str, config: &BubbleConfig) -> Option<MachineKind> {
        self.kind_of(qualified_id)
            .filter(|kind| config.is_kind_enabled(*kind))
    }
}
