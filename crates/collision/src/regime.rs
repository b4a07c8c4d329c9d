use serde::{Deserialize, Serialize};
use std::fmt;

/// Collision outcome regime.
///
/// The integer codes are part of the wire format of regime maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Regime {
    /// Target grows; includes perfect merging below the escape velocity
    Accretion,
    /// Target loses mass
    Erosion,
    /// Largest remnant below a tenth of the total mass
    SuperCatastrophic,
    /// Grazing impact slow enough for the bodies to merge on a second contact
    GrazeAndMerge,
    /// Grazing impact where the projectile escapes
    HitAndRun,
}

impl Regime {
    pub const ALL: [Regime; 5] = [
        Regime::Accretion,
        Regime::Erosion,
        Regime::SuperCatastrophic,
        Regime::GrazeAndMerge,
        Regime::HitAndRun,
    ];

    pub fn code(&self) -> u8 {
        match self {
            Regime::Accretion => 1,
            Regime::Erosion => 2,
            Regime::SuperCatastrophic => 3,
            Regime::GrazeAndMerge => 4,
            Regime::HitAndRun => 5,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Regime::Accretion => "Accretion",
            Regime::Erosion => "Erosion",
            Regime::SuperCatastrophic => "Super-catastrophic disruption",
            Regime::GrazeAndMerge => "Graze-and-merge",
            Regime::HitAndRun => "Hit-and-run",
        }
    }

    /// Short label used on plot legends.
    pub fn label(&self) -> &'static str {
        match self {
            Regime::Accretion => "Accretion",
            Regime::Erosion => "Erosion",
            Regime::SuperCatastrophic => "Super cat.",
            Regime::GrazeAndMerge => "Graze and Merge",
            Regime::HitAndRun => "Hit and Run",
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
