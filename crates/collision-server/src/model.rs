//! Collision model selection.

use collision::{CollisionModel, EngineConfig, UnitSystem};

/// Maps request model names to engine configurations.
///
/// The final configuration is only produced once both bodies exist: radius
/// derivation runs under its own explicit configuration.
pub struct ModelSelector;

impl ModelSelector {
    pub const NAMES: [&'static str; 4] = ["merge", "ls2012", "sl2012", "c2019"];

    pub fn parse(name: &str) -> Option<CollisionModel> {
        match name {
            "merge" => Some(CollisionModel::PerfectMerge),
            "ls2012" => Some(CollisionModel::Ls2012),
            "sl2012" => Some(CollisionModel::Sl2012),
            "c2019" => Some(CollisionModel::C2019),
            _ => None,
        }
    }

    pub fn name(model: CollisionModel) -> &'static str {
        match model {
            CollisionModel::PerfectMerge => "merge",
            CollisionModel::Ls2012 => "ls2012",
            CollisionModel::Sl2012 => "sl2012",
            CollisionModel::C2019 => "c2019",
        }
    }

    /// Configuration used to evaluate impacts with `model`.
    pub fn configure(model: CollisionModel) -> EngineConfig {
        EngineConfig::new(UnitSystem::SolarAuDay, model)
    }

    /// Configuration used to derive equilibrium radii, whatever model is requested.
    pub fn radius_config() -> EngineConfig {
        EngineConfig::new(UnitSystem::SolarAuDay, CollisionModel::C2019)
    }
}
