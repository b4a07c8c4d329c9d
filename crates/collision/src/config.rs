//! Engine configuration: unit system and collision model.
//!
//! The configuration is a small `Copy` value. Callers that evaluate many
//! impacts in parallel hand each evaluation its own copy instead of sharing a
//! mutable instance.

use serde::{Deserialize, Serialize};
use units::length::AU_M;
use units::mass::G_CGS;
use units::{Density, Length, Mass, SOLAR_MASS_KG};

/// Gaussian gravitational constant k (AU^(3/2) M☉^(-1/2) day⁻¹)
pub const GAUSSIAN_GRAVITATIONAL_CONSTANT: f64 = 0.01720209895;

/// Unit system in which bodies, velocities and constants are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnitSystem {
    /// Solar masses, astronomical units and days
    #[default]
    SolarAuDay,
    /// Kilograms, meters and seconds
    Si,
}

impl UnitSystem {
    /// Newtonian constant of gravitation in this unit system.
    pub fn gravitational_constant(&self) -> f64 {
        match self {
            UnitSystem::SolarAuDay => GAUSSIAN_GRAVITATIONAL_CONSTANT.powi(2),
            UnitSystem::Si => G_CGS * 1.0e-3,
        }
    }

    pub fn mass(&self, mass: Mass) -> f64 {
        match self {
            UnitSystem::SolarAuDay => mass.to_solar_masses(),
            UnitSystem::Si => mass.to_kg(),
        }
    }

    pub fn length(&self, length: Length) -> f64 {
        match self {
            UnitSystem::SolarAuDay => length.to_au(),
            UnitSystem::Si => length.to_meters(),
        }
    }

    pub fn density(&self, density: Density) -> f64 {
        match self {
            UnitSystem::SolarAuDay => density.to_kg_per_m3() * AU_M.powi(3) / SOLAR_MASS_KG,
            UnitSystem::Si => density.to_kg_per_m3(),
        }
    }
}

/// Collision model used to resolve an impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CollisionModel {
    /// Every collision merges both bodies
    PerfectMerge,
    /// Leinhardt & Stewart (2012) scaling laws, projectile intact in hit-and-run
    Ls2012,
    /// Stewart & Leinhardt (2012), projectile eroded in hit-and-run
    Sl2012,
    /// Cambioni et al. (2019) with the equilibrium mass-radius law
    #[default]
    C2019,
}

/// Configuration handed to every engine call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    pub units: UnitSystem,
    pub model: CollisionModel,
}

impl EngineConfig {
    pub fn new(units: UnitSystem, model: CollisionModel) -> Self {
        Self { units, model }
    }
}
