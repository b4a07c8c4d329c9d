//! Single impact evaluation.

use collision::{Body, CollisionEngine, EngineConfig, EngineError, Regime};
use tracing::trace;

use crate::params::ImpactVelocity;

/// Remnants requested from the engine besides the debris.
pub const REMNANTS: usize = 2;
pub const DEBRIS: bool = true;

/// Bodies left by one impact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    pub largest: Body,
    pub second: Body,
    pub debris: Body,
    pub regime: Regime,
}

/// Accretion efficiencies, normalised by the impactor mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Efficiencies {
    pub largest: f64,
    pub second: f64,
    pub debris: f64,
}

impl Outcome {
    pub fn efficiencies(&self, target: &Body, impactor: &Body) -> Efficiencies {
        Efficiencies {
            largest: (self.largest.mass - target.mass) / impactor.mass,
            second: (self.second.mass - impactor.mass) / impactor.mass,
            debris: self.debris.mass / impactor.mass,
        }
    }
}

pub struct OutcomeEvaluator<'a> {
    engine: &'a dyn CollisionEngine,
    conf: EngineConfig,
}

impl<'a> OutcomeEvaluator<'a> {
    pub fn new(engine: &'a dyn CollisionEngine, conf: EngineConfig) -> Self {
        Self { engine, conf }
    }

    pub fn config(&self) -> EngineConfig {
        self.conf
    }

    pub fn escape_velocity(&self, target: &Body, impactor: &Body) -> f64 {
        self.engine.escape_velocity(&self.conf, target, impactor)
    }

    /// Impact velocity in AU/day.
    pub fn impact_velocity(&self, velocity: ImpactVelocity, target: &Body, impactor: &Body) -> f64 {
        match velocity {
            ImpactVelocity::Absolute(v) => v,
            ImpactVelocity::EscapeMultiple(factor) => factor * self.escape_velocity(target, impactor),
        }
    }

    /// Resolves one impact at `velocity` (AU/day) and `angle` (radians).
    pub fn resolve(
        &self,
        target: &Body,
        impactor: &Body,
        velocity: f64,
        angle: f64,
    ) -> Result<Outcome, EngineError> {
        let conf = self.conf;
        let impact = self.engine.setup(&conf, target, impactor, velocity, angle)?;
        let resolution = self.engine.resolve(&conf, &impact, REMNANTS, DEBRIS)?;
        trace!(regime = %resolution.regime, bodies = resolution.bodies.len(), "impact resolved");

        match resolution.bodies.as_slice() {
            [largest, second, debris, ..] => Ok(Outcome {
                largest: *largest,
                second: *second,
                debris: *debris,
                regime: resolution.regime,
            }),
            _ => Err(EngineError::Degenerate("engine returned fewer than three bodies")),
        }
    }
}
