//! The collision engine contract.
//!
//! An engine resolves a two-body impact in two steps: [`CollisionEngine::setup`]
//! fixes the contact geometry, then [`CollisionEngine::resolve`] turns it into
//! post-collision bodies and a [`Regime`]. Every call receives the
//! [`EngineConfig`] explicitly; engines hold no per-request state.

use nalgebra::Vector2;

use crate::body::Body;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::regime::Regime;

/// Contact geometry of an impact, produced by [`CollisionEngine::setup`].
///
/// Positions and velocities are those of the impactor relative to the target at
/// first contact, in the configured unit system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impact {
    pub target: Body,
    pub impactor: Body,
    pub position: Vector2<f64>,
    pub velocity: Vector2<f64>,
}

impl Impact {
    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    pub fn contact_distance(&self) -> f64 {
        self.position.norm()
    }

    pub fn total_mass(&self) -> f64 {
        self.target.mass + self.impactor.mass
    }

    /// Impact parameter b = sin θ, from |r × v| / (|r| |v|).
    pub fn impact_parameter(&self) -> f64 {
        let norm = self.contact_distance() * self.speed();
        (self.position.perp(&self.velocity).abs() / norm).clamp(0.0, 1.0)
    }
}

/// Bodies left after an impact and the regime it falls in.
///
/// `bodies` holds the requested number of remnants ordered by decreasing mass,
/// followed by the aggregated debris when requested. Missing remnants are
/// reported as [`Body::empty`].
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub bodies: Vec<Body>,
    pub regime: Regime,
}

pub trait CollisionEngine: Send + Sync {
    /// Mutual escape velocity of two bodies at contact.
    fn escape_velocity(&self, conf: &EngineConfig, a: &Body, b: &Body) -> f64;

    /// Fixes the impact geometry for a relative velocity and an impact angle
    /// (radians, 0 is head-on).
    fn setup(
        &self,
        conf: &EngineConfig,
        target: &Body,
        impactor: &Body,
        velocity: f64,
        angle: f64,
    ) -> Result<Impact>;

    /// Resolves an impact into `remnants` bodies plus, if `debris` is set, one
    /// body aggregating everything else.
    fn resolve(
        &self,
        conf: &EngineConfig,
        impact: &Impact,
        remnants: usize,
        debris: bool,
    ) -> Result<Resolution>;

    /// Replaces the radius of `body` with the equilibrium radius of the active
    /// model for its mass.
    fn body_radius(&self, conf: &EngineConfig, body: &mut Body);

    fn regime_desc(&self, regime: Regime) -> &'static str {
        regime.description()
    }
}
