use collision::{Body, CollisionEngine};
use serde_json::Value;
use units::Length;

use crate::model::ModelSelector;
use crate::params::{BodyParams, BodySize, Echo, Role};

/// Builds colliding bodies from validated parameters.
pub struct BodyFactory<'a> {
    engine: &'a dyn CollisionEngine,
}

impl<'a> BodyFactory<'a> {
    pub fn new(engine: &'a dyn CollisionEngine) -> Self {
        Self { engine }
    }

    /// A model-derived body takes the engine's equilibrium radius for its mass.
    pub fn build(&self, params: &BodyParams) -> Body {
        match params.size {
            BodySize::Radius(radius) => Body::new(params.mass, radius),
            BodySize::ModelDerived => {
                let mut body = Body::from_mass(params.mass);
                self.engine.body_radius(&ModelSelector::radius_config(), &mut body);
                body
            }
        }
    }

    /// Builds the body and reports its final radius in Earth radii as
    /// `rtar`/`rimp`.
    pub fn build_echoed(&self, role: Role, params: &BodyParams, echo: &mut Echo) -> Body {
        let body = self.build(params);
        echo.insert(
            format!("r{}", role.prefix()),
            Value::from(Length::from_au(body.radius).to_earth_radii()),
        );
        body
    }
}
