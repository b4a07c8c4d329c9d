//! The collision module: single impacts and grid maps.

use std::sync::Arc;

use collision::CollisionEngine;
use plot::Renderer;
use serde_json::Value;
use tracing::{debug, error};

use crate::bodies::BodyFactory;
use crate::error::{Result, ServerError};
use crate::format::{OutputFormat, Reply, ResponseFormatter};
use crate::grid::{GridQuantity, GridSweeper};
use crate::model::ModelSelector;
use crate::outcome::OutcomeEvaluator;
use crate::params::{Item, Rejected, Role, retrieve_params};
use crate::query::QueryParams;

/// Sub-paths served by the module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Single,
    Grid,
}

impl Endpoint {
    /// Matches `single` and `grid`, with or without a trailing slash.
    pub fn parse(sub: Option<&str>) -> Option<Self> {
        match sub? {
            "single" | "single/" => Some(Endpoint::Single),
            "grid" | "grid/" => Some(Endpoint::Grid),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct CollModule {
    engine: Arc<dyn CollisionEngine>,
    renderer: Arc<dyn Renderer>,
}

impl CollModule {
    pub fn new(engine: Arc<dyn CollisionEngine>, renderer: Arc<dyn Renderer>) -> Self {
        Self { engine, renderer }
    }

    /// Serves `sub`, the request path below the module's mount point.
    pub fn handle(&self, sub: Option<&str>, query: &QueryParams) -> Result<Reply> {
        match Endpoint::parse(sub).ok_or(ServerError::NotFound)? {
            Endpoint::Single => self.single(query),
            Endpoint::Grid => self.grid(query),
        }
    }

    fn reject(rejected: Rejected) -> Result<Reply> {
        let invalid: Vec<&str> = rejected
            .echo
            .iter()
            .filter(|(_, value)| value.is_null())
            .map(|(key, _)| key.as_str())
            .collect();
        debug!(?invalid, "request rejected");
        Reply::json(&rejected.echo)
    }

    /// Outcome of one impact.
    pub fn single(&self, query: &QueryParams) -> Result<Reply> {
        let items = [Item::Model, Item::Target, Item::Impactor, Item::Velocity, Item::Angle];
        let resolved = match retrieve_params(query, &items) {
            Ok(resolved) => resolved,
            Err(rejected) => return Self::reject(rejected),
        };

        let (Some(model), Some(target), Some(impactor), Some(velocity), Some(angle)) = (
            resolved.model,
            resolved.target,
            resolved.impactor,
            resolved.velocity,
            resolved.angle,
        ) else {
            return Err(ServerError::Incomplete("single-impact parameters"));
        };
        let mut echo = resolved.echo;

        let factory = BodyFactory::new(self.engine.as_ref());
        let target = factory.build_echoed(Role::Target, &target, &mut echo);
        let impactor = factory.build_echoed(Role::Impactor, &impactor, &mut echo);

        let evaluator = OutcomeEvaluator::new(self.engine.as_ref(), ModelSelector::configure(model));
        let velocity = evaluator.impact_velocity(velocity, &target, &impactor);
        let outcome = evaluator
            .resolve(&target, &impactor, velocity, angle.to_radians())
            .inspect_err(|err| error!(%err, "single impact failed"))?;

        let efficiencies = outcome.efficiencies(&target, &impactor);
        echo.insert(
            "regime".to_string(),
            Value::from(self.engine.regime_desc(outcome.regime)),
        );
        echo.insert("acclr".to_string(), Value::from(efficiencies.largest));
        echo.insert("accsr".to_string(), Value::from(efficiencies.second));
        echo.insert("acctr".to_string(), Value::from(efficiencies.debris));

        Reply::json(&echo)
    }

    /// Map of outcomes over impact angle and velocity.
    ///
    /// The check format stops after validation and never evaluates an impact.
    pub fn grid(&self, query: &QueryParams) -> Result<Reply> {
        let format = OutputFormat::parse(query.parse_choice("format", &OutputFormat::NAMES));

        let items = [Item::Model, Item::Target, Item::Impactor];
        let resolved = match retrieve_params(query, &items) {
            Ok(resolved) => resolved,
            Err(rejected) => return Self::reject(rejected),
        };

        let (Some(model), Some(target), Some(impactor)) =
            (resolved.model, resolved.target, resolved.impactor)
        else {
            return Err(ServerError::Incomplete("grid parameters"));
        };
        let mut echo = resolved.echo;

        let factory = BodyFactory::new(self.engine.as_ref());
        let target = factory.build_echoed(Role::Target, &target, &mut echo);
        let impactor = factory.build_echoed(Role::Impactor, &impactor, &mut echo);

        if format.is_check() {
            return ResponseFormatter::check(echo);
        }

        let quantity = GridQuantity::parse(query.parse_choice("quant", &GridQuantity::NAMES));
        let evaluator = OutcomeEvaluator::new(self.engine.as_ref(), ModelSelector::configure(model));
        let map = GridSweeper::new(evaluator).sweep(&target, &impactor, quantity);

        ResponseFormatter::new(self.renderer.as_ref()).respond(format, echo, &map)
    }
}
