use approx::assert_relative_eq;
use collision::{
    Body, CollisionEngine, CollisionModel, EngineConfig, EngineError, Impact, Regime, Resolution,
    ScalingLawEngine,
};
use units::{Length, Mass};

use crate::grid::*;
use crate::model::ModelSelector;
use crate::outcome::{Outcome, OutcomeEvaluator};

/// Scaling-law engine that refuses impacts steeper than 60°.
struct SteepFailure(ScalingLawEngine);

impl CollisionEngine for SteepFailure {
    fn escape_velocity(&self, conf: &EngineConfig, a: &Body, b: &Body) -> f64 {
        self.0.escape_velocity(conf, a, b)
    }

    fn setup(
        &self,
        conf: &EngineConfig,
        target: &Body,
        impactor: &Body,
        velocity: f64,
        angle: f64,
    ) -> collision::Result<Impact> {
        if angle > 60f64.to_radians() + 1e-9 {
            return Err(EngineError::Degenerate("steep"));
        }
        self.0.setup(conf, target, impactor, velocity, angle)
    }

    fn resolve(
        &self,
        conf: &EngineConfig,
        impact: &Impact,
        remnants: usize,
        debris: bool,
    ) -> collision::Result<Resolution> {
        self.0.resolve(conf, impact, remnants, debris)
    }

    fn body_radius(&self, conf: &EngineConfig, body: &mut Body) {
        self.0.body_radius(conf, body)
    }
}

fn bodies() -> (Body, Body) {
    let target = Body::new(
        Mass::from_earth_masses(1.0).to_solar_masses(),
        Length::from_earth_radii(1.0).to_au(),
    );
    let impactor = Body::new(
        Mass::from_earth_masses(0.5).to_solar_masses(),
        Length::from_earth_radii(0.8).to_au(),
    );
    (target, impactor)
}

#[test]
fn test_linspace() {
    assert_eq!(linspace(0.0, 1.0, 0), Vec::<f64>::new());
    assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);

    let ratios = linspace(RATIO_MIN, RATIO_MAX, GRID_SIZE);
    assert_eq!(ratios.len(), 91);
    assert_eq!(ratios[0], 0.99);
    assert_eq!(ratios[90], 4.01);
    assert_relative_eq!(ratios[1] - ratios[0], 3.02 / 90.0, max_relative = 1e-12);

    let angles = linspace(ANGLE_MIN, ANGLE_MAX, GRID_SIZE);
    assert_eq!(angles[45], 45.0);
}

#[test]
fn test_quantity_names() {
    assert_eq!(GridQuantity::parse(None), GridQuantity::Regime);
    assert_eq!(GridQuantity::parse(Some("density")), GridQuantity::Regime);
    for name in GridQuantity::NAMES {
        assert_eq!(GridQuantity::parse(Some(name)).name(), name);
    }
    assert_eq!(
        GridQuantity::SecondRemnant.label(),
        "Accretion efficiency of second remnant"
    );
}

#[test]
fn test_quantity_values() {
    let (target, impactor) = bodies();
    let merged = Outcome {
        largest: Body::new(target.mass + impactor.mass, target.radius),
        second: Body::empty(),
        debris: Body::from_mass(0.0),
        regime: Regime::Accretion,
    };

    assert_eq!(GridQuantity::Regime.value(&merged, &target, &impactor), 1.0);
    assert_relative_eq!(GridQuantity::LargestRemnant.value(&merged, &target, &impactor), 1.0);
    assert_eq!(GridQuantity::SecondRemnant.value(&merged, &target, &impactor), NO_SECOND_REMNANT);
    assert_eq!(GridQuantity::Debris.value(&merged, &target, &impactor), 0.0);

    let hit_and_run = Outcome {
        largest: target,
        second: Body::new(0.75 * impactor.mass, impactor.radius),
        debris: Body::from_mass(0.25 * impactor.mass),
        regime: Regime::HitAndRun,
    };
    assert_eq!(GridQuantity::Regime.value(&hit_and_run, &target, &impactor), 5.0);
    assert_relative_eq!(GridQuantity::SecondRemnant.value(&hit_and_run, &target, &impactor), -0.25);
    assert_relative_eq!(GridQuantity::Debris.value(&hit_and_run, &target, &impactor), 0.25);
}

#[test]
fn test_regime_sweep() {
    let engine = ScalingLawEngine::new();
    let (target, impactor) = bodies();
    let evaluator = OutcomeEvaluator::new(&engine, ModelSelector::configure(CollisionModel::Sl2012));
    let map = GridSweeper::new(evaluator).sweep(&target, &impactor, GridQuantity::Regime);

    assert_eq!(map.angles.len(), GRID_SIZE);
    assert_eq!(map.ratios.len(), GRID_SIZE);
    assert_eq!(map.values.len(), GRID_SIZE);
    assert!(map.values.iter().all(|row| row.len() == GRID_SIZE));

    // Below escape velocity everything merges
    assert!(map.values[0].iter().all(|v| *v == 1.0));

    assert_eq!(map.failed_cells, 0);
    assert!(map.values.iter().flatten().all(|v| (1.0..=5.0).contains(v)));

    // Tangential contact merges below 1.08 - 0.0408 / 3 escape velocities and
    // hits and runs above it
    let last = GRID_SIZE - 1;
    assert_eq!(map.values[1][last], 4.0);
    assert_eq!(map.values[2][last], 4.0);
    assert!(map.values[3..].iter().all(|row| row[last] == 5.0));
}

#[test]
fn test_failed_cells_are_isolated() {
    let engine = SteepFailure(ScalingLawEngine::new());
    let (target, impactor) = bodies();
    let evaluator = OutcomeEvaluator::new(&engine, ModelSelector::configure(CollisionModel::Ls2012));
    let map = GridSweeper::new(evaluator).sweep(&target, &impactor, GridQuantity::Debris);

    // Columns 61..=90 fail on every row
    assert_eq!(map.failed_cells, 30 * GRID_SIZE);
    for row in &map.values {
        assert!(row[61..].iter().all(|v| *v == FAILED_CELL));
        assert!(row[..=60].iter().all(|v| *v >= 0.0));
    }
}

#[test]
fn test_second_remnant_sentinel() {
    let engine = ScalingLawEngine::new();
    let (target, impactor) = bodies();
    let evaluator = OutcomeEvaluator::new(&engine, ModelSelector::configure(CollisionModel::Ls2012));
    let map = GridSweeper::new(evaluator).sweep(&target, &impactor, GridQuantity::SecondRemnant);

    // Head-on impacts never hit and run
    assert!(map.values.iter().all(|row| row[0] == NO_SECOND_REMNANT));
    // LS2012 keeps the projectile intact
    assert!(
        map.values
            .iter()
            .flatten()
            .all(|v| *v == NO_SECOND_REMNANT || v.abs() < 1e-12)
    );
}
