//! Regime and efficiency maps over impact angle and velocity.

use collision::{Body, Regime};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::outcome::{Outcome, OutcomeEvaluator};

pub const ANGLE_MIN: f64 = 0.0;
pub const ANGLE_MAX: f64 = 90.0;
pub const RATIO_MIN: f64 = 0.99;
pub const RATIO_MAX: f64 = 4.01;
pub const GRID_SIZE: usize = 91;

/// Cell value when the engine fails.
pub const FAILED_CELL: f64 = 0.0;
/// Second-remnant efficiency outside hit-and-run.
pub const NO_SECOND_REMNANT: f64 = -1.1;

/// `n` evenly spaced values from `start` to `end`, both included.
///
/// ```
/// use collision_server::grid::linspace;
///
/// assert_eq!(linspace(0.0, 90.0, 7), vec![0.0, 15.0, 30.0, 45.0, 60.0, 75.0, 90.0]);
/// ```
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            values[n - 1] = end;
            values
        }
    }
}

/// Quantity mapped by a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridQuantity {
    #[default]
    Regime,
    LargestRemnant,
    SecondRemnant,
    Debris,
}

impl GridQuantity {
    pub const NAMES: [&'static str; 4] = ["regime", "acclr", "accsr", "acctr"];

    /// Missing or unknown names select the regime map.
    pub fn parse(name: Option<&str>) -> Self {
        match name {
            Some("acclr") => GridQuantity::LargestRemnant,
            Some("accsr") => GridQuantity::SecondRemnant,
            Some("acctr") => GridQuantity::Debris,
            _ => GridQuantity::Regime,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GridQuantity::Regime => "regime",
            GridQuantity::LargestRemnant => "acclr",
            GridQuantity::SecondRemnant => "accsr",
            GridQuantity::Debris => "acctr",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GridQuantity::Regime => "Collision regime",
            GridQuantity::LargestRemnant => "Accretion efficiency of largest remnant",
            GridQuantity::SecondRemnant => "Accretion efficiency of second remnant",
            GridQuantity::Debris => "Accretion efficiency of debris",
        }
    }

    /// Cell value of a resolved impact.
    pub fn value(&self, outcome: &Outcome, target: &Body, impactor: &Body) -> f64 {
        let efficiencies = outcome.efficiencies(target, impactor);
        match self {
            GridQuantity::Regime => outcome.regime.code() as f64,
            GridQuantity::LargestRemnant => efficiencies.largest,
            GridQuantity::SecondRemnant if outcome.regime != Regime::HitAndRun => NO_SECOND_REMNANT,
            GridQuantity::SecondRemnant => efficiencies.second,
            GridQuantity::Debris => efficiencies.debris,
        }
    }
}

/// A completed sweep. `values[row][column]` is the cell at `(angles[column],
/// ratios[row])`.
#[derive(Debug, Clone, PartialEq)]
pub struct GridMap {
    pub quantity: GridQuantity,
    /// Degrees
    pub angles: Vec<f64>,
    /// Impact velocity over mutual escape velocity
    pub ratios: Vec<f64>,
    pub values: Vec<Vec<f64>>,
    pub failed_cells: usize,
}

pub struct GridSweeper<'a> {
    evaluator: OutcomeEvaluator<'a>,
}

impl<'a> GridSweeper<'a> {
    pub fn new(evaluator: OutcomeEvaluator<'a>) -> Self {
        Self { evaluator }
    }

    /// Evaluates every cell of the angle × velocity grid.
    ///
    /// Cells are independent: an engine failure only sets its own cell to
    /// [`FAILED_CELL`].
    pub fn sweep(&self, target: &Body, impactor: &Body, quantity: GridQuantity) -> GridMap {
        let angles = linspace(ANGLE_MIN, ANGLE_MAX, GRID_SIZE);
        let ratios = linspace(RATIO_MIN, RATIO_MAX, GRID_SIZE);
        let escape_velocity = self.evaluator.escape_velocity(target, impactor);

        let cells: Vec<Option<f64>> = (0..ratios.len() * angles.len())
            .into_par_iter()
            .map(|index| {
                let (row, column) = (index / angles.len(), index % angles.len());
                let velocity = escape_velocity * ratios[row];
                let angle = angles[column].to_radians();

                match self.evaluator.resolve(target, impactor, velocity, angle) {
                    Ok(outcome) => Some(quantity.value(&outcome, target, impactor)),
                    Err(err) => {
                        debug!(angle = angles[column], ratio = ratios[row], %err, "cell failed");
                        None
                    }
                }
            })
            .collect();

        let failed_cells = cells.iter().filter(|cell| cell.is_none()).count();
        let values = cells
            .chunks(angles.len())
            .map(|row| row.iter().map(|cell| cell.unwrap_or(FAILED_CELL)).collect())
            .collect();

        info!(
            quantity = quantity.name(),
            cells = ratios.len() * angles.len(),
            failed_cells,
            "sweep complete"
        );

        GridMap {
            quantity,
            angles,
            ratios,
            values,
            failed_cells,
        }
    }
}
