//! Scaling-law collision engine.
//!
//! Resolves impacts with the catastrophic-disruption scaling laws of
//! Leinhardt & Stewart (2012):
//!
//! - Below the mutual escape velocity bodies merge.
//! - The specific impact energy Q_R is compared with the disruption threshold
//!   Q'*_RD, corrected for the mass ratio and for the fraction of the projectile
//!   that actually intersects the target.
//! - Grazing impacts (b > R_t / (R_t + R_p)) merge below the Kokubo & Genda
//!   (2010) critical velocity and become hit-and-run above it unless the target
//!   is eroded. A tangential contact (b = 1) leaves both bodies intact.
//!
//! # References
//!
//! - Leinhardt & Stewart (2012) - Collisions between gravity-dominated bodies I
//! - Stewart & Leinhardt (2012) - Collisions between gravity-dominated bodies II
//! - Kokubo & Genda (2010) - Formation of terrestrial planets from protoplanets

use std::f64::consts::{FRAC_PI_2, PI};

use nalgebra::Vector2;
use units::{Density, Length, Mass, mutual_escape_velocity, sphere_radius};

use crate::body::{Body, merge_bodies};
use crate::config::{CollisionModel, EngineConfig};
use crate::engine::{CollisionEngine, Impact, Resolution};
use crate::error::{EngineError, Result};
use crate::regime::Regime;

/// Q_R / Q'*_RD above which the largest remnant follows the super-catastrophic law
const SUPERCATASTROPHIC_ONSET: f64 = 1.8;

/// Interacting fraction below which the bodies are considered to miss each other
const MIN_INTERACTING_FRACTION: f64 = 1.0e-12;

/// Angles may exceed π/2 by rounding when converted from degrees
const ANGLE_TOLERANCE: f64 = 1.0e-12;

/// Free parameters of the scaling laws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalingParameters {
    /// Dimensionless disruption energy for equal-mass impacts (c*)
    pub c_star: f64,
    /// Velocity exponent of the coupling parameter (μ̄)
    pub mu_bar: f64,
    /// Slope of the super-catastrophic largest-remnant law (η)
    pub eta: f64,
    /// Reference density ρ₁ in kg/m³
    pub reference_density: f64,
    /// Exponent of the equilibrium mass-radius law R ∝ M^k
    pub radius_exponent: f64,
    /// Bulk density used for radii outside the equilibrium law, in g/cm³
    pub bulk_density: f64,
}

impl Default for ScalingParameters {
    fn default() -> Self {
        Self {
            c_star: 1.9,
            mu_bar: 0.36,
            eta: -1.5,
            reference_density: 1000.0,
            radius_exponent: 0.27,
            bulk_density: 5.513,
        }
    }
}

/// Mass budget of a resolved impact before it is packed into a [`Resolution`].
#[derive(Debug, Clone, Copy)]
struct Fragments {
    largest: Body,
    second: Body,
    debris: f64,
    regime: Regime,
}

impl Fragments {
    fn merged(impact: &Impact, regime: Regime) -> Self {
        Self {
            largest: merge_bodies(&impact.target, &impact.impactor),
            second: Body::empty(),
            debris: 0.0,
            regime,
        }
    }

    fn into_resolution(self, remnants: usize, debris: bool) -> Resolution {
        let mut bodies = vec![self.largest];
        let mut debris_mass = self.debris;

        if remnants >= 2 {
            bodies.push(self.second);
            bodies.resize(remnants, Body::empty());
        } else {
            debris_mass += self.second.mass;
        }

        if debris {
            bodies.push(Body::from_mass(debris_mass.max(0.0)));
        }

        Resolution {
            bodies,
            regime: self.regime,
        }
    }
}

/// Fraction of the projectile's volume intersecting the target for a projected
/// overlap length `l`.
///
/// α = (3 R l² − l³) / (4 R³) for l < 2R, 1 otherwise.
pub fn interacting_fraction(overlap: f64, radius: f64) -> f64 {
    if overlap >= 2.0 * radius {
        1.0
    } else {
        ((3.0 * radius * overlap.powi(2) - overlap.powi(3)) / (4.0 * radius.powi(3))).max(0.0)
    }
}

/// Critical velocity between graze-and-merge and hit-and-run, in units of the
/// mutual escape velocity (Kokubo & Genda 2010).
///
/// `gamma` is (M_t − M_p) / M_tot and `theta` is 1 − sin θ.
pub fn graze_merge_threshold(gamma: f64, theta: f64) -> f64 {
    const C1: f64 = 2.43;
    const C2: f64 = -0.0408;
    const C3: f64 = 1.86;
    const C4: f64 = 1.08;
    const C5: f64 = 2.5;

    C1 * gamma.powi(2) * theta.powf(C5) + C2 * gamma + C3 * theta.powf(C5) + C4
}

#[derive(Debug, Clone, Default)]
pub struct ScalingLawEngine {
    pub params: ScalingParameters,
}

impl ScalingLawEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parameters(params: ScalingParameters) -> Self {
        Self { params }
    }

    /// Catastrophic disruption threshold Q'*_RD for head-on impacts.
    fn disruption_threshold(&self, conf: &EngineConfig, total_mass: f64, mass_ratio: f64) -> f64 {
        let g = conf.units.gravitational_constant();
        let rho1 = conf
            .units
            .density(Density::from_kg_per_m3(self.params.reference_density));

        let spherical_radius = (3.0 * total_mass / (4.0 * PI * rho1)).powf(1.0 / 3.0);
        let equal_mass = self.params.c_star * 0.8 * PI * rho1 * g * spherical_radius.powi(2);

        let exponent = 2.0 / (3.0 * self.params.mu_bar) - 1.0;
        equal_mass * ((mass_ratio + 1.0).powi(2) / (4.0 * mass_ratio)).powf(exponent)
    }

    /// Largest remnant mass for a given Q_R / Q'*_RD.
    fn largest_remnant(&self, total_mass: f64, energy_ratio: f64) -> f64 {
        let mass = if energy_ratio < SUPERCATASTROPHIC_ONSET {
            total_mass * (1.0 - 0.5 * energy_ratio)
        } else {
            total_mass * 0.1 / SUPERCATASTROPHIC_ONSET.powf(self.params.eta)
                * energy_ratio.powf(self.params.eta)
        };
        mass.clamp(0.0, total_mass)
    }

    /// Projectile remnant of a hit-and-run, from the reverse impact of the
    /// target's interacting mass onto the projectile.
    fn eroded_projectile(&self, conf: &EngineConfig, projectile: &Body, alpha: f64, speed: f64) -> f64 {
        let interacting = alpha * projectile.mass;
        let total = projectile.mass + interacting;
        let reduced = projectile.mass * interacting / total;

        let specific_energy = 0.5 * reduced * speed.powi(2) / total;
        let threshold = self.disruption_threshold(conf, total, interacting / projectile.mass);

        self.largest_remnant(total, specific_energy / threshold)
            .min(projectile.mass)
    }

    fn scaling_fragments(&self, conf: &EngineConfig, impact: &Impact) -> Result<Fragments> {
        let target = impact.target;
        let projectile = impact.impactor;
        let total_mass = impact.total_mass();
        let speed = impact.speed();

        let v_esc = self.escape_velocity(conf, &target, &projectile);
        if speed <= v_esc {
            return Ok(Fragments::merged(impact, Regime::Accretion));
        }

        let b = impact.impact_parameter();
        let radius_sum = target.radius + projectile.radius;
        let mass_contrast = (target.mass - projectile.mass) / total_mass;
        let graze_merges = speed < v_esc * graze_merge_threshold(mass_contrast, 1.0 - b);

        let alpha = interacting_fraction(radius_sum * (1.0 - b), projectile.radius);
        if alpha < MIN_INTERACTING_FRACTION {
            // Tangential contact: the bodies graze without exchanging mass
            if graze_merges {
                return Ok(Fragments::merged(impact, Regime::GrazeAndMerge));
            }
            return Ok(Fragments {
                largest: target,
                second: projectile,
                debris: 0.0,
                regime: Regime::HitAndRun,
            });
        }

        let reduced = target.mass * projectile.mass / total_mass;
        let reduced_alpha = alpha * target.mass * projectile.mass / (alpha * projectile.mass + target.mass);
        let specific_energy = 0.5 * reduced * speed.powi(2) / total_mass;

        let threshold = self.disruption_threshold(conf, total_mass, projectile.mass / target.mass)
            * (reduced / reduced_alpha).powf(2.0 - 1.5 * self.params.mu_bar);
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(EngineError::Degenerate("non-finite disruption threshold"));
        }

        let energy_ratio = specific_energy / threshold;
        let largest = self.largest_remnant(total_mass, energy_ratio);
        let disrupted = |regime| Fragments {
            largest: target.with_mass(largest),
            second: Body::empty(),
            debris: total_mass - largest,
            regime,
        };

        let grazing = b > target.radius / radius_sum;
        if grazing {
            if graze_merges {
                return Ok(Fragments::merged(impact, Regime::GrazeAndMerge));
            }
            if energy_ratio >= SUPERCATASTROPHIC_ONSET {
                return Ok(disrupted(Regime::SuperCatastrophic));
            }
            if largest < target.mass {
                return Ok(disrupted(Regime::Erosion));
            }

            let second = match conf.model {
                CollisionModel::Ls2012 => projectile.mass,
                _ => self.eroded_projectile(conf, &projectile, alpha, speed),
            };
            return Ok(Fragments {
                largest: target,
                second: projectile.with_mass(second),
                debris: (total_mass - target.mass - second).max(0.0),
                regime: Regime::HitAndRun,
            });
        }

        let regime = if energy_ratio >= SUPERCATASTROPHIC_ONSET {
            Regime::SuperCatastrophic
        } else if largest >= target.mass {
            Regime::Accretion
        } else {
            Regime::Erosion
        };
        Ok(disrupted(regime))
    }
}

impl CollisionEngine for ScalingLawEngine {
    fn escape_velocity(&self, conf: &EngineConfig, a: &Body, b: &Body) -> f64 {
        mutual_escape_velocity(
            conf.units.gravitational_constant(),
            a.mass,
            b.mass,
            a.radius,
            b.radius,
        )
    }

    fn setup(
        &self,
        _conf: &EngineConfig,
        target: &Body,
        impactor: &Body,
        velocity: f64,
        angle: f64,
    ) -> Result<Impact> {
        for body in [target, impactor] {
            if !body.is_physical() {
                return Err(EngineError::InvalidBody {
                    mass: body.mass,
                    radius: body.radius,
                });
            }
        }

        let angle_valid = angle.is_finite() && (0.0..=FRAC_PI_2 + ANGLE_TOLERANCE).contains(&angle);
        if !velocity.is_finite() || velocity <= 0.0 || !angle_valid {
            return Err(EngineError::InvalidImpact { velocity, angle });
        }

        // The larger body is always the target
        let (target, impactor) = if impactor.mass > target.mass {
            (*impactor, *target)
        } else {
            (*target, *impactor)
        };

        let distance = target.radius + impactor.radius;
        let angle = angle.min(FRAC_PI_2);

        Ok(Impact {
            target,
            impactor,
            position: Vector2::new(-distance * angle.cos(), distance * angle.sin()),
            velocity: Vector2::new(velocity, 0.0),
        })
    }

    fn resolve(
        &self,
        conf: &EngineConfig,
        impact: &Impact,
        remnants: usize,
        debris: bool,
    ) -> Result<Resolution> {
        if remnants == 0 {
            return Err(EngineError::NoRemnants);
        }

        let fragments = match conf.model {
            CollisionModel::PerfectMerge => Fragments::merged(impact, Regime::Accretion),
            _ => self.scaling_fragments(conf, impact)?,
        };

        Ok(fragments.into_resolution(remnants, debris))
    }

    fn body_radius(&self, conf: &EngineConfig, body: &mut Body) {
        body.radius = match conf.model {
            CollisionModel::C2019 => {
                let earth_mass = conf.units.mass(Mass::from_earth_masses(1.0));
                let earth_radius = conf.units.length(Length::from_earth_radii(1.0));
                earth_radius * (body.mass / earth_mass).powf(self.params.radius_exponent)
            }
            _ => {
                let unit_mass = conf.units.mass(Mass::from_solar_masses(1.0));
                let unit_radius = sphere_radius(
                    Mass::from_solar_masses(1.0),
                    Density::from_grams_per_cm3(self.params.bulk_density),
                );
                conf.units.length(unit_radius) * (body.mass / unit_mass).cbrt()
            }
        };
    }
}
