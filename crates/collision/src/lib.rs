//! Two-body collision outcomes.
//!
//! This crate defines the [`CollisionEngine`] contract used by the collision
//! service and ships [`ScalingLawEngine`], an implementation based on published
//! scaling laws.
//!
//! ```
//! use collision::{Body, CollisionEngine, CollisionModel, EngineConfig, ScalingLawEngine, UnitSystem};
//! use units::{Length, Mass};
//!
//! let engine = ScalingLawEngine::new();
//! let conf = EngineConfig::new(UnitSystem::SolarAuDay, CollisionModel::Ls2012);
//!
//! let target = Body::new(
//!     Mass::from_earth_masses(1.0).to_solar_masses(),
//!     Length::from_earth_radii(1.0).to_au(),
//! );
//! let impactor = Body::new(
//!     Mass::from_earth_masses(0.1).to_solar_masses(),
//!     Length::from_earth_radii(0.5).to_au(),
//! );
//!
//! let v_esc = engine.escape_velocity(&conf, &target, &impactor);
//! let impact = engine.setup(&conf, &target, &impactor, 1.5 * v_esc, 0.3).unwrap();
//! let resolution = engine.resolve(&conf, &impact, 2, true).unwrap();
//!
//! assert_eq!(resolution.bodies.len(), 3);
//! ```

pub mod body;
pub mod config;
pub mod engine;
pub mod error;
pub mod regime;
pub mod scaling;


pub use body::{Body, merge_bodies};
pub use config::{CollisionModel, EngineConfig, UnitSystem};
pub use engine::{CollisionEngine, Impact, Resolution};
pub use error::{EngineError, Result};
pub use regime::Regime;
pub use scaling::{ScalingLawEngine, ScalingParameters};
