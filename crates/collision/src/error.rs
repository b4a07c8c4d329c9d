//! Engine errors

use thiserror::Error;

/// Engine result type
pub type Result<T> = std::result::Result<T, EngineError>;

/// Failures raised by a collision engine while setting up or resolving an impact.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("invalid body: mass {mass}, radius {radius}")]
    InvalidBody { mass: f64, radius: f64 },

    #[error("invalid impact geometry: velocity {velocity}, angle {angle} rad")]
    InvalidImpact { velocity: f64, angle: f64 },

    #[error("at least one remnant must be requested")]
    NoRemnants,

    #[error("degenerate collision: {0}")]
    Degenerate(&'static str),
}
