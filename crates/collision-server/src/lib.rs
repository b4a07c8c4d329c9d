//! HTTP service for planetary collision outcomes.
//!
//! Requests are validated and converted to canonical units ([`params`]), the
//! colliding bodies are built ([`bodies`]) and the engine is configured for the
//! requested model ([`model`]). A single impact is then resolved
//! ([`outcome`]) or a regime map is swept ([`grid`]) and encoded
//! ([`format`]).

pub mod bodies;
pub mod coll;
pub mod config;
pub mod error;
pub mod format;
pub mod grid;
pub mod model;
pub mod outcome;
pub mod params;
pub mod query;
pub mod routes;

#[cfg(test)]
mod grid_test;
#[cfg(test)]
mod params_test;
#[cfg(test)]
mod query_test;

pub use coll::CollModule;
pub use config::{ConfigError, ModuleKind, ServerConfig};
pub use error::ServerError;
pub use routes::{AppState, router};
